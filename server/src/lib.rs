//! HTTP front end for the todo store.
//!
//! # Overview
//! Maps `GET/POST /todos` and `GET/PUT/DELETE /todos/{id}` onto a
//! `TodoStore` held in shared state. Path and body validation is left to
//! axum's extractors; store absence becomes 404 and store faults become a
//! generic 500.
//!
//! # Design
//! - The store is injected at construction (`app_with_store`), never global.
//! - One `tokio::sync::RwLock` guards the whole store: reads share, writes
//!   are exclusive, and each handler does a single store call per guard.
//! - Panics inside handlers are caught and answered with the same 500 body
//!   as store faults.

pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::{net::TcpListener, sync::RwLock};
use todo_core::{MemoryStore, TodoStore};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ErrorBody};
pub use todo_core::Todo;

use handlers::{create_todo, delete_todo, get_todo, list_todos, update_todo};

pub type Db = Arc<RwLock<dyn TodoStore>>;

/// Router over a fresh, empty `MemoryStore`.
pub fn app() -> Router {
    app_with_store(MemoryStore::new())
}

/// Router over the given store.
pub fn app_with_store<S: TodoStore + 'static>(store: S) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

/// Serve `app()` on `listener` until Ctrl-C.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => {
            tracing::warn!(error = %err, "could not listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
