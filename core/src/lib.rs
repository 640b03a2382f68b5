//! Storage core for the todo service.
//!
//! # Overview
//! Owns the `Todo` data model and the authoritative collection of items. The
//! crate performs no I/O and has no async runtime; the server crate wraps a
//! store in a lock and exposes it over HTTP.
//!
//! # Design
//! - `TodoStore` is the seam between request handling and storage, so a
//!   different backend can be injected without touching the handlers.
//! - "Not found" is an `Option`, faults are `StoreError`.
//! - `MemoryStore` assigns ids from 1 upwards and never reuses them.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::{MemoryStore, TodoStore};
pub use types::{CreateTodo, Todo, TodoId, UpdateTodo};
