//! Request handlers, one per store operation.
//!
//! Each handler makes exactly one store call under one lock guard, so the
//! existence check and the write in update/delete cannot interleave with
//! another request.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use todo_core::{CreateTodo, Todo, TodoId, UpdateTodo};

use crate::error::ApiError;
use crate::Db;

pub async fn list_todos(State(db): State<Db>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = db.read().await.list()?;
    Ok(Json(todos))
}

pub async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<TodoId>,
) -> Result<Json<Todo>, ApiError> {
    let todo = db.read().await.get(id)?.ok_or(ApiError::NotFound)?;
    Ok(Json(todo))
}

pub async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = db.write().await.create(input.title)?;
    tracing::debug!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<TodoId>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, ApiError> {
    let todo = db
        .write()
        .await
        .update(id, input.title, input.completed)?
        .ok_or(ApiError::NotFound)?;
    tracing::debug!(id, completed = todo.completed, "updated todo");
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<TodoId>,
) -> Result<StatusCode, ApiError> {
    db.write().await.remove(id)?.ok_or(ApiError::NotFound)?;
    tracing::debug!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
