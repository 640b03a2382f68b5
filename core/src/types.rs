//! Domain types for the todo store.
//!
//! # Design
//! The same structs are used as the store's records and as the HTTP wire
//! format, so the server crate never needs a separate DTO layer for `Todo`.
//! Request payloads are total: an update replaces both mutable fields.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store. Starts at 1 and only grows.
pub type TodoId = u64;

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// Request payload for updating an existing todo. Both fields are required
/// and overwrite the stored values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub title: String,
    pub completed: bool,
}
