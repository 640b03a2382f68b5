//! The `TodoStore` seam and its in-memory implementation.
//!
//! # Design
//! `TodoStore` is synchronous and does no I/O; callers that share a store
//! across threads wrap it in a lock. Mutations take `&mut self`, so a single
//! write guard covers a whole check-then-act sequence.

use crate::error::StoreError;
use crate::types::{Todo, TodoId};

/// Storage operations for todo items.
///
/// Absence is reported as `None`, never as an error.
pub trait TodoStore: Send + Sync {
    /// All items in insertion order.
    fn list(&self) -> Result<Vec<Todo>, StoreError>;

    fn get(&self, id: TodoId) -> Result<Option<Todo>, StoreError>;

    /// Append a new item with the next id and `completed = false`.
    fn create(&mut self, title: String) -> Result<Todo, StoreError>;

    /// Overwrite `title` and `completed` of an existing item. Never inserts.
    fn update(
        &mut self,
        id: TodoId,
        title: String,
        completed: bool,
    ) -> Result<Option<Todo>, StoreError>;

    /// Delete an item, returning it if it existed.
    fn remove(&mut self, id: TodoId) -> Result<Option<Todo>, StoreError>;
}

/// Process-scoped store backed by a `Vec`.
///
/// Ids are handed out in increasing order and items are only ever appended,
/// so `todos` stays sorted by id and lookups can binary search.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    todos: Vec<Todo>,
    next_id: TodoId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.binary_search_by_key(&id, |todo| todo.id).ok()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore for MemoryStore {
    fn list(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.todos.clone())
    }

    fn get(&self, id: TodoId) -> Result<Option<Todo>, StoreError> {
        Ok(self.position(id).map(|index| self.todos[index].clone()))
    }

    fn create(&mut self, title: String) -> Result<Todo, StoreError> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(StoreError::IdsExhausted)?;
        let todo = Todo {
            id,
            title,
            completed: false,
        };
        self.todos.push(todo.clone());
        Ok(todo)
    }

    fn update(
        &mut self,
        id: TodoId,
        title: String,
        completed: bool,
    ) -> Result<Option<Todo>, StoreError> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };
        let todo = &mut self.todos[index];
        todo.title = title;
        todo.completed = completed;
        Ok(Some(todo.clone()))
    }

    fn remove(&mut self, id: TodoId) -> Result<Option<Todo>, StoreError> {
        Ok(self.position(id).map(|index| self.todos.remove(index)))
    }
}
