//! Error types for store backends.
//!
//! # Design
//! A missing todo is not an error: store operations return `Option` for
//! lookups and leave `StoreError` for genuine faults. The server maps every
//! `StoreError` to a generic 500 without exposing the message.

use thiserror::Error;

/// Faults raised by a `TodoStore` implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The id sequence cannot advance any further.
    #[error("todo id sequence exhausted")]
    IdsExhausted,

    /// Opaque failure from a backend other than `MemoryStore`.
    #[error("store backend failure: {0}")]
    Backend(String),
}
