//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Uniqueness enforced by the UNIQUE constraint, violations mapped to DbError
//! - Missing rows surface as DbError::NotFound, never as empty values
//! - Uses transactions for multi-step operations

pub mod entities;
pub mod links;

pub use entities::{Entity, EntityDetail, EntityRepo};
pub use links::LinkRepo;

use crate::models::EntityKind;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{kind} with ID \"{id}\" not found")]
    NotFound { kind: EntityKind, id: i32 },

    #[error("{kind} with name \"{name}\" already exists")]
    DuplicateEntry { kind: EntityKind, name: String },

    #[error("Exercise {exercise_id} is not linked to muscle {muscle_id}")]
    NotLinked { exercise_id: i32, muscle_id: i32 },
}

/// True when the error is a UNIQUE constraint violation.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}
