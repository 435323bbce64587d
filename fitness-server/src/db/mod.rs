//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - One `Database` handle built at startup and injected into handlers
//! - Rely on DB constraints, handle violations - no check-then-insert
//! - Related rows fetched with an explicit JOIN on the association table
//! - Transactions for multi-step operations

pub mod pool;
pub mod repos;
pub mod schema;

use sqlx::PgPool;

use crate::models::EntityKind;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;

/// Data access handle shared by every request.
///
/// Cloning is cheap: it only clones the underlying pool handle.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Repository for one entity kind.
    pub fn entities(&self, kind: EntityKind) -> EntityRepo<'_> {
        EntityRepo::new(&self.pool, kind)
    }

    pub fn muscles(&self) -> EntityRepo<'_> {
        self.entities(EntityKind::Muscle)
    }

    pub fn exercises(&self) -> EntityRepo<'_> {
        self.entities(EntityKind::Exercise)
    }

    /// Repository for exercise-muscle links.
    pub fn links(&self) -> LinkRepo<'_> {
        LinkRepo::new(&self.pool)
    }
}
