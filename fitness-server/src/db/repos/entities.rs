//! Entity repository
//!
//! One implementation serves both muscles and exercises; the `EntityKind`
//! picks the table and the side of the association.
//!
//! - create: plain INSERT, UNIQUE violation rolled back and mapped
//! - get: row + related rows via JOIN, on one connection
//! - delete: single DELETE, association rows go by cascade

use sqlx::{FromRow, PgPool};

use crate::models::kind::ASSOCIATION_TABLE;
use crate::models::{EntityKind, EntityName};
use super::{is_unique_violation, DbError};

/// Entity record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Entity {
    pub id: i32,
    pub name: String,
}

/// Entity together with everything it is linked to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDetail {
    pub id: i32,
    pub name: String,
    /// Kind of the entries in `related`
    pub related_kind: EntityKind,
    pub related: Vec<Entity>,
}

/// Repository for one entity kind
pub struct EntityRepo<'a> {
    pool: &'a PgPool,
    kind: EntityKind,
}

impl<'a> EntityRepo<'a> {
    pub fn new(pool: &'a PgPool, kind: EntityKind) -> Self {
        Self { pool, kind }
    }

    /// List every row of this kind, ordered by id.
    pub async fn list(&self) -> Result<Vec<Entity>, DbError> {
        let sql = format!("SELECT id, name FROM {} ORDER BY id", self.kind.table());
        let rows = sqlx::query_as::<_, Entity>(&sql)
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// Insert a new row.
    ///
    /// The UNIQUE constraint on `name` decides duplicates, so two concurrent
    /// creates with the same name cannot both succeed. On violation the
    /// transaction is rolled back and `DuplicateEntry` returned.
    pub async fn create(&self, name: EntityName) -> Result<Entity, DbError> {
        let sql = format!(
            "INSERT INTO {} (name) VALUES ($1) RETURNING id, name",
            self.kind.table()
        );

        let mut tx = self.pool.begin().await?;
        let inserted = sqlx::query_as::<_, Entity>(&sql)
            .bind(name.as_str())
            .fetch_one(&mut *tx)
            .await;

        match inserted {
            Ok(entity) => {
                tx.commit().await?;
                tracing::info!(kind = %self.kind, id = entity.id, name = %entity.name, "created");
                Ok(entity)
            }
            Err(err) if is_unique_violation(&err) => {
                tx.rollback().await?;
                tracing::warn!(kind = %self.kind, name = %name.as_str(), "duplicate name rejected");
                Err(DbError::DuplicateEntry {
                    kind: self.kind,
                    name: name.into_string(),
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Get a row by id with its related rows of the other kind.
    pub async fn get(&self, id: i32) -> Result<EntityDetail, DbError> {
        let other = self.kind.other();
        let select = format!("SELECT id, name FROM {} WHERE id = $1", self.kind.table());
        let related = format!(
            r#"
            SELECT o.id, o.name
            FROM {other_table} o
            JOIN {assoc} a ON a.{other_col} = o.id
            WHERE a.{own_col} = $1
            ORDER BY o.id
            "#,
            other_table = other.table(),
            assoc = ASSOCIATION_TABLE,
            other_col = other.link_column(),
            own_col = self.kind.link_column(),
        );

        // Both reads on one connection so the pair is consistent
        let mut tx = self.pool.begin().await?;

        let entity = sqlx::query_as::<_, Entity>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(DbError::NotFound {
                kind: self.kind,
                id,
            })?;

        let related = sqlx::query_as::<_, Entity>(&related)
            .bind(id)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(EntityDetail {
            id: entity.id,
            name: entity.name,
            related_kind: other,
            related,
        })
    }

    /// Delete a row by id. Association rows referencing it are removed by
    /// the foreign key cascade within the same statement.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.kind.table());
        let result = sqlx::query(&sql).bind(id).execute(self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                kind: self.kind,
                id,
            });
        }

        tracing::info!(kind = %self.kind, id, "deleted");
        Ok(())
    }
}
