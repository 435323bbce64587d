//! Exercise-muscle link repository
//!
//! Both endpoints of a link are locked `FOR SHARE` before the join table is
//! touched, so a concurrent delete of either side waits for this transaction.

use sqlx::{PgConnection, PgPool};

use crate::models::EntityKind;
use super::DbError;

/// Repository for the exercise-muscle association
pub struct LinkRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> LinkRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Link an exercise to a muscle. Linking an existing pair is a no-op.
    pub async fn link(&self, exercise_id: i32, muscle_id: i32) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        lock_existing(&mut tx, EntityKind::Exercise, exercise_id).await?;
        lock_existing(&mut tx, EntityKind::Muscle, muscle_id).await?;

        let result = sqlx::query(
            r#"
            INSERT INTO exercise_muscle_association (exercise_id, muscle_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(exercise_id)
        .bind(muscle_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        if result.rows_affected() > 0 {
            tracing::info!(exercise_id, muscle_id, "linked");
        }
        Ok(())
    }

    /// Remove the link between an exercise and a muscle.
    pub async fn unlink(&self, exercise_id: i32, muscle_id: i32) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        lock_existing(&mut tx, EntityKind::Exercise, exercise_id).await?;
        lock_existing(&mut tx, EntityKind::Muscle, muscle_id).await?;

        let result = sqlx::query(
            r#"
            DELETE FROM exercise_muscle_association
            WHERE exercise_id = $1 AND muscle_id = $2
            "#,
        )
        .bind(exercise_id)
        .bind(muscle_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotLinked {
                exercise_id,
                muscle_id,
            });
        }

        tx.commit().await?;
        tracing::info!(exercise_id, muscle_id, "unlinked");
        Ok(())
    }
}

/// Lock a row for the rest of the transaction, or fail with NotFound.
async fn lock_existing(conn: &mut PgConnection, kind: EntityKind, id: i32) -> Result<(), DbError> {
    let sql = format!("SELECT id FROM {} WHERE id = $1 FOR SHARE", kind.table());
    sqlx::query_scalar::<_, i32>(&sql)
        .bind(id)
        .fetch_optional(conn)
        .await?
        .ok_or(DbError::NotFound { kind, id })?;
    Ok(())
}
