//! Schema bootstrap
//!
//! Idempotent `CREATE ... IF NOT EXISTS` statements, run in one transaction.
//! Association rows are removed by `ON DELETE CASCADE` when either side goes.

use sqlx::PgPool;

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS muscle (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS exercise (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS exercise_muscle_association (
        exercise_id INTEGER NOT NULL REFERENCES exercise(id) ON DELETE CASCADE,
        muscle_id INTEGER NOT NULL REFERENCES muscle(id) ON DELETE CASCADE,
        PRIMARY KEY (exercise_id, muscle_id)
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS exercise_muscle_association_muscle_idx
        ON exercise_muscle_association (muscle_id)
    "#,
];

/// Create all tables and indexes if they do not exist yet.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Bootstrapping database schema");

    let mut tx = pool.begin().await?;
    for statement in STATEMENTS {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    tracing::info!(statements = STATEMENTS.len(), "Schema ready");
    Ok(())
}
