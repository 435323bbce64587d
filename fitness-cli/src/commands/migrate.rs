//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use fitness_server::db::schema;

use crate::config::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Create tables and indexes, then exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let db = args.db.connect().await?;
    schema::migrate(db.pool())
        .await
        .context("Failed to bootstrap database schema")?;
    db.pool().close().await;

    println!("Schema is up to date");
    Ok(())
}
