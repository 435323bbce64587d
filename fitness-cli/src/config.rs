//! Database connection settings shared by subcommands

use anyhow::{Context, Result};
use clap::Args;

use fitness_server::db::{create_pool_with_options, pool::DEFAULT_MAX_CONNECTIONS};
use fitness_server::Database;

/// Database connection arguments
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (falls back to DATABASE_URL, also read from ./.env)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// The configured URL, or an error explaining where to set it.
    pub fn url(&self) -> Result<&str> {
        self.database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ./.env")
    }

    /// Open the pool and wrap it in a data access handle.
    pub async fn connect(&self) -> Result<Database> {
        let url = self.url()?;
        let pool = create_pool_with_options(url, self.max_connections)
            .await
            .context("Failed to create database pool")?;
        tracing::debug!(max_connections = self.max_connections, "database pool ready");
        Ok(Database::new(pool))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_url_is_an_error() {
        let args = DatabaseArgs {
            database_url: None,
            max_connections: 1,
        };
        let err = args.url().unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL not set"));
    }
}
