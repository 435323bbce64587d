//! fitness CLI - serve the exercises/muscles REST API
//!
//! Subcommands:
//! - `serve`: bootstrap the schema and run the HTTP server
//! - `migrate`: bootstrap the schema only

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "fitness",
    author,
    version,
    about = "REST API for exercises, muscles and the links between them"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),

    /// Create the database tables if they do not exist
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env first so clap's env fallbacks can see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_serve_flags() {
        let cli = Cli::try_parse_from([
            "fitness",
            "--debug",
            "serve",
            "--bind",
            "0.0.0.0:8080",
            "--database-url",
            "postgres://localhost/fitness_api",
            "--skip-migrate",
        ])
        .unwrap();

        assert!(cli.debug);
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.bind.port(), 8080);
                assert!(args.skip_migrate);
                assert_eq!(
                    args.db.database_url.as_deref(),
                    Some("postgres://localhost/fitness_api")
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
