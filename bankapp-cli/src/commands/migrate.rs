//! Schema initialization command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use bankapp_server::db::{create_pool, run_migrations};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// SQLite database file (created if missing)
    #[arg(long, short = 'd', env = "BANKAPP_DATABASE", default_value = "bank.db")]
    pub database: PathBuf,
}

/// Create the tables and exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool(&args.database)
        .await
        .with_context(|| format!("failed to open database at {}", args.database.display()))?;

    run_migrations(&pool)
        .await
        .context("failed to create tables")?;

    pool.close().await;
    println!("Database ready at {}", args.database.display());
    Ok(())
}
