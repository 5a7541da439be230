//! Storeroom CLI - database migrations and seeding.
//!
//! # Usage
//!
//! ```bash
//! # Run entity-store migrations
//! storeroom-cli migrate
//!
//! # Migrate, then populate demo customers, products, and one order
//! storeroom-cli seed
//! ```
//!
//! # Environment Variables
//!
//! - `STOREROOM_DATABASE_URL` - `SQLite` connection string (or `DATABASE_URL`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "storeroom-cli")]
#[command(author, version, about = "Storeroom CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Run migrations, then seed demo data
    Seed,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed => commands::seed::run().await?,
    }
    Ok(())
}
