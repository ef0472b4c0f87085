//! Operational CLI: migrations, seed data and a connectivity probe.

pub mod seed;

use clap::{Parser, Subcommand};

use crate::config;
use crate::database::Database;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Roster CLI - operational commands for the roster manager API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Apply pending database migrations")]
    Migrate,

    #[command(about = "Load development seed data (idempotent)")]
    Seed,

    #[command(about = "Check database connectivity")]
    Health,
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::config();
    let db = Database::connect(&config.database)?;

    let result = match cli.command {
        Commands::Migrate => {
            db.migrate().await?;
            println!("migrations applied");
            Ok(())
        }
        Commands::Seed => {
            db.migrate().await?;
            seed::run(&db).await
        }
        Commands::Health => match db.health_check().await {
            Ok(()) => {
                println!("database: ok");
                Ok(())
            }
            Err(e) => Err(anyhow::anyhow!("database unreachable: {}", e)),
        },
    };

    db.close().await;
    result
}
