use crate::{conn::ConnectionKind, env::EnvManager, error::CliError};
use clap::Parser;
use commands::Commands;
use connectors::{mysql::MariaDbDestination, postgres::PgSource};
use engine::{report::MigrationSummary, runner, settings::MigrationSettings};
use std::{io::BufRead, path::Path, str::FromStr};
use tracing::{info, Level};

mod commands;
mod conn;
mod env;
mod error;

#[derive(Parser)]
#[command(
    name = "pgshift",
    version = "0.1.0",
    about = "One-shot PostgreSQL to MariaDB schema and data migrator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate {
            env_file,
            yes,
            json,
        } => {
            migrate(&env_file, yes, json).await?;
        }
        Commands::TestConn { format, conn_str } => {
            let kind = ConnectionKind::from_str(&format)
                .map_err(|_| CliError::InvalidConnectionFormat(format))?;
            conn::ping(kind, &conn_str).await?;
        }
    }

    Ok(())
}

async fn migrate(env_file: &str, yes: bool, json: bool) -> Result<(), CliError> {
    let mut env = EnvManager::new();
    if Path::new(env_file).exists() {
        env.load_from_file(env_file)?;
    }

    let endpoints = conn::DbEndpoints::from_env(&env);
    let settings = settings_from_env(&env)?;

    if !yes {
        confirm_or_exit()?;
    }

    // Rerunning is safe for the schema (create-if-absent) but re-inserts
    // every row; a non-empty target without primary keys will end up with
    // duplicates.
    let source = PgSource::connect(&endpoints.source_url).await?;
    let target = MariaDbDestination::connect(&endpoints.target_url).await?;

    info!("### Starting Database Migration ###");
    let summary = runner::run(&source, &target, &settings).await?;

    if json {
        let out = serde_json::to_string_pretty(&summary).map_err(CliError::JsonSerialize)?;
        println!("{out}");
    } else {
        print_summary(&summary);
    }

    Ok(())
}

fn settings_from_env(env: &EnvManager) -> Result<MigrationSettings, CliError> {
    let mut settings = MigrationSettings {
        table_engine: env.get_or("TABLE_ENGINE", engine::settings::DEFAULT_ENGINE),
        ..Default::default()
    };

    if let Some(raw) = env.get("BATCH_SIZE").filter(|v| !v.is_empty()) {
        settings.batch_size = raw
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| CliError::Config(format!("Invalid BATCH_SIZE: {raw}")))?;
    }

    Ok(settings)
}

fn confirm_or_exit() -> Result<(), CliError> {
    println!(
        "WARNING: Use this tool at your own risk. The author assumes no liability \
         for any damages caused by its usage."
    );
    println!("Press [Enter] to continue or Ctrl+C to exit.");
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

fn print_summary(summary: &MigrationSummary) {
    println!("Migration completed.");
    println!("-----------------------------");
    println!("{:<16} {}", "Tables total", summary.tables_total);
    println!("{:<16} {}", "Tables migrated", summary.tables_migrated);
    println!("{:<16} {}", "Tables skipped", summary.tables_skipped);
    println!("{:<16} {}", "Rows copied", summary.rows_copied);
    println!("{:<16} {}", "Rows skipped", summary.rows_skipped);
}
