use anyhow::{Context, Result};
use clap::Parser;
use sqlseed::{DockerClientRunner, seeder};
use std::path::PathBuf;

/// Seed a database from a SQL file via fbcli inside a Docker container, then
/// run optional smoke queries.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the .sql file with DDL/DML
    #[arg(long)]
    file: PathBuf,

    /// Docker container name running fbcli
    #[arg(long)]
    container: String,

    /// Smoke test SQL to run after seeding (repeatable)
    #[arg(long)]
    smoke: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let runner = DockerClientRunner::new(&cli.container);
    seeder::seed_file(&runner, &cli.file)
        .with_context(|| format!("seeding from {}", cli.file.display()))?;
    seeder::run_smoke_queries(&runner, &cli.smoke)?;
    Ok(())
}
