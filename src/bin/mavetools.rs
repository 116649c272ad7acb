//! MaveDB API CLI binary.
//!
//! A command-line interface for interacting with the MaveDB API. This is
//! the only place library errors become process exit codes.

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use mavetools::cli::{Cli, Command};
use mavetools::{MaveClient, MaveError};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let client = match MaveClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set MAVEDB_API_URL (and MAVEDB_API_TOKEN for POSTs)");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if matches!(e, MaveError::AuthTokenMissing) {
                eprintln!("Hint: Set the MAVEDB_API_TOKEN environment variable");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &MaveClient, cli: Cli) -> mavetools::Result<()> {
    match cli.command {
        Command::Get { endpoint, id } => {
            let instance = client.get_model_instance(&endpoint, &id).await?;
            println!("{}", serde_json::to_string_pretty(&instance)?);
        }
        Command::Post { endpoint, file } => {
            let payload = fs::read_to_string(&file).map_err(|e| {
                MaveError::ConfigMissing(format!("payload file {}: {e}", file.display()))
            })?;
            let instance: serde_json::Value = serde_json::from_str(&payload)?;
            let urn = client.post_model_instance(&instance, &endpoint).await?;
            println!("{urn}");
        }
    }
    Ok(())
}
