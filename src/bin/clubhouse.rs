//! Clubhouse API CLI binary.
//!
//! Sends a single request to the Clubhouse API and prints the JSON response.

use clap::Parser;
use clubhouse::cli::{Cli, Command};
use clubhouse::{Client, ReqwestTransport};
use std::process::ExitCode;
use tracing::Level;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let client = match ReqwestTransport::new().and_then(|t| cli.config().into_client(t)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, &cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &Client<ReqwestTransport>, cli: &Cli) -> clubhouse::Result<()> {
    let value = match &cli.command {
        Command::Get { path } => client.get(path).await?,
        Command::Post(args) => client.post(&args.path, &args.params()?).await?,
        Command::Put(args) => client.put(&args.path, &args.params()?).await?,
        Command::Delete { path } => client.delete(path).await?,
    };

    if let Some(value) = value {
        let rendered = if cli.compact {
            serde_json::to_string(&value)
        } else {
            serde_json::to_string_pretty(&value)
        };
        println!("{}", rendered.map_err(clubhouse::ClubhouseError::Encode)?);
    }
    Ok(())
}
