//! treasure-walker - random-walk client for the treasure-hunt checker.
//!
//! Connects to the checker over TCP, sends one random movement command per
//! turn, and stops when the checker replies with the victory line.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;

use treasure_walker::client::CheckerClient;
use treasure_walker::commands;

/// Random-walk client for the treasure-hunt checker.
#[derive(Parser, Debug)]
#[command(name = "treasure-walker")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Checker endpoint (host:port)
    #[arg(long, default_value = "127.177.0.13:56454")]
    connect: String,

    /// Seed the random walk for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Output the final summary as JSON
    #[arg(long)]
    json: bool,
}

/// Final session summary, printed after the checker announces victory.
#[derive(Debug, Serialize)]
struct Summary {
    won: bool,
    moves: u64,
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut rng = commands::walk_rng(cli.seed);

    let client = CheckerClient::connect(&cli.connect)
        .with_context(|| format!("cannot reach checker at {}", cli.connect))?;

    let moves = client.walk(&mut rng)?;

    let summary = Summary { won: true, moves };
    if cli.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!("Won in {} moves", summary.moves);
    }

    Ok(())
}
