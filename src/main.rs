// src/main.rs

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io;
use txtidy::cli::Cli;
use txtidy::config::ConfigBuilder;
use txtidy::errors::Error;
use txtidy::run;
use txtidy::signal::setup_signal_handler;
use txtidy::version::version_line;

fn main() -> Result<()> {
    // Initialize logging on stderr; stdout carries the per-file report.
    // RUST_LOG wins when set; otherwise fall back to a per-profile default.
    let default_filter = if cfg!(debug_assertions) {
        "txtidy=debug"
    } else {
        "txtidy=warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Setup ---
    let cli = Cli::parse();

    if cli.version {
        println!("{}", version_line());
        return Ok(());
    }

    // --- Configuration ---
    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(e) => {
            if matches!(e, Error::NoPatterns) {
                eprintln!("{}", Cli::command().render_usage());
            }
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully.");

    let token = setup_signal_handler()?;

    // --- Execution ---
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    let result = run(&config, &token, &mut writer);

    // --- Error Handling ---
    if let Err(e) = result {
        match e {
            Error::Interrupted => {
                eprintln!("\nOperation cancelled.");
                std::process::exit(130);
            }
            _ => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
