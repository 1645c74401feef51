//! VerdiX Router CLI
//!
//! Starts the HTTP server for text analysis.

use std::env;
use std::process;
use verdix_router::{
    config::{RouterConfig, API_KEY_ENV},
    start_server, RouterError,
};

/// What the command line asked for
enum Command {
    Serve(RouterConfig),
    Help,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), RouterError> {
    let args: Vec<String> = env::args().skip(1).collect();

    match parse_args(&args)? {
        Command::Help => print_help(),
        Command::Serve(config) => start_server(config).await?,
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<Command, RouterError> {
    match args {
        [flag, path, ..] if flag == "--config" => {
            Ok(Command::Serve(RouterConfig::from_file(path)?))
        }
        [flag, ..] if flag == "--help" || flag == "-h" => Ok(Command::Help),
        _ => {
            // No file: fall back to the bundled demo model and defaults
            eprintln!("Warning: No config file specified, using default configuration");
            eprintln!("Usage: verdix-router --config <path-to-config.toml>");
            eprintln!();
            Ok(Command::Serve(RouterConfig::default_test_config()))
        }
    }
}

fn print_help() {
    println!(
        "\
VerdiX Router - Fake News Analysis API

USAGE:
    verdix-router --config <path-to-config.toml>

OPTIONS:
    --config <file>    Load configuration from TOML file
    -h, --help         Print this help message

ENDPOINTS:
    GET  /          Service banner
    GET  /health    Liveness and verification availability
    POST /analyze   {{\"text\": \"...\"}} -> analysis result

ENVIRONMENT:
    {}    Search API key; verification is off when unset
    RUST_LOG                 Log filter (default: info)

See config/router.toml for every configuration key.",
        API_KEY_ENV
    );
}
