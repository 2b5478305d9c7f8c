//! agent-engine - Vertex AI Agent Engine deployment CLI

use clap::Parser;
use tracing_subscriber::EnvFilter;

use agent_engine_cli::cli::Cli;
use agent_engine_cli::domain::error::{error_code, exit_code};
use agent_engine_cli::output::json::format_error;

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json = cli.json;
    if let Err(e) = cli.run() {
        let message = format!("{e:#}");
        match json.then(|| format_error(&message, error_code(&e))) {
            Some(Ok(obj)) => println!("{obj}"),
            _ => eprintln!("Error: {message}"),
        }
        std::process::exit(exit_code(&e));
    }
}
