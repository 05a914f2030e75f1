// main.rs
use std::process::ExitCode;

use clap::Parser;
use colored::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chillmcp::cli::Args;
use chillmcp::{ChillServer, StopReason};

fn log_filter() -> EnvFilter {
    let level = std::env::var("RUST_LOG")
        .or_else(|_| std::env::var("CHILL_LOG"))
        .unwrap_or_else(|_| "info".to_string());

    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(log_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let settings = match args.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", format!("❌ {}", e).red().bold());
            return ExitCode::FAILURE;
        }
    };

    let server = ChillServer::new(settings);
    tracing::info!(session = %server.session_id(), "ChillMCP server starting");
    server.introduce().await;
    server.start_background_tasks();

    let stopped = server.run_stdio().await;
    match stopped {
        Ok(StopReason::Interrupted) => {
            eprintln!("{}", "\nCtrl+C detected. Pausing the revolution for now...".yellow());
            eprintln!("{}", "ChillMCP server shutting down.".blue().bold());
            // stdin's blocking read cannot be cancelled, so don't wait for the runtime
            std::process::exit(0);
        }
        Ok(StopReason::BrokenPipe) => {
            eprintln!("{}", "\nConnection closed (broken pipe).".red());
            eprintln!("{}", "ChillMCP server shutting down.".blue().bold());
            ExitCode::SUCCESS
        }
        Ok(StopReason::Shutdown) => {
            eprintln!("{}", "Shutdown command received. Stopping the server.".yellow());
            eprintln!("{}", "ChillMCP server shutting down.".blue().bold());
            ExitCode::SUCCESS
        }
        Ok(StopReason::EndOfInput) => {
            eprintln!("{}", "ChillMCP server shutting down.".blue().bold());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "request loop failed");
            eprintln!("{}", "ChillMCP server shutting down.".blue().bold());
            ExitCode::FAILURE
        }
    }
}
