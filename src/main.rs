//! Hello backend entry point.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hello_backend::config::{Config, DeploymentMode};
use hello_backend::server;

/// Filter used with `--verbose` and in development mode.
const DEBUG_FILTER: &str = "hello_backend=debug,tower_http=debug,info";

/// Minimal JSON backend serving /api/hello and /api/health.
#[derive(Parser, Debug)]
#[command(name = "hello-backend")]
#[command(about = "Minimal JSON backend serving /api/hello and /api/health")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Configuration decides the default log filter; a failed load falls
    // back to the development default so the failure is still logged
    let loaded = Config::load();

    init_logging(args.verbose, loaded.as_ref().ok());

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(loaded),
        Some(Command::Serve) | None => cmd_serve(loaded).await,
    }
}

/// Pick the log filter: `--verbose`, then `RUST_LOG`, then the mode default.
fn log_filter(verbose: bool, config: Option<&Config>) -> EnvFilter {
    if verbose {
        return EnvFilter::new(DEBUG_FILTER);
    }

    config
        .and_then(|c| c.rust_log.as_deref())
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| {
            match config.map_or(DeploymentMode::Development, Config::mode) {
                DeploymentMode::Development => EnvFilter::new(DEBUG_FILTER),
                DeploymentMode::Production => EnvFilter::new("info"),
            }
        })
}

fn init_logging(verbose: bool, config: Option<&Config>) {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(log_filter(verbose, config))
        .init();
}

/// Check configuration validity.
fn cmd_check_config(loaded: Result<Config, envy::Error>) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("HELLO BACKEND - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match loaded {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    let mode = config.mode();
    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen Address: {}", config.bind_addr());
    println!("  Deployment Mode: {}", mode);
    println!("  Debug: {}", if mode.is_debug() { "Enabled" } else { "Disabled" });
    println!(
        "  Log Filter: {}",
        config.rust_log.as_deref().unwrap_or("(mode default)")
    );
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until a shutdown signal.
async fn cmd_serve(loaded: Result<Config, envy::Error>) -> anyhow::Result<()> {
    let config = loaded.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!("Starting hello backend on port {}", config.port);

    server::run(&config).await.map_err(|e| {
        error!("Server failed: {}", e);
        e.into()
    })
}
