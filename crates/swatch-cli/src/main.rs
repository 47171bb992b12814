//! Swatch CLI - interactive color capture session
//!
//! Pick hex colors, keep them in the session, and sync them to a remote
//! collection on demand.

mod error;
mod session;

use clap::Parser;
use swatch_core::remote::HttpRemoteStore;
use swatch_core::startup::load_initial;

use crate::error::CliError;
use crate::session::SessionState;

#[derive(Parser)]
#[command(name = "swatch")]
#[command(about = "Capture hex colors and sync them to a remote collection")]
#[command(version)]
struct Cli {
    /// Remote collection endpoint, e.g. https://colors.example.com
    #[arg(long, value_name = "URL")]
    endpoint: String,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("swatch=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    tracing::info!("Connecting to remote store at {}", cli.endpoint);
    let remote = HttpRemoteStore::new(cli.endpoint)?;

    let mut state = SessionState::new();
    state.store.seed(load_initial(&remote).await);
    println!("Loaded {} colors from the remote store.", state.store.len());

    session::run_loop(&remote, &mut state).await
}
