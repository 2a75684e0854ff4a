//! Coverly CLI entry point.
//!
//! Binary name: `covy`
//!
//! Parses CLI arguments, sets up tracing, then dispatches to the
//! interactive consultation loop or one of the utility commands.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,coverly_core=debug,coverly_infra=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "covy", &mut std::io::stdout());
        return Ok(());
    }

    match cli.command {
        Commands::Chat { backend_url } => {
            let state = AppState::init(backend_url).await;
            cli::chat::loop_runner::run_chat_loop(&state).await?;
        }

        Commands::Ask {
            message,
            backend_url,
        } => {
            let state = AppState::init(backend_url).await;
            cli::ask::ask(&state, &message, cli.json).await?;
        }

        Commands::Config => {
            let state = AppState::init(None).await;
            cli::config::show(&state, cli.json)?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
