//! CLI command definitions for the `covy` binary.
//!
//! Uses clap derive macros for argument parsing. `covy chat` is the main
//! entry point; `ask` covers one-shot scripted use.

pub mod ask;
pub mod chat;
pub mod config;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Insurance premium estimates and product recommendations, in your terminal.
#[derive(Parser)]
#[command(name = "covy", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive consultation session.
    Chat {
        /// Consultation backend URL (overrides config.toml).
        #[arg(long, env = "COVERLY_BACKEND_URL")]
        backend_url: Option<String>,
    },

    /// Send a single message and print the advisor's reply.
    Ask {
        /// The message to send.
        message: String,

        /// Consultation backend URL (overrides config.toml).
        #[arg(long, env = "COVERLY_BACKEND_URL")]
        backend_url: Option<String>,
    },

    /// Show the resolved configuration.
    Config,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat_backend_url(cli: Cli) -> Option<String> {
        match cli.command {
            Commands::Chat { backend_url } => backend_url,
            _ => panic!("expected the chat subcommand"),
        }
    }

    #[test]
    fn test_backend_url_flag_beats_env() {
        // SAFETY: single-threaded within this test; no other test in
        // this crate reads COVERLY_BACKEND_URL
        unsafe { std::env::set_var("COVERLY_BACKEND_URL", "https://env.example.com") };

        let cli = Cli::try_parse_from([
            "covy",
            "chat",
            "--backend-url",
            "https://flag.example.com",
        ])
        .unwrap();
        assert_eq!(
            chat_backend_url(cli).as_deref(),
            Some("https://flag.example.com")
        );

        let cli = Cli::try_parse_from(["covy", "chat"]).unwrap();
        assert_eq!(
            chat_backend_url(cli).as_deref(),
            Some("https://env.example.com")
        );

        unsafe { std::env::remove_var("COVERLY_BACKEND_URL") };

        let cli = Cli::try_parse_from(["covy", "chat"]).unwrap();
        assert_eq!(chat_backend_url(cli), None);
    }
}
