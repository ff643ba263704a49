//! CLI command definitions for the `folio` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ask;
pub mod chat;
pub mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use folio_infra::config::DEFAULT_CONFIG_FILE;

/// Portfolio site server with a chat assistant.
#[derive(Parser)]
#[command(name = "folio", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the configuration file.
    #[arg(long, global = true, env = "FOLIO_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Also export trace spans through OpenTelemetry (stdout).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Port to listen on (defaults to the configured port).
        #[arg(long)]
        port: Option<u16>,

        /// Host to bind to (defaults to the configured host).
        #[arg(long)]
        host: Option<String>,
    },

    /// Answer one message locally, without a server.
    Ask {
        /// Message to send. Multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,

        /// Print the HTTP response body as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Chat with a running server from the terminal.
    Chat {
        /// Server base URL (defaults to the configured host and port).
        #[arg(long)]
        url: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_ask_joins_words() {
        let cli = Cli::try_parse_from(["folio", "ask", "who", "are", "you", "--json"]).unwrap();
        match cli.command {
            Commands::Ask { message, json } => {
                assert_eq!(message.join(" "), "who are you");
                assert!(json);
            }
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["folio", "-vv", "serve", "--port", "8080", "--otel"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.otel);
        assert!(matches!(
            cli.command,
            Commands::Serve {
                port: Some(8080),
                host: None
            }
        ));
    }
}
