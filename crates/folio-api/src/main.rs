//! folio CLI and HTTP server entry point.
//!
//! Binary name: `folio`
//!
//! Loads `.env` files, parses CLI arguments, sets up tracing, then starts
//! the runtime and dispatches to the selected command.

mod cli;
mod http;
mod state;

use std::time::Duration;

use clap::Parser;
use clap_complete::generate;

use folio_infra::config::{apply_env_overrides, load_dotenv, load_global_config};
use folio_observe::tracing_setup::{filter_for_verbosity, init_tracing, shutdown_tracing};

use cli::chat::loop_runner::{ChatOptions, chat_endpoint, run_chat_loop};
use cli::{Cli, Commands};
use state::AppState;

/// Slack on top of the server's own upstream timeout before the terminal
/// client gives up.
const CLIENT_TIMEOUT_MARGIN_SECS: u64 = 5;

fn main() -> anyhow::Result<()> {
    // dotenv writes to the process environment, so it runs before any
    // thread exists.
    let dotenv = load_dotenv();
    let cli = Cli::parse();

    init_tracing(filter_for_verbosity(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    for loaded in dotenv {
        match loaded {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded env file"),
            Err(e) => tracing::warn!("ignoring env file {e}"),
        }
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run(cli));

    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Serve { port, host } => {
            let state = AppState::init(&cli.config).await?;
            cli::serve::serve(state, host, port).await?;
        }

        Commands::Ask { message, json } => {
            let state = AppState::init(&cli.config).await?;
            cli::ask::ask(&state, &message.join(" "), json).await?;
        }

        Commands::Chat { url } => {
            let mut config = load_global_config(&cli.config).await;
            apply_env_overrides(&mut config);

            let base_url = url.unwrap_or_else(|| {
                format!("http://{}:{}", config.server.host, config.server.port)
            });
            let options = ChatOptions {
                endpoint: chat_endpoint(&base_url),
                bot_name: config.chat.assistant_name.clone(),
                max_chars: config.chat.widget_max_chars,
                timeout: client_timeout(config.chat.request_timeout_secs),
            };
            run_chat_loop(options).await?;
        }

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "folio", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Terminal client timeout for a given server upstream timeout.
fn client_timeout(server_timeout_secs: u64) -> Duration {
    Duration::from_secs(server_timeout_secs.saturating_add(CLIENT_TIMEOUT_MARGIN_SECS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_timeout_adds_margin() {
        assert_eq!(client_timeout(30), Duration::from_secs(35));
    }

    #[test]
    fn test_client_timeout_saturates() {
        assert_eq!(client_timeout(u64::MAX), Duration::from_secs(u64::MAX));
    }
}
