//! Interactive chat loop against a running folio server.
//!
//! Keeps an in-memory [`Transcript`] seeded with a welcome message, posts
//! each line to `/api/chat` with the profile's session id, and renders the
//! reply. Failures never end the loop: they become an `Oops!` bubble from
//! the bot and the user can keep typing.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use folio_infra::client::ChatClient;
use folio_infra::session::{SessionStore, resolve_data_dir};
use folio_types::chat::{ChatMessage, Transcript};

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::print_message;

/// First bot message of every chat.
pub const WELCOME: &str =
    "Hi there! 👋 Thanks for visiting. Ask me anything about programming, web dev, or my projects.";

/// Settings for one interactive session.
pub struct ChatOptions {
    /// Full URL of the chat endpoint.
    pub endpoint: String,
    pub bot_name: String,
    /// Longer messages are refused before sending.
    pub max_chars: usize,
    pub timeout: Duration,
}

/// Chat endpoint URL for a server base URL.
pub fn chat_endpoint(base_url: &str) -> String {
    format!("{}/api/chat", base_url.trim_end_matches('/'))
}

/// Bubble text shown when a request fails.
pub fn oops(error: &impl std::fmt::Display) -> String {
    format!("Oops! {error}.")
}

/// Run the chat loop until `/exit` or Ctrl+D.
pub async fn run_chat_loop(options: ChatOptions) -> anyhow::Result<()> {
    let session_id = SessionStore::new(&resolve_data_dir()).load_or_create().await;
    let client = ChatClient::new(options.endpoint.clone(), session_id.clone(), options.timeout)?;

    print_welcome_banner(&options.bot_name, client.endpoint(), &session_id);

    let mut transcript = Transcript::with_welcome(WELCOME);
    for message in transcript.messages() {
        print_message(message, &options.bot_name);
    }

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let text = match chat_input.read_line().await {
            InputEvent::Eof => break,
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Message(text) if text.is_empty() => continue,
            InputEvent::Message(text) => text,
        };

        if let Some(cmd) = commands::parse(&text) {
            match cmd {
                ChatCommand::Help => commands::print_help(),
                ChatCommand::Clear => chat_input.clear(),
                ChatCommand::Exit => break,
                ChatCommand::History => {
                    println!();
                    for message in transcript.messages() {
                        print_message(message, &options.bot_name);
                    }
                }
                ChatCommand::Session => {
                    println!("\n  {}  {}\n", style("Session:").bold(), session_id);
                }
                ChatCommand::Unknown(name) => {
                    println!(
                        "\n  {} Unknown command: {}. Type /help for available commands.\n",
                        style("?").yellow().bold(),
                        style(name).dim()
                    );
                }
            }
            continue;
        }

        if text.chars().count() > options.max_chars {
            println!(
                "\n  {} Messages are limited to {} characters.\n",
                style("!").yellow().bold(),
                options.max_chars
            );
            continue;
        }

        transcript.push(ChatMessage::user(text.clone()));

        let spinner = typing_spinner(&options.bot_name);
        let result = client.send(&text).await;
        spinner.finish_and_clear();

        let reply = match result {
            Ok(reply) => reply,
            Err(e) => {
                tracing::debug!(error = %e, "chat request failed");
                oops(&e)
            }
        };

        let message = transcript.push(ChatMessage::bot(reply));
        print_message(message, &options.bot_name);
    }

    println!("\n  {}", style("Chat ended.").dim());
    tracing::debug!(messages = transcript.len(), "chat session closed");
    Ok(())
}

fn typing_spinner(bot_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let spinner_style = ProgressStyle::default_spinner()
        .template("  {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(spinner_style);
    spinner.set_message(format!("{bot_name} is typing..."));
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
