//! `folio ask` - run one message through the local chat service.
//!
//! Uses the same mode selection as the server. With `--json` the output is
//! exactly the body `/api/chat` would return.

use console::style;
use serde_json::Value;

use folio_types::chat::{ChatReply, ErrorBody};
use folio_types::error::ChatError;

use crate::http::error::{INTERNAL_ERROR, UPSTREAM_TIMEOUT};
use crate::state::AppState;

pub async fn ask(state: &AppState, message: &str, json: bool) -> anyhow::Result<()> {
    let result = state.chat_service.reply(message).await;

    if json {
        let body = match &result {
            Ok(reply) => serde_json::to_value(ChatReply {
                reply: reply.clone(),
            })?,
            Err(e) => serde_json::to_value(error_body(e))?,
        };
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        match &result {
            Ok(reply) => {
                println!();
                println!(
                    "  {} {}",
                    style(&state.config.chat.assistant_name).cyan().bold(),
                    reply
                );
                println!();
            }
            Err(e) => eprintln!("  {} {}", style("!").red().bold(), describe(e)),
        }
    }

    result.map(|_| ()).map_err(anyhow::Error::from)
}

fn error_body(e: &ChatError) -> ErrorBody {
    match e {
        ChatError::Upstream { payload, .. } => ErrorBody {
            error: payload.clone(),
        },
        ChatError::InvalidRequest(msg) => ErrorBody::message(msg.clone()),
        ChatError::UpstreamTimeout => ErrorBody::message(UPSTREAM_TIMEOUT),
        ChatError::Internal(_) => ErrorBody::message(INTERNAL_ERROR),
    }
}

fn describe(e: &ChatError) -> String {
    match e {
        ChatError::Upstream { status, payload } => match payload {
            Value::String(text) => format!("Upstream {status}: {text}"),
            other => format!("Upstream {status}: {other}"),
        },
        other => other.to_string(),
    }
}
