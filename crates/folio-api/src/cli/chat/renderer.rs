//! Terminal rendering of chat bubbles.

use console::style;

use folio_types::chat::{ChatMessage, Sender};

/// Format one transcript entry as a labelled, indented bubble.
///
/// Continuation lines are indented to line up under the first one.
pub fn format_message(message: &ChatMessage, bot_name: &str) -> String {
    let label = match message.sender {
        Sender::User => format!("{}", style("You").green().bold()),
        Sender::Bot => format!("{}", style(bot_name).cyan().bold()),
    };

    let mut lines = message.text.lines();
    let first = lines.next().unwrap_or_default();
    let mut out = format!("  {label} {first}");
    for line in lines {
        out.push_str("\n    ");
        out.push_str(line);
    }
    out
}

pub fn print_message(message: &ChatMessage, bot_name: &str) {
    println!("{}", format_message(message, bot_name));
    println!();
}
