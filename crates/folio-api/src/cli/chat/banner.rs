//! Welcome banner display for chat sessions.

use console::style;

/// Print the banner shown before the first message.
///
/// Shows the assistant name, the endpoint being talked to, and a short
/// session id prefix.
pub fn print_welcome_banner(name: &str, endpoint: &str, session_id: &str) {
    println!();
    println!("  {} {}", style("*").cyan(), style(name).cyan().bold());
    println!();
    println!("  {}  {}", style("Endpoint:").bold(), style(endpoint).dim());
    println!(
        "  {}   {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, /exit or Ctrl+D to quit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
