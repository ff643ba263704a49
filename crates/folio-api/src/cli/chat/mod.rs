//! Terminal chat widget for folio.
//!
//! Talks to a running server over HTTP exactly like the site's chat bubble:
//! welcome message, typing spinner, and inline `Oops!` bubbles on failure.
//! Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
