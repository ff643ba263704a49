//! Secret lookup for the upstream API key.
//!
//! - `env`: Environment variable provider (read-only)

pub mod env;

/// Environment variable holding the OpenAI API key.
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
