//! Language-model layer: an OpenAI-compatible chat-completion client and
//! the fallback generator that stands in for the scraper when the site
//! yields nothing usable.

pub mod chat;
pub mod fallback;

pub use chat::{AiError, ChatClient, DEFAULT_API_URL, DEFAULT_MODEL};
pub use fallback::FallbackGenerator;
