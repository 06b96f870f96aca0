// Public modules
pub mod client;
pub mod client_logger;
pub mod error;
pub mod render;
pub mod session;
pub mod transcript;
pub mod types;

// Re-exports
pub use client::Gemini;
pub use client_logger::ClientLogger;
pub use error::{Error, Result};
pub use session::{ChatHandle, ChatSession, DEFAULT_MODEL, SYSTEM_INSTRUCTION};
pub use transcript::{Transcript, TranscriptMessage};
pub use types::*;
