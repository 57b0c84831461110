//! # closer-llm
//!
//! Text generation for Closer.
//!
//! The pipeline only ever needs one operation, "turn this prompt into text",
//! expressed by the [`TextGenerator`] trait. [`GeminiClient`] implements it
//! against the Gemini `generateContent` REST endpoint; [`ScriptedGenerator`]
//! replays canned answers for tests.
//!
//! No retries happen here: a failed call surfaces as [`GenerationError`] and the
//! caller decides.

mod error;
mod gemini;
mod http;
mod scripted;

pub use error::GenerationError;
pub use gemini::GeminiClient;
pub use scripted::ScriptedGenerator;

use async_trait::async_trait;

/// Anything that can turn a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] on provider failure or when the provider
    /// produced no usable text.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
