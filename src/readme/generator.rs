// src/readme/generator.rs
// =============================================================================
// The seam between the synthesizer and whatever produces text from a prompt.
//
// A model being rejected is an expected, enumerable outcome (the model name is
// unknown or retired), so it is a normal return value: Attempt::Rejected.
// Everything else that goes wrong is a GenerationError.
// =============================================================================

use async_trait::async_trait;
use thiserror::Error;

/// Outcome of asking one model for text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    Generated(String),
    /// The service refused this model identifier before generating anything.
    Rejected(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("every model was rejected: {0}")]
    AllModelsRejected(String),
    #[error("generation service returned HTTP {status}: {message}")]
    Service { status: u16, message: String },
    #[error("could not reach generation service: {0}")]
    Transport(String),
    #[error("generation service returned no text")]
    EmptyResponse,
    #[error("generated document has {0} top-level titles, expected exactly one")]
    Malformed(usize),
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, model: &str, prompt: &str) -> Result<Attempt, GenerationError>;
}
