// src/readme/mod.rs
// =============================================================================
// This module writes the README.
//
// Submodules:
// - prompt: builds the instructions for the language model
// - generator: the TextGenerator trait (anything that turns a prompt into text)
// - gemini: TextGenerator for Google's Gemini API
// - normalize: whitespace cleanup for generated Markdown
// - fallback: template README for when generation fails
// - synthesizer: ties it all together
// =============================================================================

mod fallback;
mod gemini;
mod generator;
mod normalize;
mod prompt;
mod synthesizer;

pub use gemini::GeminiClient;
pub use synthesizer::Synthesizer;

#[cfg(test)]
pub(crate) use generator::{Attempt, GenerationError, TextGenerator};
