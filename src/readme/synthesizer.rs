// src/readme/synthesizer.rs
// =============================================================================
// Turns RepositoryMetadata into a finished README.
//
// There are exactly two ways out of synthesize():
//   1. the language model produced a usable document -> normalized, returned
//   2. anything at all went wrong                    -> template from fallback.rs
//
// So callers always get a complete README and never see a generation error.
// =============================================================================

use std::sync::Arc;

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag};
use tracing::{info, warn};

use super::fallback::render_fallback;
use super::generator::{Attempt, GenerationError, TextGenerator};
use super::normalize::{has_open_fence, normalize};
use super::prompt::{build_prompt, FOOTER_LINE};
use crate::github::RepositoryMetadata;

pub struct Synthesizer {
    generator: Arc<dyn TextGenerator>,
    // Tried in order; the next one is only used when the previous was rejected
    models: Vec<String>,
    prose_language: String,
}

impl Synthesizer {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        models: Vec<String>,
        prose_language: impl Into<String>,
    ) -> Self {
        Self {
            generator,
            models,
            prose_language: prose_language.into(),
        }
    }

    pub async fn synthesize(&self, metadata: &RepositoryMetadata) -> String {
        let languages = metadata.language_list();

        match self.generate(metadata, &languages).await {
            Ok(readme) => {
                info!(repo = %metadata.name, "README generated by the language model");
                readme
            }
            Err(e) => {
                warn!(repo = %metadata.name, error = %e, "Generation failed, using the README template");
                render_fallback(metadata, &languages)
            }
        }
    }

    async fn generate(
        &self,
        metadata: &RepositoryMetadata,
        languages: &str,
    ) -> Result<String, GenerationError> {
        let prompt = build_prompt(metadata, languages, &self.prose_language);
        let raw = self.first_accepted_model(&prompt).await?;
        finish_document(&raw)
    }

    // Walks the model list until one of them generates text
    async fn first_accepted_model(&self, prompt: &str) -> Result<String, GenerationError> {
        let mut rejections = Vec::new();

        for model in &self.models {
            match self.generator.generate(model, prompt).await? {
                Attempt::Generated(text) => return Ok(text),
                Attempt::Rejected(reason) => {
                    warn!(model = %model, %reason, "Model rejected, trying the next one");
                    rejections.push(format!("{model}: {reason}"));
                }
            }
        }

        Err(GenerationError::AllModelsRejected(rejections.join("; ")))
    }
}

// Normalizes raw model output and checks it is a usable README
pub fn finish_document(raw: &str) -> Result<String, GenerationError> {
    let mut readme = normalize(raw);
    if readme.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    let titles = count_titles(&readme);
    if titles != 1 {
        return Err(GenerationError::Malformed(titles));
    }

    // A footer written inside an unclosed code block would render as code
    let open_block = has_open_fence(&readme);
    if open_block {
        close_code_block(&mut readme);
    }

    if open_block || !readme.ends_with(FOOTER_LINE) {
        readme.push_str("\n\n---\n\n");
        readme.push_str(FOOTER_LINE);
    }

    Ok(readme)
}

// Appends a closing fence the way normalize() would place it: after one blank
// line, or directly when the block is still empty.
fn close_code_block(readme: &mut String) {
    let block_is_empty = readme.lines().last().is_some_and(has_open_fence);
    readme.push_str(if block_is_empty { "\n```" } else { "\n\n```" });
}

// Number of top-level (H1) headings, as a CommonMark renderer would see them
pub fn count_titles(markdown: &str) -> usize {
    Parser::new(markdown)
        .filter(|event| matches!(event, Event::Start(Tag::Heading(HeadingLevel::H1, _, _))))
        .count()
}
