pub mod gemini;
pub mod generator;
pub mod prompt;

use std::sync::Arc;

use crate::error::AppError;

pub use gemini::GeminiClient;
pub use generator::{GenerationError, StoryGenerator};
pub use prompt::StoryPrompt;

pub struct StoryService {
    generator: Option<Arc<dyn StoryGenerator>>,
}

impl StoryService {
    pub fn new(generator: Arc<dyn StoryGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// A service with no credential; every story request fails.
    pub fn unconfigured() -> Self {
        Self { generator: None }
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    pub fn generator(&self) -> Result<&Arc<dyn StoryGenerator>, AppError> {
        self.generator.as_ref().ok_or(AppError::MissingApiKey)
    }

    pub async fn tell(&self, prompt: &StoryPrompt) -> Result<String, AppError> {
        let generator = self.generator()?;

        tracing::debug!("Generating story about: {}", prompt.as_str());
        let text = generator.generate(&prompt.instructions()).await?;
        let story = text.trim().to_string();

        tracing::info!(
            "Generated story with {} ({} chars)",
            generator.model(),
            story.len()
        );
        Ok(story)
    }
}
