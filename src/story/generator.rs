use async_trait::async_trait;

#[derive(thiserror::Error, Debug)]
pub enum GenerationError {
    #[error("request to provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned HTTP {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("response was blocked: {0}")]
    Blocked(String),

    #[error("candidate finished with reason {0} and no text")]
    Stopped(String),

    #[error("provider returned no story text")]
    EmptyResponse,
}

/// A text model that turns instructions into a story.
#[async_trait]
pub trait StoryGenerator: Send + Sync {
    fn model(&self) -> &str;

    async fn generate(&self, instructions: &str) -> Result<String, GenerationError>;
}
