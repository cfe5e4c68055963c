use serde_json::Value;

use crate::error::AppError;

/// A validated story theme with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryPrompt(String);

impl StoryPrompt {
    /// Validate the `prompt` field of a request body.
    pub fn parse(value: Option<&Value>) -> Result<Self, AppError> {
        match value {
            Some(Value::String(text)) => Self::new(text),
            _ => Err(AppError::InvalidPrompt),
        }
    }

    pub fn new(text: &str) -> Result<Self, AppError> {
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Err(AppError::InvalidPrompt);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The full instruction text sent to the model.
    pub fn instructions(&self) -> String {
        format!(
            "Write a short, gentle bedtime story for kids about {}.\n\
             Keep it under 200 words, with a warm, comforting tone and a simple moral or lesson.\n\
             Do not include a title or introduction, just the story text.",
            self.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_plain_prompt() {
        let prompt = StoryPrompt::new("a dragon who loves painting").unwrap();
        assert_eq!(prompt.as_str(), "a dragon who loves painting");
    }

    #[test]
    fn test_trims_ends_only() {
        let prompt = StoryPrompt::new("  a sleepy\n\n   owl\t").unwrap();
        assert_eq!(prompt.as_str(), "a sleepy\n\n   owl");
    }

    #[test]
    fn test_long_prompt_is_accepted() {
        let text = "a dragon ".repeat(60);
        let prompt = StoryPrompt::new(&text).unwrap();
        assert_eq!(prompt.as_str(), text.trim());
    }

    #[test]
    fn test_rejects_blank() {
        for text in ["", "   ", "\n\t  \r\n"] {
            let err = StoryPrompt::new(text).unwrap_err();
            assert!(matches!(err, AppError::InvalidPrompt));
        }
    }

    #[test]
    fn test_rejects_missing_and_non_string() {
        assert!(StoryPrompt::parse(None).is_err());
        assert!(StoryPrompt::parse(Some(&json!(42))).is_err());
        assert!(StoryPrompt::parse(Some(&json!(null))).is_err());
        assert!(StoryPrompt::parse(Some(&json!(["a", "cat"]))).is_err());
    }

    #[test]
    fn test_instructions_template() {
        let prompt = StoryPrompt::new("a brave little turtle").unwrap();
        let text = prompt.instructions();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "Write a short, gentle bedtime story for kids about a brave little turtle.",
                "Keep it under 200 words, with a warm, comforting tone and a simple moral or lesson.",
                "Do not include a title or introduction, just the story text.",
            ]
        );
    }
}
