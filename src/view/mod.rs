//! Client-side state for the story page.
//!
//! A library API for Rust front ends. The shipped browser page in
//! `static/index.html` implements the same transitions in script and is
//! checked against the constants here.

pub mod narration;

use serde::Serialize;
use serde_json::Value;

pub use narration::{
    select_voice, Narration, Voice, ENGLISH_LANG_PREFIX, PREFERRED_VOICE_NAME,
};

pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Body of `POST /api/story`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryRequest {
    pub prompt: String,
}

/// What came back from one request.
#[derive(Debug, Clone)]
pub enum Outcome {
    Response { status: u16, body: String },
    NetworkError(String),
}

#[derive(Debug, Default, Clone)]
pub struct StoryView {
    prompt: String,
    story: Option<String>,
    error: Option<String>,
    loading: bool,
    speaking: bool,
}

impl StoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn story(&self) -> Option<&str> {
        self.story.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking
    }

    /// Start a request. Returns `None` for a blank prompt or while another
    /// request is in flight.
    pub fn begin_request(&mut self) -> Option<StoryRequest> {
        if self.loading || self.prompt.trim().is_empty() {
            return None;
        }

        self.loading = true;
        self.story = None;
        self.error = None;
        self.speaking = false;

        Some(StoryRequest {
            prompt: self.prompt.clone(),
        })
    }

    pub fn complete(&mut self, outcome: Outcome) {
        self.loading = false;

        match story_from(outcome) {
            Ok(story) => {
                self.story = Some(story);
                self.error = None;
            }
            Err(cause) => {
                tracing::warn!("Story request failed: {}", cause);
                self.story = None;
                self.error = Some(FAILURE_MESSAGE.to_string());
            }
        }
    }

    /// Start narrating the current story, cancelling any narration in
    /// progress.
    pub fn speak(&mut self, voices: &[Voice]) -> Option<Narration> {
        let story = self.story.as_deref()?;
        self.speaking = true;
        Some(Narration::new(story, voices))
    }

    pub fn stop(&mut self) {
        self.speaking = false;
    }

    pub fn narration_ended(&mut self) {
        self.speaking = false;
    }

    /// Listen/Stop button. `None` means narration was stopped.
    pub fn toggle_narration(&mut self, voices: &[Voice]) -> Option<Narration> {
        if self.speaking {
            self.stop();
            None
        } else {
            self.speak(voices)
        }
    }
}

fn story_from(outcome: Outcome) -> Result<String, String> {
    let (status, body) = match outcome {
        Outcome::Response { status, body } => (status, body),
        Outcome::NetworkError(e) => return Err(e),
    };

    if !(200..300).contains(&status) {
        return Err(format!("HTTP {}: {}", status, body));
    }

    let data: Value = serde_json::from_str(&body).map_err(|e| e.to_string())?;
    match data.get("story").and_then(Value::as_str) {
        Some(story) if !story.is_empty() => Ok(story.to_string()),
        _ => Err(data
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("No story generated.")
            .to_string()),
    }
}
