use serde::{Deserialize, Serialize};

pub const ENGLISH_LANG_PREFIX: &str = "en";
pub const PREFERRED_VOICE_NAME: &str = "Female";

/// A speech-synthesis voice as the browser reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    pub name: String,
    pub lang: String,
}

impl Voice {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
        }
    }

    fn is_english(&self) -> bool {
        self.lang.starts_with(ENGLISH_LANG_PREFIX)
    }
}

/// An utterance to hand to the speech engine. Any narration already
/// playing must be cancelled before this one starts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Narration {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
    pub voice: Option<Voice>,
}

impl Narration {
    pub fn new(text: impl Into<String>, voices: &[Voice]) -> Self {
        Self {
            text: text.into(),
            rate: 1.0,
            pitch: 1.0,
            volume: 1.0,
            voice: select_voice(voices).cloned(),
        }
    }
}

/// Prefer an English voice named "Female", then any English voice.
pub fn select_voice(voices: &[Voice]) -> Option<&Voice> {
    voices
        .iter()
        .find(|v| v.is_english() && v.name.contains(PREFERRED_VOICE_NAME))
        .or_else(|| voices.iter().find(|v| v.is_english()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_english_female() {
        let voices = vec![
            Voice::new("Google Deutsch Female", "de-DE"),
            Voice::new("Daniel", "en-GB"),
            Voice::new("Microsoft Zira Female", "en-US"),
        ];
        assert_eq!(select_voice(&voices).unwrap().name, "Microsoft Zira Female");
    }

    #[test]
    fn test_falls_back_to_first_english() {
        let voices = vec![
            Voice::new("Thomas", "fr-FR"),
            Voice::new("Daniel", "en-GB"),
            Voice::new("Alex", "en-US"),
        ];
        assert_eq!(select_voice(&voices).unwrap().name, "Daniel");
    }

    #[test]
    fn test_no_english_voice() {
        let voices = vec![Voice::new("Anna Female", "de-DE")];
        assert!(select_voice(&voices).is_none());
        assert!(select_voice(&[]).is_none());
    }

    #[test]
    fn test_narration_defaults() {
        let narration = Narration::new("Goodnight.", &[Voice::new("Alex", "en-US")]);
        assert_eq!(narration.rate, 1.0);
        assert_eq!(narration.pitch, 1.0);
        assert_eq!(narration.volume, 1.0);
        assert_eq!(narration.voice.unwrap().name, "Alex");
    }
}
