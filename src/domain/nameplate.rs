use serde::Serialize;

/// One recognized text line with its confidence score. Produced by a
/// recognizer backend, consumed by the nameplate classifier, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct TextHit {
    pub text: String,
    pub confidence: f32,
}

impl TextHit {
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// Structured fields derived from the text on a nameplate photo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub full_text: String,
    pub machine_name: String,
    pub machine_info: String,
    pub confidence: f32,
}
