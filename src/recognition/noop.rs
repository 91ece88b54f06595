use async_trait::async_trait;
use image::DynamicImage;

use crate::domain::nameplate::TextHit;
use crate::recognition::{RecognitionError, TextRecognizer};

/// Recognizer that never sees any text. Useful for wiring and tests.
#[derive(Debug, Default)]
pub struct NoopRecognizer;

#[async_trait]
impl TextRecognizer for NoopRecognizer {
    fn name(&self) -> &'static str {
        "noop"
    }

    async fn recognize(&self, _: &DynamicImage) -> Result<Vec<TextHit>, RecognitionError> {
        Ok(Vec::new())
    }
}
