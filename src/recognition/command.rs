//! Recognizer backend that shells out to an external OCR command.
//!
//! Contract: `<program> <args> --image <path>` prints a JSON array of
//! `{"text": ..., "confidence": ...}` objects on stdout, one per recognized
//! line; `<program> <args> --warm-up` exits zero once the engine's models
//! are in place.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use image::{DynamicImage, ImageFormat};
use serde::Deserialize;
use tokio::process::Command;

use crate::domain::nameplate::TextHit;
use crate::recognition::{RecognitionError, TextRecognizer};

pub struct CommandRecognizer {
    program: String,
    args: Vec<String>,
}

impl CommandRecognizer {
    /// Splits a configured command line into program and arguments.
    pub fn from_command_line(command: &str) -> Result<Self, RecognitionError> {
        let mut parts = shell_words::split(command)
            .map_err(|e| RecognitionError::backend(format!("invalid recognizer command: {e}")))?;
        if parts.is_empty() {
            return Err(RecognitionError::backend("recognizer command is empty"));
        }
        let program = parts.remove(0);
        Ok(Self {
            program,
            args: parts,
        })
    }

    fn temp_image_path() -> PathBuf {
        static SEQ: AtomicU64 = AtomicU64::new(0);
        let seq = SEQ.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!("nameplate_{}_{seq}.png", std::process::id()))
    }
}

/// One line as printed by the external command. Engines also report a
/// bounding box; it is accepted and dropped here.
#[derive(Debug, Deserialize)]
struct WireHit {
    text: String,
    confidence: f32,
    #[serde(default)]
    #[allow(dead_code)]
    bbox: Option<Vec<f32>>,
}

#[async_trait]
impl TextRecognizer for CommandRecognizer {
    fn name(&self) -> &'static str {
        "command"
    }

    async fn warm_up(&self) -> Result<(), RecognitionError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg("--warm-up")
            .output()
            .await
            .map_err(|e| RecognitionError::backend(format!("failed to run recognizer: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RecognitionError::backend(format!(
                "recognizer warm-up exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }

    async fn recognize(&self, image: &DynamicImage) -> Result<Vec<TextHit>, RecognitionError> {
        let path = Self::temp_image_path();
        image
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|e| RecognitionError::backend(format!("failed to write temp image: {e}")))?;

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg("--image")
            .arg(&path)
            .output()
            .await;
        std::fs::remove_file(&path).ok();

        let output = output
            .map_err(|e| RecognitionError::backend(format!("failed to run recognizer: {e}")))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RecognitionError::backend(format!(
                "recognizer exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let hits: Vec<WireHit> = serde_json::from_slice(&output.stdout)
            .map_err(|e| RecognitionError::backend(format!("invalid recognizer output: {e}")))?;

        Ok(hits
            .into_iter()
            .filter_map(|hit| {
                let text = hit.text.trim();
                if text.is_empty() {
                    None
                } else {
                    Some(TextHit::new(text, hit.confidence))
                }
            })
            .collect())
    }
}
