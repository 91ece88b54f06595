//! Text recognition collaborator boundary.
//!
//! OCR itself is delegated to an external engine behind [`TextRecognizer`];
//! this module owns the contract and the explicit readiness state the rest
//! of the service observes.

use async_trait::async_trait;
use image::DynamicImage;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::nameplate::TextHit;

pub mod command;
pub mod noop;

pub use command::CommandRecognizer;
pub use noop::NoopRecognizer;

#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("recognition engine is unavailable")]
    Unavailable,
    #[error("recognition backend error: {0}")]
    Backend(String),
}

impl RecognitionError {
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}

/// An abstraction over text recognition engines that read nameplate photos.
///
/// Implementations trim recognized text and omit lines that came back empty;
/// bounding boxes reported by the engine are dropped at this boundary.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Called once before the first recognition. Model loading and other
    /// one-time setup belongs here.
    async fn warm_up(&self) -> Result<(), RecognitionError> {
        Ok(())
    }

    async fn recognize(&self, image: &DynamicImage) -> Result<Vec<TextHit>, RecognitionError>;
}

/// Readiness of the configured engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineStatus {
    Uninitialized,
    Ready,
    Unavailable,
}

/// Shared handle around an optional engine. The first recognition warms the
/// engine up; a failed warm-up is sticky and every later call reports
/// unavailable, as does a handle that was built without a backend.
pub struct RecognizerHandle {
    engine: Option<Box<dyn TextRecognizer>>,
    status: Mutex<EngineStatus>,
}

impl RecognizerHandle {
    pub fn new(engine: Option<Box<dyn TextRecognizer>>) -> Self {
        let status = if engine.is_some() {
            EngineStatus::Uninitialized
        } else {
            EngineStatus::Unavailable
        };
        Self {
            engine,
            status: Mutex::new(status),
        }
    }

    pub async fn status(&self) -> EngineStatus {
        *self.status.lock().await
    }

    pub async fn recognize(&self, image: &DynamicImage) -> Result<Vec<TextHit>, RecognitionError> {
        let Some(engine) = self.engine.as_deref() else {
            return Err(RecognitionError::Unavailable);
        };

        let mut status = self.status.lock().await;
        match *status {
            EngineStatus::Unavailable => return Err(RecognitionError::Unavailable),
            EngineStatus::Ready => {}
            EngineStatus::Uninitialized => {
                if let Err(e) = engine.warm_up().await {
                    *status = EngineStatus::Unavailable;
                    log::error!("Recognizer {} failed to warm up: {e}", engine.name());
                    return Err(RecognitionError::Unavailable);
                }
                *status = EngineStatus::Ready;
                log::info!("Recognizer {} is ready", engine.name());
            }
        }
        drop(status);

        engine.recognize(image).await
    }
}
