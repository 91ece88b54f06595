use async_trait::async_trait;
use image::DynamicImage;

use substation_mapper::domain::nameplate::TextHit;
use substation_mapper::processing::nameplate::classify;
use substation_mapper::recognition::{
    EngineStatus, NoopRecognizer, RecognitionError, RecognizerHandle, TextRecognizer,
};

struct ScriptedRecognizer {
    hits: Vec<TextHit>,
}

#[async_trait]
impl TextRecognizer for ScriptedRecognizer {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn recognize(&self, _: &DynamicImage) -> Result<Vec<TextHit>, RecognitionError> {
        Ok(self.hits.clone())
    }
}

struct BrokenRecognizer;

#[async_trait]
impl TextRecognizer for BrokenRecognizer {
    fn name(&self) -> &'static str {
        "broken"
    }

    async fn warm_up(&self) -> Result<(), RecognitionError> {
        Err(RecognitionError::backend("models are missing"))
    }

    async fn recognize(&self, _: &DynamicImage) -> Result<Vec<TextHit>, RecognitionError> {
        unreachable!("warm-up never succeeds")
    }
}

fn blank_image() -> DynamicImage {
    DynamicImage::new_rgb8(1, 1)
}

#[tokio::test]
async fn handle_without_backend_reports_unavailable() {
    let handle = RecognizerHandle::new(None);

    assert_eq!(handle.status().await, EngineStatus::Unavailable);
    let err = handle
        .recognize(&blank_image())
        .await
        .expect_err("No backend should be unavailable.");
    assert!(matches!(err, RecognitionError::Unavailable));
}

#[tokio::test]
async fn failed_warm_up_is_sticky() {
    let handle = RecognizerHandle::new(Some(Box::new(BrokenRecognizer)));
    assert_eq!(handle.status().await, EngineStatus::Uninitialized);

    for _ in 0..2 {
        let err = handle
            .recognize(&blank_image())
            .await
            .expect_err("Broken engine should be unavailable.");
        assert!(matches!(err, RecognitionError::Unavailable));
        assert_eq!(handle.status().await, EngineStatus::Unavailable);
    }
}

#[tokio::test]
async fn successful_warm_up_moves_the_handle_to_ready() {
    let handle = RecognizerHandle::new(Some(Box::new(NoopRecognizer)));

    let hits = handle
        .recognize(&blank_image())
        .await
        .expect("Noop engine should recognize.");
    assert!(hits.is_empty());
    assert_eq!(handle.status().await, EngineStatus::Ready);
}

#[tokio::test]
async fn recognizer_output_flows_through_the_classifier() {
    let handle = RecognizerHandle::new(Some(Box::new(ScriptedRecognizer {
        hits: vec![
            TextHit::new("开关 SF6 断路器", 0.95),
            TextHit::new("编号: A-102", 0.88),
            TextHit::new("出厂日期 2020", 0.4),
        ],
    })));

    let hits = handle
        .recognize(&blank_image())
        .await
        .expect("Scripted engine should recognize.");
    let classification = classify(&hits);

    assert_eq!(classification.machine_name, "编号: A-102");
    assert_eq!(
        classification.machine_info,
        "开关 SF6 断路器\n出厂日期 2020"
    );
    assert!((classification.confidence - 0.4).abs() < f32::EPSILON);
}
