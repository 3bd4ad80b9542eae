use invoice_engine::application::ports::{OcrEngine, OcrEngineError, PageImage};
use invoice_engine::infrastructure::ocr::{MockOcrEngine, OcrEngineFactory};
use invoice_engine::presentation::config::{OcrProvider, OcrSettings};

#[tokio::test]
async fn given_mock_provider_when_creating_engine_then_passes_text_through() {
    let settings = OcrSettings {
        provider: OcrProvider::Mock,
        language: "eng".to_string(),
        datapath: None,
    };

    let engine = OcrEngineFactory::create(&settings).unwrap();

    let text = engine
        .recognize_text(&PageImage::new(b"Total: $5.00".to_vec()))
        .await
        .unwrap();
    assert_eq!(text, "Total: $5.00");
}

#[tokio::test]
async fn given_invalid_utf8_when_mock_engine_recognizes_then_fails() {
    let engine = MockOcrEngine;

    let result = engine
        .recognize_text(&PageImage::new(vec![0xff, 0xfe, 0xfd]))
        .await;

    assert!(matches!(result, Err(OcrEngineError::RecognitionFailed(_))));
}
