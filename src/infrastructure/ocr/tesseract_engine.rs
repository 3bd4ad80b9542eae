// Two implementations behind one name: a real Tesseract engine when the
// `ocr` feature is enabled, and a constructor that fails when it is not.
// This avoids linking to system libraries (leptonica/tesseract) on machines
// where they are not installed.

#[cfg(feature = "ocr")]
mod real {
    use async_trait::async_trait;
    use leptess::LepTess;

    use crate::application::ports::{OcrEngine, OcrEngineError, PageImage};

    /// Recognizes text with the system Tesseract installation via leptess.
    /// A `LepTess` handle is not `Send`, so every call builds a fresh one on
    /// the blocking pool.
    pub struct TesseractEngine {
        language: String,
        datapath: Option<String>,
    }

    impl TesseractEngine {
        /// Fails here, not on the first request, when the language pack or
        /// the tesseract install itself is missing.
        pub fn new(language: &str, datapath: Option<&str>) -> Result<Self, OcrEngineError> {
            LepTess::new(datapath, language)
                .map_err(|e| OcrEngineError::Unavailable(format!("tesseract init: {e}")))?;

            Ok(Self {
                language: language.to_string(),
                datapath: datapath.map(str::to_owned),
            })
        }
    }

    #[async_trait]
    impl OcrEngine for TesseractEngine {
        async fn recognize_text(&self, image: &PageImage) -> Result<String, OcrEngineError> {
            let language = self.language.clone();
            let datapath = self.datapath.clone();
            let bytes = image.as_bytes().to_vec();

            tokio::task::spawn_blocking(move || {
                let mut tesseract = LepTess::new(datapath.as_deref(), &language)
                    .map_err(|e| OcrEngineError::Unavailable(format!("tesseract init: {e}")))?;

                tesseract
                    .set_image_from_mem(&bytes)
                    .map_err(|e| OcrEngineError::RecognitionFailed(format!("set image: {e}")))?;

                tesseract
                    .get_utf8_text()
                    .map_err(|e| OcrEngineError::RecognitionFailed(format!("recognize: {e}")))
            })
            .await
            .map_err(|e| OcrEngineError::RecognitionFailed(format!("task join error: {e}")))?
        }
    }
}

#[cfg(not(feature = "ocr"))]
mod stub {
    use async_trait::async_trait;

    use crate::application::ports::{OcrEngine, OcrEngineError, PageImage};

    pub struct TesseractEngine;

    impl TesseractEngine {
        pub fn new(_language: &str, _datapath: Option<&str>) -> Result<Self, OcrEngineError> {
            Err(OcrEngineError::Unavailable(
                "built without the `ocr` feature; rebuild with --features ocr \
                 and install Tesseract/Leptonica"
                    .to_string(),
            ))
        }
    }

    // Unreachable at runtime since `new` always fails, but the factory needs
    // the trait object coercion to typecheck in both builds.
    #[async_trait]
    impl OcrEngine for TesseractEngine {
        async fn recognize_text(&self, _image: &PageImage) -> Result<String, OcrEngineError> {
            Err(OcrEngineError::Unavailable(
                "built without the `ocr` feature".to_string(),
            ))
        }
    }
}

#[cfg(feature = "ocr")]
pub use real::TesseractEngine;
#[cfg(not(feature = "ocr"))]
pub use stub::TesseractEngine;
