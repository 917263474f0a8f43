use super::types::OcrEngine;
use super::ExtractionError;

/// Decode-check image bytes so corrupt uploads fail deterministically instead
/// of depending on the recognizer's own error reporting.
pub fn validate_image(image_bytes: &[u8]) -> Result<(), ExtractionError> {
    image::load_from_memory(image_bytes)
        .map(|_| ())
        .map_err(|e| ExtractionError::ImageRecognition(e.to_string()))
}

/// System Tesseract engine. Only available when compiled with the `ocr`
/// feature flag; tests and embedders without the shared library use
/// [`MockOcrEngine`] instead.
#[cfg(feature = "ocr")]
pub struct TesseractOcr {
    language: String,
    tessdata_dir: Option<std::path::PathBuf>,
}

#[cfg(feature = "ocr")]
impl TesseractOcr {
    /// Build from the process-wide OCR configuration (defaults to English).
    pub fn new() -> Self {
        let cfg = crate::config::ocr_config();
        Self {
            language: cfg.language.clone(),
            tessdata_dir: cfg.tessdata_dir.clone(),
        }
    }

    /// Override the recognition language, e.g. "eng+fra".
    pub fn with_language(mut self, lang: &str) -> Self {
        self.language = lang.to_string();
        self
    }
}

#[cfg(feature = "ocr")]
impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "ocr")]
impl OcrEngine for TesseractOcr {
    fn recognize(&self, image_bytes: &[u8]) -> Result<String, ExtractionError> {
        validate_image(image_bytes)?;

        let tessdata = match &self.tessdata_dir {
            Some(dir) => Some(dir.to_str().ok_or_else(|| {
                ExtractionError::ImageRecognition("invalid tessdata path".into())
            })?),
            None => None,
        };

        tracing::debug!(language = %self.language, "Running image recognition");

        let mut tess = tesseract::Tesseract::new(tessdata, Some(&self.language))
            .map_err(|e| ExtractionError::ImageRecognition(format!("{e:?}")))?
            .set_image_from_mem(image_bytes)
            .map_err(|e| ExtractionError::ImageRecognition(format!("{e:?}")))?;

        tess.get_text()
            .map_err(|e| ExtractionError::ImageRecognition(format!("{e:?}")))
    }
}

/// Mock OCR engine for unit testing without Tesseract. Returns the configured
/// text regardless of input bytes.
pub struct MockOcrEngine {
    pub text: String,
}

impl MockOcrEngine {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl OcrEngine for MockOcrEngine {
    fn recognize(&self, _image_bytes: &[u8]) -> Result<String, ExtractionError> {
        Ok(self.text.clone())
    }
}

/// Mock engine that always fails, for exercising recognizer fault paths.
pub struct FailingOcrEngine;

impl OcrEngine for FailingOcrEngine {
    fn recognize(&self, _image_bytes: &[u8]) -> Result<String, ExtractionError> {
        Err(ExtractionError::ImageRecognition(
            "simulated recognizer fault".into(),
        ))
    }
}
