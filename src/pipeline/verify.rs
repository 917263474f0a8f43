use std::time::Instant;

use super::classify::{classify, ContentClass};
use super::types::{
    Document, OcrEngine, PdfExtractor, PipelineStage, ProgressObserver, VerificationResult,
};
use super::ExtractionError;

/// Fixed text returned in place of extracted content when the pipeline fails.
pub const ERROR_TEXT: &str = "Error processing file";

/// Pipeline entry point. Holds the two extraction backends as trait objects,
/// enabling dependency injection, plus an optional diagnostics observer.
///
/// Stateless across calls: concurrent callers may share one `Verifier` as
/// long as the injected backends are safe to invoke concurrently (both
/// bundled backends are; each call builds its own parser/recognizer state).
pub struct Verifier {
    ocr_engine: Box<dyn OcrEngine + Send + Sync>,
    pdf_extractor: Box<dyn PdfExtractor + Send + Sync>,
    observer: Option<Box<dyn ProgressObserver>>,
}

impl Verifier {
    pub fn new(
        ocr_engine: Box<dyn OcrEngine + Send + Sync>,
        pdf_extractor: Box<dyn PdfExtractor + Send + Sync>,
    ) -> Self {
        Self {
            ocr_engine,
            pdf_extractor,
            observer: None,
        }
    }

    /// Attach an advisory progress observer. Diagnostics only; the observer
    /// cannot influence the returned result.
    pub fn with_observer(mut self, observer: Box<dyn ProgressObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Extract the document's text and check whether `target` occurs in it
    /// verbatim (case-sensitive, no normalization).
    ///
    /// Every call path terminates in a well-formed result: extraction
    /// failures are logged and folded into `success: false` with the
    /// [`ERROR_TEXT`] sentinel instead of surfacing as an `Err`.
    pub fn verify(&self, document: &Document<'_>, target: &str) -> VerificationResult {
        let start = Instant::now();

        self.notify(PipelineStage::Classifying);

        // pdf-extract is known to panic on some malformed inputs; fold any
        // backend panic into the normal failure path so no call ever unwinds
        // past this boundary.
        let extracted =
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| self.extract(document)))
                .unwrap_or_else(|panic| {
                    Err(ExtractionError::Unexpected(panic_message(panic.as_ref())))
                });

        match extracted {
            Ok(text) => {
                let success = text.contains(target);
                self.notify(PipelineStage::Matched);
                VerificationResult {
                    success,
                    text,
                    processing_time_seconds: start.elapsed().as_secs_f64(),
                    error: None,
                }
            }
            Err(err) => {
                tracing::warn!(
                    media_type = document.media_type,
                    error = %err,
                    "Verification failed"
                );
                self.notify(PipelineStage::Failed);
                VerificationResult {
                    success: false,
                    text: ERROR_TEXT.to_string(),
                    processing_time_seconds: start.elapsed().as_secs_f64(),
                    error: Some(err.kind()),
                }
            }
        }
    }

    fn extract(&self, document: &Document<'_>) -> Result<String, ExtractionError> {
        match classify(document.media_type) {
            ContentClass::Pdf => {
                tracing::info!(
                    media_type = document.media_type,
                    size_bytes = document.bytes.len(),
                    "Extracting PDF text"
                );
                self.notify(PipelineStage::Extracting);
                self.pdf_extractor.extract_text(document.bytes)
            }
            ContentClass::Image => {
                tracing::info!(
                    media_type = document.media_type,
                    size_bytes = document.bytes.len(),
                    "Recognizing image text"
                );
                self.notify(PipelineStage::Extracting);
                self.ocr_engine.recognize(document.bytes)
            }
            // Neither extractor is invoked for unknown types.
            ContentClass::Unsupported => Err(ExtractionError::UnsupportedMediaType(
                document.media_type.to_string(),
            )),
        }
    }

    fn notify(&self, stage: PipelineStage) {
        if let Some(observer) = &self.observer {
            observer.on_stage(stage);
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "backend panicked".to_string()
    }
}
