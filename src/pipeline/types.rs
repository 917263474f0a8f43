use serde::{Deserialize, Serialize};

use super::ExtractionError;

/// An uploaded document as handed over by the presentation layer: raw bytes
/// plus the declared media type. Borrowed for the duration of a single
/// pipeline call and never retained afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    pub bytes: &'a [u8],
    pub media_type: &'a str,
}

/// Diagnostic classification of a failed verification. The presentation
/// layer only branches on `success`; this field exists for logging and
/// support tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnsupportedMediaType,
    ImageRecognition,
    PdfParse,
    Unexpected,
}

/// The pipeline's sole externally visible output. Immutable once built;
/// returned to the caller and never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// True iff the target string occurs verbatim in `text`.
    pub success: bool,
    /// The extracted text, or the fixed error sentinel on failure.
    pub text: String,
    /// Wall-clock duration from invocation to result construction. Populated
    /// on every path, including failures.
    pub processing_time_seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<ErrorKind>,
}

/// OCR engine abstraction (allows mocking for tests).
pub trait OcrEngine {
    /// Recognize text across the whole image, one attempt, no retries.
    fn recognize(&self, image_bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// PDF text extraction abstraction.
pub trait PdfExtractor {
    /// Extract the concatenated text of every page, in page order. Any page
    /// failure aborts the whole extraction; partial text is never returned.
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// Stages a single verification call moves through, in order. `Matched` and
/// `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Classifying,
    Extracting,
    Matched,
    Failed,
}

/// Advisory diagnostics hook attached via
/// [`super::verify::Verifier::with_observer`]. Observers see stage
/// transitions as they happen but have zero influence on the returned result.
pub trait ProgressObserver: Send + Sync {
    fn on_stage(&self, stage: PipelineStage);
}
