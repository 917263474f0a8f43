pub mod classify;
pub mod ocr;
pub mod pdf;
pub mod types;
pub mod verify;

pub use classify::*;
pub use ocr::*;
pub use pdf::*;
pub use types::*;
pub use verify::*;

use thiserror::Error;

use types::ErrorKind;

/// Failures raised by the extraction backends and the classifier. All of them
/// are caught at the [`verify::Verifier`] boundary and folded into a negative
/// [`types::VerificationResult`]; none escape to the caller.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("image recognition failed: {0}")]
    ImageRecognition(String),

    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),

    #[error("unexpected extraction fault: {0}")]
    Unexpected(String),
}

impl ExtractionError {
    /// Flatten to the diagnostic kind carried on a failed result.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedMediaType(_) => ErrorKind::UnsupportedMediaType,
            Self::ImageRecognition(_) => ErrorKind::ImageRecognition,
            Self::PdfParsing(_) => ErrorKind::PdfParse,
            Self::Unexpected(_) => ErrorKind::Unexpected,
        }
    }
}
