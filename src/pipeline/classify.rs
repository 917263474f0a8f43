use serde::{Deserialize, Serialize};

/// Extraction route selected for a declared media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentClass {
    Image,
    Pdf,
    Unsupported,
}

impl ContentClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Pdf => "pdf",
            Self::Unsupported => "unsupported",
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

/// Media types the intake boundary (upload form) accepts. Deliberately
/// narrower than what [`classify`] routes: dispatch takes any `image/*`,
/// intake only the three raster formats the form lists.
pub const INTAKE_MEDIA_TYPES: &[&str] = &[
    "application/pdf",
    "image/jpeg",
    "image/jpg",
    "image/png",
];

/// Route a declared media type to an extractor. Exact match for PDF, prefix
/// match for images, everything else is unsupported.
pub fn classify(media_type: &str) -> ContentClass {
    if media_type == "application/pdf" {
        ContentClass::Pdf
    } else if media_type.starts_with("image/") {
        ContentClass::Image
    } else {
        ContentClass::Unsupported
    }
}

/// Whether the intake boundary should accept this media type at all.
pub fn intake_accepts(media_type: &str) -> bool {
    INTAKE_MEDIA_TYPES.contains(&media_type)
}
