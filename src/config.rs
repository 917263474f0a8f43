use std::path::PathBuf;
use std::sync::OnceLock;

/// Application-level constants
pub const APP_NAME: &str = "docverify";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Recognition language used when no process-wide config is installed.
pub const DEFAULT_OCR_LANGUAGE: &str = "eng";

pub fn default_log_filter() -> &'static str {
    "docverify=info"
}

/// Process-wide OCR engine configuration.
///
/// Installed once at startup via [`init_ocr_config`]; extraction backends read
/// it through [`ocr_config`]. Replaces any lazily-mutated global setup with an
/// explicit, guarded initialization step.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Tesseract language code(s), e.g. "eng".
    pub language: String,
    /// Directory holding `*.traineddata` files; `None` lets the engine use
    /// its compiled-in default path.
    pub tessdata_dir: Option<PathBuf>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_OCR_LANGUAGE.to_string(),
            tessdata_dir: None,
        }
    }
}

static OCR_CONFIG: OnceLock<OcrConfig> = OnceLock::new();

/// Install the process-wide OCR configuration. First call wins; returns
/// `false` when a configuration (or the default, via [`ocr_config`]) is
/// already in place.
pub fn init_ocr_config(config: OcrConfig) -> bool {
    OCR_CONFIG.set(config).is_ok()
}

/// The active OCR configuration, falling back to defaults when
/// [`init_ocr_config`] was never called.
pub fn ocr_config() -> &'static OcrConfig {
    OCR_CONFIG.get_or_init(OcrConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_english() {
        assert_eq!(OcrConfig::default().language, "eng");
        assert!(OcrConfig::default().tessdata_dir.is_none());
    }

    #[test]
    fn init_is_idempotent() {
        // Force the config into its settled state, then verify later installs
        // are rejected rather than silently replacing it.
        let settled = ocr_config().language.clone();
        assert!(!init_ocr_config(OcrConfig {
            language: "deu".into(),
            tessdata_dir: None,
        }));
        assert_eq!(ocr_config().language, settled);
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }
}
