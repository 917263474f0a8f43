//! Document content verification pipeline.
//!
//! Takes an uploaded document (image or PDF) plus a target string and reports
//! whether the target occurs verbatim in the document's extracted text. The
//! upload form and result rendering live outside this crate; they call
//! [`pipeline::Verifier::verify`] and render the returned
//! [`pipeline::VerificationResult`].

pub mod config;
pub mod pipeline;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber. Safe to call more than once; only
/// the first call takes effect. Honors `RUST_LOG` when set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
            )
            .init();
    });
}
