//! # docxvet
//!
//! Rule-based and LLM-assisted review of `.docx` marketing drafts.
//!
//! The library scans a document against a configurable rule set (banned
//! terms, required hashtags, image/video minimums, title keywords),
//! highlights offending paragraphs, inserts commentary paragraphs inline,
//! and returns the annotated copy together with a textual report. Nuanced
//! judgment (tone, mislabeling, typos) can optionally be delegated to an
//! external language model, one bounded call per flagged paragraph.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docxvet::{review_file, ReviewConfig};
//!
//! fn main() -> docxvet::Result<()> {
//!     let config = ReviewConfig::marketing_defaults().with_title_keyword("창업");
//!     let outcome = review_file("draft.docx", &config)?;
//!
//!     println!("{}", outcome.report.to_text());
//!     std::fs::write("draft_checked.docx", &outcome.document)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//!
//! - **Stateless**: each call owns its document; nothing is shared or
//!   persisted across requests.
//! - **Append-only**: checks never delete or reorder source paragraphs, so
//!   positional checks stay valid for the whole pass.
//! - **Fail-soft LLM**: a missing credential or a failed classification call
//!   downgrades to a report line, never an error.

pub mod annotate;
pub mod config;
pub mod detect;
pub mod docx;
pub mod error;
pub mod llm;
pub mod model;
pub mod process;
pub mod report;
pub mod rules;

// Re-export commonly used types
pub use config::ReviewConfig;
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_docx, is_docx_bytes};
pub use error::{Error, Result};
pub use llm::{ClassifierError, OpenAiClassifier, TextClassifier, Verdict};
pub use model::{Document, Media, MediaKind, Origin, Paragraph, Run, RunStyle};
pub use process::{process_docx, ReviewOutcome};
pub use report::Report;

use std::path::Path;

/// Review a `.docx` file with rule checks only.
///
/// # Example
///
/// ```no_run
/// use docxvet::{review_file, ReviewConfig};
///
/// let outcome = review_file("draft.docx", &ReviewConfig::marketing_defaults()).unwrap();
/// println!("{} findings", outcome.report.len());
/// ```
pub fn review_file<P: AsRef<Path>>(path: P, config: &ReviewConfig) -> Result<ReviewOutcome> {
    let data = std::fs::read(path)?;
    review_bytes(&data, config)
}

/// Review `.docx` bytes with rule checks only.
pub fn review_bytes(data: &[u8], config: &ReviewConfig) -> Result<ReviewOutcome> {
    process::process_docx(data, config, false, None)
}

/// Builder for reviewing documents with optional LLM assistance.
///
/// # Example
///
/// ```no_run
/// use docxvet::{Reviewer, ReviewConfig};
///
/// let outcome = Reviewer::new()
///     .with_config(ReviewConfig::marketing_defaults())
///     .with_llm(true)
///     .review_file("draft.docx")?;
/// # Ok::<(), docxvet::Error>(())
/// ```
pub struct Reviewer {
    config: ReviewConfig,
    use_llm: bool,
    classifier: Option<Box<dyn TextClassifier>>,
}

impl Reviewer {
    /// Create a reviewer with an empty config and LLM review off.
    pub fn new() -> Self {
        Self {
            config: ReviewConfig::default(),
            use_llm: false,
            classifier: None,
        }
    }

    /// Set the rule configuration.
    pub fn with_config(mut self, config: ReviewConfig) -> Self {
        self.config = config;
        self
    }

    /// Enable or disable the LLM reviewer.
    pub fn with_llm(mut self, enabled: bool) -> Self {
        self.use_llm = enabled;
        self
    }

    /// Inject a classifier (a fake in tests, a proxy in production).
    ///
    /// Without an injected classifier the reviewer falls back to
    /// [`OpenAiClassifier::from_env`]; an absent credential degrades to the
    /// fail-soft report line.
    pub fn with_classifier(mut self, classifier: Box<dyn TextClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Review a `.docx` file.
    pub fn review_file<P: AsRef<Path>>(&self, path: P) -> Result<ReviewOutcome> {
        let data = std::fs::read(path)?;
        self.review_bytes(&data)
    }

    /// Review `.docx` bytes.
    pub fn review_bytes(&self, data: &[u8]) -> Result<ReviewOutcome> {
        if let Some(classifier) = &self.classifier {
            return process::process_docx(data, &self.config, self.use_llm, Some(classifier.as_ref()));
        }

        let env_classifier = OpenAiClassifier::from_env();
        process::process_docx(
            data,
            &self.config,
            self.use_llm,
            env_classifier.as_ref().map(|c| c as &dyn TextClassifier),
        )
    }
}

impl Default for Reviewer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reviewer_builder() {
        let reviewer = Reviewer::new()
            .with_config(ReviewConfig::new().with_min_images(3))
            .with_llm(true);

        assert!(reviewer.use_llm);
        assert_eq!(reviewer.config.min_images, 3);
        assert!(reviewer.classifier.is_none());
    }

    #[test]
    fn test_review_bytes_rejects_garbage() {
        let config = ReviewConfig::new();
        assert!(review_bytes(b"not a docx", &config).is_err());
    }
}
