//! Paragraph and run-level types.

use serde::{Deserialize, Serialize};

/// Where a paragraph came from.
///
/// Source paragraphs belong to the uploaded manuscript. Review paragraphs
/// are commentary inserted by a check; they are never themselves scanned,
/// so one check's output cannot trigger another check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Part of the uploaded document
    #[default]
    Source,
    /// Commentary inserted during review
    Review,
}

/// A paragraph of document text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in the paragraph
    pub runs: Vec<Run>,

    /// Whether this paragraph is source content or inserted commentary
    pub origin: Origin,
}

impl Paragraph {
    /// Create a new empty source paragraph.
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            origin: Origin::Source,
        }
    }

    /// Create a source paragraph with a single plain-text run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Add a plain-text run to the paragraph.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.runs.push(Run::new(text));
    }

    /// Add a styled run.
    pub fn add_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Get the concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty() || self.text().trim().is_empty()
    }

    /// Check if this paragraph was inserted by a check.
    pub fn is_review(&self) -> bool {
        self.origin == Origin::Review
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    /// The text content
    pub text: String,

    /// Run styling
    pub style: RunStyle,
}

impl Run {
    /// Create a new run with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::default(),
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle {
                bold: true,
                ..Default::default()
            },
        }
    }
}

/// Run styling properties.
///
/// Colors are hex strings without a leading `#` (e.g. `FF0000`), the form
/// WordprocessingML stores them in. Highlight values are the named WordML
/// highlight colors (`yellow`, `cyan`, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunStyle {
    /// Bold text
    pub bold: bool,

    /// Text color (hex, e.g. "FF0000")
    pub color: Option<String>,

    /// Highlight color name (e.g. "yellow")
    pub highlight: Option<String>,
}

impl RunStyle {
    /// Check if any styling is applied.
    pub fn has_styling(&self) -> bool {
        self.bold || self.color.is_some() || self.highlight.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_text() {
        let mut p = Paragraph::new();
        p.add_text("Hello ");
        p.add_run(Run::bold("world"));
        p.add_text("!");

        assert_eq!(p.text(), "Hello world!");
        assert_eq!(p.origin, Origin::Source);
    }

    #[test]
    fn test_paragraph_is_empty() {
        assert!(Paragraph::new().is_empty());
        assert!(Paragraph::with_text("   ").is_empty());
        assert!(!Paragraph::with_text("text").is_empty());
    }

    #[test]
    fn test_run_style() {
        let style = RunStyle::default();
        assert!(!style.has_styling());

        let styled = RunStyle {
            bold: true,
            color: Some("FF0000".to_string()),
            highlight: Some("yellow".to_string()),
        };
        assert!(styled.has_styling());
    }
}
