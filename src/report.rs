//! Review report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ordered, human-readable summary of all findings for one document.
///
/// Lines are appended in check-execution order, rendered verbatim to the
/// user, and appended as trailing paragraphs of the annotated document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Result lines in check order
    lines: Vec<String>,

    /// When the review ran
    pub reviewed_at: DateTime<Utc>,
}

impl Report {
    /// Create an empty report stamped with the current time.
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            reviewed_at: Utc::now(),
        }
    }

    /// Append a result line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append a sequence of result lines, preserving their order.
    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            self.lines.push(line.into());
        }
    }

    /// Result lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of result lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the report has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the report as newline-joined text.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_preserves_order() {
        let mut report = Report::new();
        report.push("first");
        report.extend(["second", "third"]);

        assert_eq!(report.len(), 3);
        assert_eq!(report.lines(), &["first", "second", "third"]);
        assert_eq!(report.to_text(), "first\nsecond\nthird");
    }

    #[test]
    fn test_empty_report() {
        let report = Report::new();
        assert!(report.is_empty());
        assert_eq!(report.to_text(), "");
    }
}
