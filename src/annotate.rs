//! Annotation primitives: paragraph highlighting and inline commentary.

use crate::model::{Document, Origin, Paragraph, Run, RunStyle};

/// Prefix every commentary paragraph carries.
pub const COMMENT_TAG: &str = "[자동검수]";

/// Text color of commentary runs (WordML hex).
pub const ALERT_COLOR: &str = "FF0000";

/// Highlight applied to flagged paragraphs and commentary.
pub const HIGHLIGHT_COLOR: &str = "yellow";

/// Highlight every run of a paragraph.
///
/// Idempotent: re-applying to an already highlighted paragraph changes
/// nothing. Paragraphs flagged by several checks end up highlighted once and
/// commented once per check.
pub fn highlight(paragraph: &mut Paragraph) {
    for run in &mut paragraph.runs {
        run.style.highlight = Some(HIGHLIGHT_COLOR.to_string());
    }
}

/// Insert a commentary paragraph immediately after the paragraph at `after`.
///
/// The commentary is a single bold run in the alert color on a highlighted
/// background, prefixed with [`COMMENT_TAG`]. Commentary already anchored to
/// the same paragraph is skipped over, so repeated calls against one
/// paragraph produce comments in check-execution order.
pub fn comment(doc: &mut Document, after: usize, message: &str) {
    doc.insert_after(after, commentary_paragraph(message));
}

/// Append a document-level notice at the end of the document.
///
/// Used by checks whose finding is not tied to one paragraph (missing
/// hashtags, insufficient media).
pub fn append_notice(doc: &mut Document, message: &str) {
    doc.push_paragraph(commentary_paragraph(message));
}

fn commentary_paragraph(message: &str) -> Paragraph {
    let run = Run {
        text: format!("{} {}", COMMENT_TAG, message),
        style: RunStyle {
            bold: true,
            color: Some(ALERT_COLOR.to_string()),
            highlight: Some(HIGHLIGHT_COLOR.to_string()),
        },
    };
    Paragraph {
        runs: vec![run],
        origin: Origin::Review,
    }
}
