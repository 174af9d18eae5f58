//! Document-level types.

use super::Paragraph;
use serde::{Deserialize, Serialize};

/// A document under review.
///
/// Owned exclusively by one review call, mutated in place by the checks,
/// and discarded after packing. Checks only ever append paragraphs, so
/// source paragraph indices stay stable for the whole pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Paragraphs in document order
    pub paragraphs: Vec<Paragraph>,

    /// Inline media embedded in the document
    pub media: Vec<Media>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of paragraphs, commentary included.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Number of source paragraphs (commentary excluded).
    pub fn source_count(&self) -> usize {
        self.paragraphs.iter().filter(|p| !p.is_review()).count()
    }

    /// Number of embedded media items.
    pub fn media_count(&self) -> usize {
        self.media.len()
    }

    /// Append a paragraph at the document end.
    pub fn push_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Insert a commentary paragraph after the paragraph at `after`.
    ///
    /// Commentary already anchored to the same paragraph is skipped over, so
    /// repeated insertions land in call order rather than reversed. Panics if
    /// `after` is out of bounds, which would indicate index bookkeeping gone
    /// wrong in a check.
    pub fn insert_after(&mut self, after: usize, paragraph: Paragraph) {
        assert!(after < self.paragraphs.len(), "insert_after out of bounds");
        let mut at = after + 1;
        while at < self.paragraphs.len() && self.paragraphs[at].is_review() {
            at += 1;
        }
        self.paragraphs.insert(at, paragraph);
    }

    /// Newline-joined text of all source paragraphs.
    ///
    /// Document-level scans (hashtags, video URLs) aggregate over source
    /// content only; inserted commentary must not satisfy a rule.
    pub fn full_text(&self) -> String {
        self.paragraphs
            .iter()
            .filter(|p| !p.is_review())
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if the document has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

/// Kind of embedded media.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// An inline picture
    #[default]
    Image,
}

/// An inline media item captured during parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    /// Media kind
    pub kind: MediaKind,

    /// Raw bytes, empty when the reader could not resolve them
    #[serde(skip)]
    pub data: Vec<u8>,

    /// Display size in EMU (width, height); (0, 0) when unknown
    pub size_emu: (u32, u32),

    /// Index of the source paragraph the media was anchored to
    pub anchor: usize,
}

impl Media {
    /// Create an inline image entry.
    pub fn image(data: Vec<u8>, size_emu: (u32, u32), anchor: usize) -> Self {
        Self {
            kind: MediaKind::Image,
            data,
            size_emu,
            anchor,
        }
    }
}
