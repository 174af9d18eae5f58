//! Document model types for review and annotation.
//!
//! This module defines the intermediate representation (IR) that bridges
//! DOCX parsing and annotation. Checks scan and mutate this model; the
//! writer packs it back into a `.docx` byte buffer.

mod document;
mod paragraph;

pub use document::{Document, Media, MediaKind};
pub use paragraph::{Origin, Paragraph, Run, RunStyle};
