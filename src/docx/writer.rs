//! Document model → DOCX bytes.

use std::io::Cursor;

use crate::error::{Error, Result};
use crate::model::{Document, RunStyle};

/// Pack the document model into a `.docx` byte buffer.
///
/// Paragraphs are emitted in model order; media captured by the reader is
/// re-embedded at its anchor paragraph. Media whose bytes could not be
/// resolved counts toward the image rule during checks but is dropped here.
pub fn write_bytes(doc: &Document) -> Result<Vec<u8>> {
    let mut docx = docx_rs::Docx::new();

    for (idx, paragraph) in doc.paragraphs.iter().enumerate() {
        let mut p = docx_rs::Paragraph::new();
        for run in &paragraph.runs {
            p = p.add_run(build_run(&run.text, &run.style));
        }
        for media in doc.media.iter().filter(|m| m.anchor == idx) {
            // Pic::new decodes the bytes to learn dimensions; anything it
            // cannot decode (vector formats, unresolved rels) is dropped
            if !is_raster_image(&media.data) {
                continue;
            }
            let mut pic = docx_rs::Pic::new(&media.data);
            if media.size_emu != (0, 0) {
                pic = pic.size(media.size_emu.0, media.size_emu.1);
            }
            p = p.add_run(docx_rs::Run::new().add_image(pic));
        }
        docx = docx.add_paragraph(p);
    }

    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| Error::DocxWrite(e.to_string()))?;
    Ok(cursor.into_inner())
}

/// Formats the packer can re-measure: PNG, JPEG, GIF, BMP.
fn is_raster_image(data: &[u8]) -> bool {
    data.starts_with(b"\x89PNG\r\n\x1a\n")
        || data.starts_with(b"\xff\xd8\xff")
        || data.starts_with(b"GIF87a")
        || data.starts_with(b"GIF89a")
        || data.starts_with(b"BM")
}

fn build_run(text: &str, style: &RunStyle) -> docx_rs::Run {
    let mut run = docx_rs::Run::new().add_text(text);
    if style.bold {
        run = run.bold();
    }
    if let Some(color) = &style.color {
        run = run.color(color.as_str());
    }
    if let Some(highlight) = &style.highlight {
        run = run.highlight(highlight.as_str());
    }
    run
}
