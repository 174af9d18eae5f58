//! DOCX bytes → document model.

use docx_rs::{DocumentChild, DrawingData, ParagraphChild, RunChild};

use crate::detect;
use crate::error::Result;
use crate::model::{Document, Media, Paragraph, Run, RunStyle};

/// Parse a `.docx` byte buffer into the document model.
///
/// Fails with [`crate::Error::UnknownFormat`] when the bytes are not an
/// OOXML container and [`crate::Error::DocxParse`] when the archive cannot
/// be read; both are fatal for the request.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    detect::detect_format_from_bytes(data)?;

    let docx = docx_rs::read_docx(data)?;
    let mut doc = Document::new();

    for child in &docx.document.children {
        if let DocumentChild::Paragraph(src) = child {
            let anchor = doc.paragraphs.len();
            let mut paragraph = Paragraph::new();
            collect_children(&src.children, &mut paragraph, &mut doc.media, anchor);
            doc.paragraphs.push(paragraph);
        }
    }

    Ok(doc)
}

fn collect_children(
    children: &[ParagraphChild],
    out: &mut Paragraph,
    media: &mut Vec<Media>,
    anchor: usize,
) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => collect_run(run, out, media, anchor),
            // hyperlink text participates in every substring check
            ParagraphChild::Hyperlink(link) => {
                collect_children(&link.children, out, media, anchor)
            }
            _ => {}
        }
    }
}

fn collect_run(
    run: &docx_rs::Run,
    out: &mut Paragraph,
    media: &mut Vec<Media>,
    anchor: usize,
) {
    let style = RunStyle {
        // run-level color/highlight values are not needed by any check and
        // are left unset; the writer only styles runs the review created
        bold: run.run_property.bold.is_some(),
        color: None,
        highlight: None,
    };

    let mut text = String::new();
    for child in &run.children {
        match child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            RunChild::Drawing(d) => {
                if let Some(DrawingData::Pic(pic)) = &d.data {
                    media.push(Media::image(pic.image.clone(), pic.size, anchor));
                }
            }
            _ => {}
        }
    }

    if !text.is_empty() {
        out.add_run(Run { text, style });
    }
}
