//! Document processor: rules, LLM review, summary block, packing.

use crate::config::ReviewConfig;
use crate::docx;
use crate::error::Result;
use crate::llm::{self, TextClassifier};
use crate::model::{Document, Origin, Paragraph, Run, RunStyle};
use crate::report::Report;
use crate::rules;

/// Heading of the trailing summary block.
const SUMMARY_HEADING: &str = "[자동검수 요약]";

/// Result of processing one document.
#[derive(Debug, Clone)]
pub struct ReviewOutcome {
    /// The annotated document, packed as `.docx` bytes
    pub document: Vec<u8>,

    /// The findings, in check-execution order
    pub report: Report,
}

/// Review one document: run every rule check, then the LLM reviewer, append
/// the summary block, and pack the annotated copy.
///
/// The only error branches of its own are malformed input bytes and a
/// packing failure; check findings are never errors.
pub fn process_docx(
    data: &[u8],
    config: &ReviewConfig,
    use_llm: bool,
    classifier: Option<&dyn TextClassifier>,
) -> Result<ReviewOutcome> {
    let mut doc = docx::parse_bytes(data)?;
    let mut report = Report::new();

    report.extend(rules::run_all(&mut doc, config));
    report.extend(llm::review(&mut doc, config, classifier, use_llm));

    append_summary(&mut doc, &report);

    let document = docx::write_bytes(&doc)?;
    Ok(ReviewOutcome { document, report })
}

/// Append the bold summary heading plus one plain paragraph per report line.
fn append_summary(doc: &mut Document, report: &Report) {
    let heading = Paragraph {
        runs: vec![Run {
            text: SUMMARY_HEADING.to_string(),
            style: RunStyle {
                bold: true,
                ..Default::default()
            },
        }],
        origin: Origin::Review,
    };
    doc.push_paragraph(heading);

    for line in report.lines() {
        let mut p = Paragraph::with_text(line.as_str());
        p.origin = Origin::Review;
        doc.push_paragraph(p);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_block_order() {
        let mut doc = Document::new();
        doc.push_paragraph(Paragraph::with_text("본문"));

        let mut report = Report::new();
        report.push("- [룰] 첫 결과");
        report.push("- [룰] 둘째 결과");

        append_summary(&mut doc, &report);

        assert_eq!(doc.paragraph_count(), 4);
        assert_eq!(doc.paragraphs[1].text(), SUMMARY_HEADING);
        assert!(doc.paragraphs[1].runs[0].style.bold);
        assert_eq!(doc.paragraphs[2].text(), "- [룰] 첫 결과");
        assert_eq!(doc.paragraphs[3].text(), "- [룰] 둘째 결과");
    }

    #[test]
    fn test_process_rejects_malformed_bytes() {
        let config = ReviewConfig::new();
        let result = process_docx(b"not a docx", &config, false, None);
        assert!(result.is_err());
    }
}
