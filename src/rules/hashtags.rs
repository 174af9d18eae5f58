//! Recommended-hashtag coverage check.

use crate::annotate;
use crate::model::Document;

/// Report recommended hashtags missing from the whole document.
///
/// A single document-level notice lists every missing tag; individual
/// paragraphs are not annotated. Matching is case-sensitive against the
/// newline-joined source text.
pub fn check_hashtags(doc: &mut Document, recommended: &[String]) -> Vec<String> {
    let full_text = doc.full_text();
    let missing: Vec<&str> = recommended
        .iter()
        .filter(|t| !t.is_empty() && !full_text.contains(t.as_str()))
        .map(|t| t.as_str())
        .collect();

    if missing.is_empty() {
        vec!["- [룰] 해시태그 모두 포함됨".to_string()]
    } else {
        annotate::append_notice(
            doc,
            &format!("아래 해시태그가 부족합니다: {}", missing.join(", ")),
        );
        vec![format!(
            "- [룰] 해시태그 부족: {}개 (권장 해시태그 일부 누락)",
            missing.len()
        )]
    }
}
