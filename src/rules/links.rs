//! Outbound-link tracking check.

use crate::annotate;
use crate::model::Document;

/// Flag paragraphs that contain a link without UTM tracking parameters.
///
/// A paragraph offends when its text contains `http` but no `utm_`
/// substring. Each offender is highlighted and gets one commentary
/// paragraph.
pub fn check_utm_links(doc: &mut Document) -> Vec<String> {
    let mut count = 0;
    let mut idx = 0;
    while idx < doc.paragraphs.len() {
        if doc.paragraphs[idx].is_review() {
            idx += 1;
            continue;
        }
        let text = doc.paragraphs[idx].text();
        if text.contains("http") && !text.contains("utm_") {
            annotate::highlight(&mut doc.paragraphs[idx]);
            annotate::comment(doc, idx, "UTM 파라미터가 누락되었습니다. (예: ?utm_source=...)");
            count += 1;
        }
        idx += 1;
    }

    if count > 0 {
        vec![format!("- [룰] UTM 누락 문단 {}개", count)]
    } else {
        vec!["- [룰] UTM 관련 문제 없음".to_string()]
    }
}
