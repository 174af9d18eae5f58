//! Title-keyword check.

use crate::annotate;
use crate::model::Document;

/// Check that the first paragraph contains the required title keyword.
///
/// Skipped entirely when no keyword is configured or the document has no
/// paragraphs; both are reported as status, never as errors.
pub fn check_title_keyword(doc: &mut Document, required_keyword: Option<&str>) -> Vec<String> {
    let keyword = match required_keyword {
        Some(k) if !k.trim().is_empty() => k,
        _ => return vec!["- [룰] 제목 키워드 기준 미설정 (수동 체크)".to_string()],
    };

    if doc.is_empty() {
        return vec!["- [룰] 문단이 없어 제목을 확인할 수 없음".to_string()];
    }

    // the title is the first paragraph; checks never insert before index 0
    if doc.paragraphs[0].text().contains(keyword) {
        vec!["- [룰] 제목에 지정 키워드 포함".to_string()]
    } else {
        annotate::highlight(&mut doc.paragraphs[0]);
        annotate::comment(
            doc,
            0,
            &format!("제목에 지정된 키워드('{}')가 포함되어 있지 않습니다.", keyword),
        );
        vec!["- [룰] 제목 키워드 미포함".to_string()]
    }
}
