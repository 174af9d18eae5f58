//! Keyword-based paragraph checks: banned brands, B2B phrasing, agency
//! mentions, forbidden terms, and avoided phrasings.

use super::{contains_any, contains_any_ci};
use crate::annotate;
use crate::model::Document;

/// Flag paragraphs mentioning the product brand (case-insensitive).
pub fn check_brand_mentions(doc: &mut Document, brand_keywords: &[String]) -> Vec<String> {
    let count = flag_paragraphs(doc, "샵바이(Shopby) 관련 내용은 블로그에 포함될 수 없습니다.", |text| {
        contains_any_ci(&text.to_lowercase(), brand_keywords)
    });

    if count > 0 {
        vec![format!("- [룰] 샵바이 언급 문단 {}개", count)]
    } else {
        vec!["- [룰] 샵바이 언급 없음".to_string()]
    }
}

/// Flag paragraphs where a B2B keyword co-occurs with "basic feature"
/// phrasing (both case-sensitive, same paragraph).
pub fn check_b2b_as_basic(
    doc: &mut Document,
    b2b_keywords: &[String],
    basic_feature_keywords: &[String],
) -> Vec<String> {
    let count = flag_paragraphs(
        doc,
        "B2B 기능이 기본 제공된다는 오해를 줄 수 있는 표현입니다.",
        |text| contains_any(text, b2b_keywords) && contains_any(text, basic_feature_keywords),
    );

    if count > 0 {
        vec![format!("- [룰] B2B를 기본 기능처럼 표현한 문단 {}개", count)]
    } else {
        vec!["- [룰] B2B 기본 기능 오해 표현 없음".to_string()]
    }
}

/// Flag paragraphs mentioning the agency by name (case-sensitive).
pub fn check_agency_mentions(doc: &mut Document, agency_keywords: &[String]) -> Vec<String> {
    let count = flag_paragraphs(doc, "해드림 표기 방식이 정책에 맞는지 확인이 필요합니다.", |text| {
        contains_any(text, agency_keywords)
    });

    if count > 0 {
        vec![format!("- [룰] 해드림 언급 문단 {}개", count)]
    } else {
        vec!["- [룰] 해드림 언급 없음".to_string()]
    }
}

/// Flag paragraphs naming a client brand or a competitor (case-insensitive).
///
/// One paragraph can be flagged for both categories; it is then highlighted
/// once and receives one commentary paragraph per category.
pub fn check_forbidden_terms(
    doc: &mut Document,
    client_brands: &[String],
    competitors: &[String],
) -> Vec<String> {
    let mut client_count = 0;
    let mut comp_count = 0;

    let mut idx = 0;
    while idx < doc.paragraphs.len() {
        if doc.paragraphs[idx].is_review() {
            idx += 1;
            continue;
        }
        let text_lower = doc.paragraphs[idx].text().to_lowercase();

        if contains_any_ci(&text_lower, client_brands) {
            annotate::highlight(&mut doc.paragraphs[idx]);
            annotate::comment(doc, idx, "고객사 브랜드명 언급 금지 대상이 포함되어 있습니다.");
            client_count += 1;
        }
        if contains_any_ci(&text_lower, competitors) {
            annotate::highlight(&mut doc.paragraphs[idx]);
            annotate::comment(doc, idx, "타사(경쟁사) 언급이 포함되어 있습니다.");
            comp_count += 1;
        }
        idx += 1;
    }

    vec![
        format!("- [룰] 고객사 브랜드 언급 문단: {}개", client_count),
        format!("- [룰] 타사/경쟁사 언급 문단: {}개", comp_count),
    ]
}

/// Flag paragraphs containing internally avoided phrasings (case-insensitive).
pub fn check_avoided_phrases(doc: &mut Document, avoided_phrases: &[String]) -> Vec<String> {
    let count = flag_paragraphs(
        doc,
        "내부에서 지양하는 표현이 포함되어 있습니다. 문구 수정 필요.",
        |text| contains_any_ci(&text.to_lowercase(), avoided_phrases),
    );

    vec![format!("- [룰] 지양 표현이 포함된 문단: {}개", count)]
}

/// Highlight and comment every source paragraph matching `predicate`;
/// returns the number flagged.
fn flag_paragraphs<F>(doc: &mut Document, message: &str, predicate: F) -> usize
where
    F: Fn(&str) -> bool,
{
    let mut count = 0;
    let mut idx = 0;
    while idx < doc.paragraphs.len() {
        if doc.paragraphs[idx].is_review() {
            idx += 1;
            continue;
        }
        if predicate(&doc.paragraphs[idx].text()) {
            annotate::highlight(&mut doc.paragraphs[idx]);
            annotate::comment(doc, idx, message);
            count += 1;
        }
        idx += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paragraph;

    fn kw(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn doc_with(texts: &[&str]) -> Document {
        let mut doc = Document::new();
        for t in texts {
            doc.push_paragraph(Paragraph::with_text(*t));
        }
        doc
    }

    #[test]
    fn test_brand_mentions_ignore_case() {
        let mut doc = doc_with(&["SHOPBY 엔진으로 만든 쇼핑몰"]);
        let lines = check_brand_mentions(&mut doc, &kw(&["shopby"]));

        assert_eq!(lines, vec!["- [룰] 샵바이 언급 문단 1개"]);
        assert!(doc.paragraphs[0].runs[0].style.highlight.is_some());
    }

    #[test]
    fn test_b2b_needs_co_occurrence() {
        let mut doc = doc_with(&[
            "B2B 기능도 기본 제공됩니다",
            "B2B 전용 기능입니다",
            "기본 제공되는 테마입니다",
        ]);
        let lines = check_b2b_as_basic(&mut doc, &kw(&["B2B"]), &kw(&["기본 제공"]));

        assert_eq!(lines, vec!["- [룰] B2B를 기본 기능처럼 표현한 문단 1개"]);
    }

    #[test]
    fn test_agency_mentions_are_case_sensitive() {
        let mut doc = doc_with(&["해드림과 함께했습니다"]);
        let lines = check_agency_mentions(&mut doc, &kw(&["해드림"]));
        assert_eq!(lines, vec!["- [룰] 해드림 언급 문단 1개"]);

        let mut clean = doc_with(&["다른 대행사와 함께했습니다"]);
        let lines = check_agency_mentions(&mut clean, &kw(&["해드림"]));
        assert_eq!(lines, vec!["- [룰] 해드림 언급 없음"]);
    }

    #[test]
    fn test_forbidden_terms_count_both_categories() {
        let mut doc = doc_with(&[
            "카페24에서 이전해 왔습니다",
            "고객A 사례를 소개합니다",
            "카페24와 비교하면",
        ]);
        let lines = check_forbidden_terms(&mut doc, &kw(&["고객A"]), &kw(&["카페24"]));

        assert_eq!(
            lines,
            vec![
                "- [룰] 고객사 브랜드 언급 문단: 1개",
                "- [룰] 타사/경쟁사 언급 문단: 2개",
            ]
        );
    }

    #[test]
    fn test_forbidden_terms_double_flag_same_paragraph() {
        let mut doc = doc_with(&["고객A는 카페24를 떠나"]);
        check_forbidden_terms(&mut doc, &kw(&["고객A"]), &kw(&["카페24"]));

        // one source paragraph, two commentary paragraphs in category order
        assert_eq!(doc.paragraph_count(), 3);
        assert!(doc.paragraphs[1].text().contains("고객사"));
        assert!(doc.paragraphs[2].text().contains("경쟁사"));
    }

    #[test]
    fn test_avoided_phrases_always_report_count() {
        let mut doc = doc_with(&["반응형 스킨을 지원합니다"]);
        let lines = check_avoided_phrases(&mut doc, &kw(&["반응형 스킨"]));
        assert_eq!(lines, vec!["- [룰] 지양 표현이 포함된 문단: 1개"]);

        let mut clean = doc_with(&["아무 문제 없는 문단"]);
        let lines = check_avoided_phrases(&mut clean, &kw(&["반응형 스킨"]));
        assert_eq!(lines, vec!["- [룰] 지양 표현이 포함된 문단: 0개"]);
    }

    #[test]
    fn test_empty_lists_flag_nothing() {
        let mut doc = doc_with(&["샵바이 B2B 해드림 카페24 반응형 스킨"]);
        check_brand_mentions(&mut doc, &[]);
        check_b2b_as_basic(&mut doc, &[], &[]);
        check_agency_mentions(&mut doc, &[]);
        check_forbidden_terms(&mut doc, &[], &[]);
        check_avoided_phrases(&mut doc, &[]);

        assert_eq!(doc.paragraph_count(), 1);
        assert!(doc.paragraphs[0].runs[0].style.highlight.is_none());
    }
}
