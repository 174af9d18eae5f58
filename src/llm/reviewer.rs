//! LLM reviewer pass.

use super::{TextClassifier, Verdict};
use crate::annotate;
use crate::config::ReviewConfig;
use crate::model::Document;
use crate::rules::contains_any_ci;

/// Minimum trimmed length (in chars) for a paragraph to be analyzed.
const MIN_PARAGRAPH_CHARS: usize = 15;

/// Run the LLM review over the document's source paragraphs.
///
/// Fail-soft: disabled review or a missing classifier appends exactly one
/// explanatory line and mutates nothing. A paragraph is analyzed only when
/// its trimmed text is at least [`MIN_PARAGRAPH_CHARS`] chars long and
/// contains a suspicious keyword (case-insensitive); this bounds external
/// calls to a small subset of the document. A failed or unparseable call
/// forfeits that paragraph's verdict and the scan continues.
pub fn review(
    doc: &mut Document,
    config: &ReviewConfig,
    classifier: Option<&dyn TextClassifier>,
    enabled: bool,
) -> Vec<String> {
    let classifier = match classifier {
        Some(c) if enabled => c,
        None => {
            return vec![
                "- [LLM] OPENAI_API_KEY 미설정으로 LLM 검수는 수행되지 않았습니다.".to_string(),
            ]
        }
        Some(_) => return vec!["- [LLM] LLM 검수 옵션이 꺼져 있습니다.".to_string()],
    };

    let mut b2b_basic_count = 0;
    let mut free_b2b_mix_count = 0;
    let mut haedream_mislabel_count = 0;
    let mut typo_count = 0;

    let total = doc.source_count();
    let mut ordinal = 0;

    let mut idx = 0;
    while idx < doc.paragraphs.len() {
        if doc.paragraphs[idx].is_review() {
            idx += 1;
            continue;
        }
        ordinal += 1;

        let text = doc.paragraphs[idx].text().trim().to_string();
        if !is_eligible(&text, &config.suspicious_keywords) {
            idx += 1;
            continue;
        }

        log::info!("[LLM] {}/{} 문단 검사 중...", ordinal, total);

        let verdict = match classifier.classify(&text) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("[LLM] 분류 요청 실패, 해당 문단 건너뜀: {}", e);
                idx += 1;
                continue;
            }
        };

        apply_verdict(doc, idx, &verdict);
        if verdict.b2b_as_basic {
            b2b_basic_count += 1;
        }
        if verdict.free_b2b_mix {
            free_b2b_mix_count += 1;
        }
        if verdict.haedream_mislabel {
            haedream_mislabel_count += 1;
        }
        if verdict.typo_exists {
            typo_count += 1;
        }

        idx += 1;
    }

    vec![
        format!("- [LLM] B2B 기본기능처럼 보이는 문단: {}개", b2b_basic_count),
        format!(
            "- [LLM] 무료 프로모션과 B2B 튜닝이 혼용된 문단: {}개",
            free_b2b_mix_count
        ),
        format!(
            "- [LLM] 해드림 표기 오해 소지가 있는 문단: {}개",
            haedream_mislabel_count
        ),
        format!("- [LLM] 맞춤법/오탈자 지적된 문단: {}개", typo_count),
    ]
}

/// Pre-filter: long enough and containing a suspicious keyword.
fn is_eligible(trimmed: &str, suspicious_keywords: &[String]) -> bool {
    if trimmed.chars().count() < MIN_PARAGRAPH_CHARS {
        return false;
    }
    contains_any_ci(&trimmed.to_lowercase(), suspicious_keywords)
}

/// Annotate one paragraph per raised flag.
///
/// The three misrepresentation flags highlight the paragraph; the typo flag
/// comments without highlighting. That asymmetry is part of the annotation
/// contract, keep it when touching this.
fn apply_verdict(doc: &mut Document, idx: usize, verdict: &Verdict) {
    if verdict.b2b_as_basic {
        annotate::highlight(&mut doc.paragraphs[idx]);
        annotate::comment(
            doc,
            idx,
            "LLM: B2B 기능이 '기본 제공'처럼 보이는 표현입니다. 커스터마이징이 필요하다는 점을 명시해야 합니다.",
        );
    }

    if verdict.free_b2b_mix {
        annotate::highlight(&mut doc.paragraphs[idx]);
        annotate::comment(
            doc,
            idx,
            "LLM: 무료/0원 프로모션과 B2B 튜닝 내용이 섞여, B2B도 무료로 시작 가능한 것처럼 보일 수 있습니다.",
        );
    }

    if verdict.haedream_mislabel {
        annotate::highlight(&mut doc.paragraphs[idx]);
        annotate::comment(
            doc,
            idx,
            "LLM: 해드림을 공식 에이전시/제작 대행사처럼 표현한 부분이 있습니다. '맞춤 제작 상담을 통해 공식 에이전시를 연결'하는 역할로 표시해야 합니다.",
        );
    }

    if verdict.typo_exists {
        let example_text = if verdict.typo_examples.is_empty() {
            "대표적인 오류 예시를 확인해 주세요.".to_string()
        } else {
            verdict
                .typo_examples
                .iter()
                .take(3)
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        annotate::comment(
            doc,
            idx,
            &format!(
                "LLM: 이 문단에 맞춤법/띄어쓰기/오탈자 문제가 있습니다. 예시: {}",
                example_text
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ClassifierError;
    use crate::model::Paragraph;
    use std::cell::RefCell;

    /// Deterministic classifier: replays canned verdicts and records inputs.
    struct FakeClassifier {
        verdicts: RefCell<Vec<Result<Verdict, ClassifierError>>>,
        seen: RefCell<Vec<String>>,
    }

    impl FakeClassifier {
        fn new(verdicts: Vec<Result<Verdict, ClassifierError>>) -> Self {
            Self {
                verdicts: RefCell::new(verdicts),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn seen(&self) -> Vec<String> {
            self.seen.borrow().clone()
        }
    }

    impl TextClassifier for FakeClassifier {
        fn classify(&self, text: &str) -> Result<Verdict, ClassifierError> {
            self.seen.borrow_mut().push(text.to_string());
            let mut verdicts = self.verdicts.borrow_mut();
            if verdicts.is_empty() {
                Ok(Verdict::default())
            } else {
                verdicts.remove(0)
            }
        }
    }

    fn config_with_suspicious(keywords: &[&str]) -> ReviewConfig {
        ReviewConfig::new().with_suspicious_keywords(keywords.iter().copied())
    }

    fn doc_with(texts: &[&str]) -> Document {
        let mut doc = Document::new();
        for t in texts {
            doc.push_paragraph(Paragraph::with_text(*t));
        }
        doc
    }

    #[test]
    fn test_missing_classifier_is_fail_soft() {
        let mut doc = doc_with(&["B2B 기능이 기본 제공되는 쇼핑몰입니다"]);
        let config = config_with_suspicious(&["B2B"]);

        let lines = review(&mut doc, &config, None, true);

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("OPENAI_API_KEY"));
        assert_eq!(doc.paragraph_count(), 1);
    }

    #[test]
    fn test_disabled_review_reports_once() {
        let fake = FakeClassifier::new(vec![]);
        let mut doc = doc_with(&["B2B 기능이 기본 제공되는 쇼핑몰입니다"]);
        let config = config_with_suspicious(&["B2B"]);

        let lines = review(&mut doc, &config, Some(&fake), false);

        assert_eq!(lines, vec!["- [LLM] LLM 검수 옵션이 꺼져 있습니다."]);
        assert!(fake.seen().is_empty());
    }

    #[test]
    fn test_short_paragraph_never_reaches_classifier() {
        let fake = FakeClassifier::new(vec![]);
        // "B2B 무료" is far below 15 chars even though keywords match
        let mut doc = doc_with(&["B2B 무료"]);
        let config = config_with_suspicious(&["B2B", "무료"]);

        review(&mut doc, &config, Some(&fake), true);

        assert!(fake.seen().is_empty());
    }

    #[test]
    fn test_keyword_prefilter_bounds_calls() {
        let fake = FakeClassifier::new(vec![]);
        let mut doc = doc_with(&[
            "B2B 도매몰 구축이 무료로 제공되는 프로모션 안내입니다",
            "이 문단은 충분히 길지만 의심 키워드가 전혀 없습니다",
        ]);
        let config = config_with_suspicious(&["B2B"]);

        review(&mut doc, &config, Some(&fake), true);

        assert_eq!(fake.seen().len(), 1);
        assert!(fake.seen()[0].contains("도매몰"));
    }

    #[test]
    fn test_flags_annotate_with_highlight_asymmetry() {
        let verdict = Verdict {
            b2b_as_basic: true,
            free_b2b_mix: false,
            haedream_mislabel: false,
            typo_exists: true,
            typo_examples: vec!["맞춤뻡".to_string(), "띄어쓰기".to_string()],
        };
        let fake = FakeClassifier::new(vec![Ok(verdict)]);
        let mut doc = doc_with(&["B2B 기능이 기본 제공된다고 안내하는 문단입니다"]);
        let config = config_with_suspicious(&["B2B"]);

        let lines = review(&mut doc, &config, Some(&fake), true);

        // paragraph highlighted by the b2b flag
        assert!(doc.paragraphs[0].runs[0].style.highlight.is_some());
        // two commentary paragraphs in flag order
        assert_eq!(doc.paragraph_count(), 3);
        assert!(doc.paragraphs[1].text().contains("기본 제공"));
        assert!(doc.paragraphs[2].text().contains("맞춤뻡, 띄어쓰기"));

        assert_eq!(
            lines,
            vec![
                "- [LLM] B2B 기본기능처럼 보이는 문단: 1개",
                "- [LLM] 무료 프로모션과 B2B 튜닝이 혼용된 문단: 0개",
                "- [LLM] 해드림 표기 오해 소지가 있는 문단: 0개",
                "- [LLM] 맞춤법/오탈자 지적된 문단: 1개",
            ]
        );
    }

    #[test]
    fn test_typo_flag_alone_does_not_highlight() {
        let verdict = Verdict {
            typo_exists: true,
            ..Default::default()
        };
        let fake = FakeClassifier::new(vec![Ok(verdict)]);
        let mut doc = doc_with(&["무료 프로모션을 소개하는 긴 안내 문단입니다"]);
        let config = config_with_suspicious(&["무료"]);

        review(&mut doc, &config, Some(&fake), true);

        assert!(doc.paragraphs[0].runs[0].style.highlight.is_none());
        assert!(doc.paragraphs[1].text().contains("대표적인 오류 예시"));
    }

    #[test]
    fn test_classifier_failure_skips_paragraph_only() {
        let failing = Err(ClassifierError::MalformedResponse("bad json".to_string()));
        let ok = Ok(Verdict {
            haedream_mislabel: true,
            ..Default::default()
        });
        let fake = FakeClassifier::new(vec![failing, ok]);
        let mut doc = doc_with(&[
            "해드림이 공식 에이전시라고 소개하는 문단입니다",
            "해드림과 연결해 드리는 상담 안내 문단입니다",
        ]);
        let config = config_with_suspicious(&["해드림"]);

        let lines = review(&mut doc, &config, Some(&fake), true);

        assert_eq!(fake.seen().len(), 2);
        assert_eq!(lines[2], "- [LLM] 해드림 표기 오해 소지가 있는 문단: 1개");
        // only the second paragraph got annotated
        assert_eq!(doc.paragraph_count(), 3);
    }

    #[test]
    fn test_typo_examples_capped_at_three() {
        let verdict = Verdict {
            typo_exists: true,
            typo_examples: vec![
                "하나".to_string(),
                "둘".to_string(),
                "셋".to_string(),
                "넷".to_string(),
            ],
            ..Default::default()
        };
        let fake = FakeClassifier::new(vec![Ok(verdict)]);
        let mut doc = doc_with(&["무료 프로모션을 소개하는 긴 안내 문단입니다"]);
        let config = config_with_suspicious(&["무료"]);

        review(&mut doc, &config, Some(&fake), true);

        let comment = doc.paragraphs[1].text();
        assert!(comment.contains("하나, 둘, 셋"));
        assert!(!comment.contains("넷"));
    }
}
