//! Rule-based checks.
//!
//! Each check scans the document's source paragraphs for one condition,
//! annotates offenders through [`crate::annotate`], and returns its own
//! report fragment. Checks do not communicate with each other; their order
//! matters only for report readability.

mod hashtags;
mod keywords;
mod links;
mod media;
mod title;

pub use hashtags::check_hashtags;
pub use keywords::{
    check_agency_mentions, check_avoided_phrases, check_b2b_as_basic, check_brand_mentions,
    check_forbidden_terms,
};
pub use links::check_utm_links;
pub use media::check_media;
pub use title::check_title_keyword;

use crate::config::ReviewConfig;
use crate::model::Document;

/// Run every rule check in the fixed report order and collect their lines.
pub fn run_all(doc: &mut Document, config: &ReviewConfig) -> Vec<String> {
    let mut lines = Vec::new();

    lines.extend(check_media(doc, config.min_images));
    lines.extend(check_utm_links(doc));
    lines.extend(check_hashtags(doc, &config.recommended_hashtags));
    lines.extend(check_brand_mentions(doc, &config.brand_keywords));
    lines.extend(check_b2b_as_basic(
        doc,
        &config.b2b_keywords,
        &config.basic_feature_keywords,
    ));
    lines.extend(check_agency_mentions(doc, &config.agency_keywords));
    lines.extend(check_forbidden_terms(
        doc,
        &config.client_brands,
        &config.competitor_keywords,
    ));
    lines.extend(check_avoided_phrases(doc, &config.avoided_phrases));
    lines.extend(check_title_keyword(doc, config.title_keyword.as_deref()));

    lines
}

/// Case-sensitive: does the text contain any of the keywords?
pub(crate) fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|k| !k.is_empty() && text.contains(k.as_str()))
}

/// Case-insensitive variant; `text_lower` must already be lowercased.
pub(crate) fn contains_any_ci(text_lower: &str, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|k| !k.is_empty() && text_lower.contains(k.to_lowercase().as_str()))
}
