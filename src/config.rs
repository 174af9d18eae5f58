//! Review configuration.

use serde::{Deserialize, Serialize};

/// Rule parameters for one review run.
///
/// Built once per request and never mutated during processing. An empty
/// keyword list disables the corresponding check ("no issues found"), it is
/// never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Minimum number of embedded images
    pub min_images: u32,

    /// Hashtags the manuscript is expected to contain
    pub recommended_hashtags: Vec<String>,

    /// Keywords marking B2B functionality (case-sensitive)
    pub b2b_keywords: Vec<String>,

    /// Phrasings implying a feature ships by default (case-sensitive)
    pub basic_feature_keywords: Vec<String>,

    /// Product-brand keywords banned from manuscripts (case-insensitive)
    pub brand_keywords: Vec<String>,

    /// Agency-name keywords whose labeling needs manual review (case-sensitive)
    pub agency_keywords: Vec<String>,

    /// Client brand names banned from manuscripts (case-insensitive)
    pub client_brands: Vec<String>,

    /// Competitor names banned from manuscripts (case-insensitive)
    pub competitor_keywords: Vec<String>,

    /// Internally avoided phrasings (case-insensitive)
    pub avoided_phrases: Vec<String>,

    /// Keyword the title paragraph must contain; None skips the check
    pub title_keyword: Option<String>,

    /// Keywords gating LLM analysis of a paragraph (case-insensitive)
    pub suspicious_keywords: Vec<String>,
}

impl ReviewConfig {
    /// Create an empty configuration (all checks effectively disabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum image count.
    pub fn with_min_images(mut self, min: u32) -> Self {
        self.min_images = min;
        self
    }

    /// Set the recommended hashtags.
    pub fn with_hashtags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recommended_hashtags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the B2B keyword list.
    pub fn with_b2b_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.b2b_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set the basic-feature phrasing list.
    pub fn with_basic_feature_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.basic_feature_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set the banned product-brand keyword list.
    pub fn with_brand_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.brand_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set the agency keyword list.
    pub fn with_agency_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.agency_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set the banned client-brand list.
    pub fn with_client_brands<I, S>(mut self, brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.client_brands = brands.into_iter().map(Into::into).collect();
        self
    }

    /// Set the competitor keyword list.
    pub fn with_competitors<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.competitor_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set the avoided-phrase list.
    pub fn with_avoided_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.avoided_phrases = phrases.into_iter().map(Into::into).collect();
        self
    }

    /// Set the required title keyword.
    pub fn with_title_keyword(mut self, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        self.title_keyword = if keyword.trim().is_empty() {
            None
        } else {
            Some(keyword)
        };
        self
    }

    /// Set the suspicious keywords gating LLM analysis.
    pub fn with_suspicious_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suspicious_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// The rule set the review tool ships with for commerce-blog manuscripts.
    pub fn marketing_defaults() -> Self {
        Self::new()
            .with_min_images(15)
            .with_hashtags([
                "#자사몰제작",
                "#자사몰만들기",
                "#무료쇼핑몰만들기",
                "#온라인쇼핑몰창업",
                "#B2B몰제작",
            ])
            .with_b2b_keywords(["B2B", "도매몰", "도매 쇼핑몰", "폐쇄몰", "가맹점 발주", "프랜차이즈"])
            .with_basic_feature_keywords([
                "기본 기능",
                "기본기능",
                "기본으로 제공",
                "기본 탑재",
                "별도 개발 없이",
                "추가 개발 없이",
                "바로 사용할 수 있는",
            ])
            .with_brand_keywords(["샵바이", "shopby", "Shopby", "SHOPBY", "샵바이 엔터프라이즈"])
            .with_agency_keywords(["해드림", "헤드림"])
            .with_client_brands(["고객A", "고객B"])
            .with_competitors(["카페24", "아임웹", "메이크샵", "shopify"])
            .with_avoided_phrases([
                "쇼핑몰호스팅사",
                "쇼핑몰 호스팅사",
                "전자상거래 플랫폼",
                "반응형 스킨",
                "반응형스킨",
            ])
            .with_suspicious_keywords([
                "B2B",
                "도매몰",
                "폐쇄몰",
                "프랜차이즈",
                "가맹점",
                "무료",
                "0원",
                "프로모션",
                "무상",
                "해드림",
                "헤드림",
            ])
    }
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            min_images: 0,
            recommended_hashtags: Vec::new(),
            b2b_keywords: Vec::new(),
            basic_feature_keywords: Vec::new(),
            brand_keywords: Vec::new(),
            agency_keywords: Vec::new(),
            client_brands: Vec::new(),
            competitor_keywords: Vec::new(),
            avoided_phrases: Vec::new(),
            title_keyword: None,
            suspicious_keywords: Vec::new(),
        }
    }
}
