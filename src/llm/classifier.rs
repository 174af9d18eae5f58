//! Text classification over an external chat-completion API.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Model requested from the completion service.
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";

/// Default API endpoint base.
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Environment variable holding the API credential.
const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Hard ceiling on one classification request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Structured result of one classification call for one paragraph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Verdict {
    /// B2B functionality presented as if it ships by default
    #[serde(default)]
    pub b2b_as_basic: bool,

    /// Free/0-won promotion conflated with B2B customization
    #[serde(default)]
    pub free_b2b_mix: bool,

    /// Agency mislabeled as an official partner
    #[serde(default)]
    pub haedream_mislabel: bool,

    /// Spelling/spacing problems present
    #[serde(default)]
    pub typo_exists: bool,

    /// Up to three example error tokens
    #[serde(default)]
    pub typo_examples: Vec<String>,
}

impl Verdict {
    /// Check if any flag is raised.
    pub fn any_flag(&self) -> bool {
        self.b2b_as_basic || self.free_b2b_mix || self.haedream_mislabel || self.typo_exists
    }
}

/// Errors a classification call can fail with.
///
/// All of them are recovered per paragraph by the reviewer; none aborts the
/// overall scan.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// Network failure or timeout.
    #[error("request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the service.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, possibly truncated
        body: String,
    },

    /// Response body could not be parsed into a [`Verdict`].
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Capability interface for paragraph classification.
///
/// The reviewer depends only on this trait, so tests substitute a
/// deterministic fake instead of a network dependency.
pub trait TextClassifier {
    /// Classify one paragraph of text.
    fn classify(&self, text: &str) -> Result<Verdict, ClassifierError>;
}

/// Classifier backed by an OpenAI-compatible chat-completions endpoint.
pub struct OpenAiClassifier {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiClassifier {
    /// Create a classifier with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ClassifierError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Build a classifier from the `OPENAI_API_KEY` environment variable.
    ///
    /// Returns `None` when the variable is unset or blank; the caller is
    /// expected to degrade to the rules-only path.
    pub fn from_env() -> Option<Self> {
        let key = env::var(API_KEY_ENV).ok()?;
        if key.trim().is_empty() {
            return None;
        }
        match Self::new(key) {
            Ok(c) => Some(c),
            Err(e) => {
                log::warn!("[LLM] HTTP 클라이언트 초기화 실패: {}", e);
                None
            }
        }
    }

    /// Override the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the endpoint base URL (for proxies and tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl TextClassifier for OpenAiClassifier {
    fn classify(&self, text: &str) -> Result<Verdict, ClassifierError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_prompt(text),
            }],
            temperature: 0.0,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClassifierError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json()?;
        let content = parsed
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| ClassifierError::MalformedResponse("no choices in reply".to_string()))?;

        parse_verdict(content)
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Deserialize)]
struct ChatReplyMessage {
    content: String,
}

/// The fixed instruction template, parameterized by one paragraph's text.
fn build_prompt(text: &str) -> String {
    format!(
        r#"너는 NHN커머스 고도몰 블로그 원고를 검수하는 어시스턴트다.

아래 문단을 보고 다음 항목들을 판단해라.
반드시 JSON 문자열만 출력하라.

규칙:
1) "b2b_as_basic":    B2B 기능이 기본 기능처럼 보이게 표현됐는지 여부.
2) "free_b2b_mix":    무료/0원 프로모션 + B2B 내용이 섞여 잘못된 뉘앙스를 주는지 여부.
3) "haedream_mislabel":  해드림을 공식 에이전시처럼 잘못 표기했는지 여부.
4) "typo_exists":     맞춤법/띄어쓰기 문제가 있는지 여부.
5) "typo_examples":   대표적 맞춤법 오류 단어 3개 이하.

출력 형식(JSON 예시):

{{
  "b2b_as_basic": false,
  "free_b2b_mix": true,
  "haedream_mislabel": false,
  "typo_exists": true,
  "typo_examples": ["예시1", "예시2"]
}}

검수할 문단:
"""{}"""
"#,
        text
    )
}

/// Parse a reply body into a verdict.
///
/// Models wrap the JSON in prose or code fences often enough that the first
/// balanced object is extracted before deserializing.
fn parse_verdict(content: &str) -> Result<Verdict, ClassifierError> {
    let json = extract_json_object(content).ok_or_else(|| {
        ClassifierError::MalformedResponse(truncate_for_log(content).to_string())
    })?;
    serde_json::from_str(json)
        .map_err(|e| ClassifierError::MalformedResponse(format!("{}: {}", e, truncate_for_log(json))))
}

/// Extract the first balanced `{...}` object from the content.
fn extract_json_object(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let mut depth = 0usize;
    for (i, ch) in content[start..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(&content[start..start + i + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

fn truncate_for_log(s: &str) -> &str {
    let mut end = s.len().min(200);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
