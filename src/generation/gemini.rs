//! Gemini-backed quiz generator.
//!
//! Sends a single `generateContent` request asking for JSON output and
//! parses the first candidate's text as a list of [`QuizQuestion`]s. No
//! retries: the shell decides when to ask again.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use super::prompt::{quiz_prompt, DEFAULT_QUESTION_COUNT};
use crate::config::AppConfig;
use crate::error::GenerationError;
use crate::models::{PrefetchedBatch, QuizQuestion, MAX_OPTIONS};
use crate::traits::{Headers, HttpClient, QuizGenerator};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Some models wrap the array in an object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum QuizPayload {
    List(Vec<QuizQuestion>),
    Wrapped { questions: Vec<QuizQuestion> },
}

/// Parse model output into a validated batch.
///
/// Markdown code fences around the JSON are tolerated. An empty list, or any
/// record with more than [`MAX_OPTIONS`] choices or an out-of-range answer
/// index, rejects the whole batch.
pub fn parse_quiz_payload(text: &str) -> Result<PrefetchedBatch, GenerationError> {
    let payload: QuizPayload = serde_json::from_str(strip_code_fence(text))?;
    let batch = match payload {
        QuizPayload::List(list) => list,
        QuizPayload::Wrapped { questions } => questions,
    };

    if batch.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    if let Some(pos) = batch.iter().position(|q| !q.is_well_formed()) {
        return Err(GenerationError::MalformedPayload(format!(
            "question {} needs 1-{} options and a valid answer",
            pos + 1,
            MAX_OPTIONS
        )));
    }
    Ok(batch)
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Quiz generator calling the Gemini REST API.
pub struct GeminiQuizGenerator {
    http: Arc<dyn HttpClient>,
    base_url: String,
    model: String,
    api_key: String,
    question_count: usize,
}

impl GeminiQuizGenerator {
    pub fn new(
        http: Arc<dyn HttpClient>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
            question_count: DEFAULT_QUESTION_COUNT,
        }
    }

    /// Build from application config.
    pub fn from_config(http: Arc<dyn HttpClient>, config: &AppConfig) -> Self {
        Self::new(http, &config.api_base, &config.model, &config.api_key)
            .with_question_count(config.question_count)
    }

    pub fn with_question_count(mut self, count: usize) -> Self {
        self.question_count = count.max(1);
        self
    }

    /// Endpoint for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl QuizGenerator for GeminiQuizGenerator {
    async fn generate(&self, category: &str) -> Result<PrefetchedBatch, GenerationError> {
        if self.api_key.is_empty() {
            return Err(GenerationError::MissingApiKey);
        }

        let prompt = quiz_prompt(category, self.question_count);
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: &prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                temperature: 0.7,
            },
        };
        let body = serde_json::to_string(&request)?;

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("x-goog-api-key".to_string(), self.api_key.clone());

        debug!(category, model = %self.model, "requesting quiz batch");
        let response = self.http.post(&self.endpoint(), &body, &headers).await?;

        if !response.is_success() {
            return Err(GenerationError::Status {
                status: response.status,
                message: response.text_lossy(),
            });
        }

        let parsed: GenerateResponse = response.json()?;
        let text = parsed.text().ok_or(GenerationError::EmptyResponse)?;
        let batch = parse_quiz_payload(&text)?;
        debug!(category, count = batch.len(), "quiz batch parsed");
        Ok(batch)
    }
}
