use crate::error::ClientError;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Seam to the external text-generation service.
///
/// Implementations take a system instruction plus a prompt and return
/// the raw structured-JSON reply; parsing and the failure policy live
/// in the analyzer, so test doubles only have to script strings.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate(&self, system_instruction: &str, prompt: &str)
    -> Result<String, ClientError>;
}

/// Client for the Gemini `generateContent` REST surface, configured
/// for structured JSON output.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            model: model.into(),
        })
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(
        &self,
        system_instruction: &str,
        prompt: &str,
    ) -> Result<String, ClientError> {
        let url = format!("{}/{}:generateContent", API_BASE, self.model);

        let body = serde_json::json!({
            "systemInstruction": {"parts": [{"text": system_instruction}]},
            "contents": [{"parts": [{"text": prompt}]}],
            "generationConfig": {
                // Low temperature for deterministic code generation
                "temperature": 0.2,
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
            }
        });

        tracing::debug!("Requesting analysis from model {}", self.model);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let reply: GenerateResponse = response.json().await?;
        let text = reply
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().map(|p| p.text).collect::<String>())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ClientError::EmptyResponse);
        }

        Ok(text)
    }
}

/// Schema the service must fill: summary, error analysis, and one
/// reproduction-code string per target language, all required.
fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "A concise, plain English description of what the user did.",
            },
            "errorAnalysis": {
                "type": "STRING",
                "description": "If failed (4xx/5xx), explain why and how to fix. If successful, return empty string.",
            },
            "pythonCode": {"type": "STRING", "description": "Python reproduction code"},
            "typescriptCode": {"type": "STRING", "description": "TypeScript reproduction code"},
            "goCode": {"type": "STRING", "description": "Go reproduction code"},
            "rustCode": {"type": "STRING", "description": "Rust reproduction code"},
            "phpCode": {"type": "STRING", "description": "PHP reproduction code"},
        },
        "required": [
            "summary",
            "errorAnalysis",
            "pythonCode",
            "typescriptCode",
            "goCode",
            "rustCode",
            "phpCode"
        ],
    })
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}
