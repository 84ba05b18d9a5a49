use std::future::Future;
use std::time::Duration;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use crate::config::settings::Config;
use crate::error::{ErrorKind, LeetError};
use crate::pipelines::extract::{parse_suggestions, AiSuggestion};
use crate::pipelines::perf;

/// Anything that can turn a prompt into candidate suggestions.
/// The HTTP client is the real one; tests plug in canned responses.
pub trait SuggestionSource {
    fn get_suggestions(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<Vec<AiSuggestion>, LeetError>>;
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize, Default)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Default)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Default)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// Client for the Gemini `generateContent` endpoint
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, LeetError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LeetError::new(
                ErrorKind::Config,
                format!("Failed to create HTTP client: {}", e),
                "gemini"
            ))?;

        Ok(GeminiClient {
            client,
            api_key: config.api_key().map(str::to_string),
            model: config.model.clone(),
            base_url: config.base_url.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url.trim_end_matches('/'), self.model)
    }

    /// Send the prompt and return the first candidate's text
    pub async fn generate_text(&self, prompt: &str) -> Result<String, LeetError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| LeetError::new(
            ErrorKind::Auth,
            "API key missing. Run `leetlog init` again",
            "gemini"
        ))?;

        let _perf = perf::PerfTimer::new("gemini_call");
        let start = std::time::Instant::now();

        let body = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| LeetError::new(
                ErrorKind::Transport,
                format!("Failed to reach Gemini API: {}", e),
                "gemini"
            ).with_context(format!("model: {}", self.model)))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| LeetError::new(
            ErrorKind::Transport,
            format!("Failed to read Gemini response: {}", e),
            "gemini"
        ))?;

        let latency_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            model = %self.model,
            status = status.as_u16(),
            latency_ms = latency_ms,
            bytes = text.len(),
            "Model call"
        );

        if !status.is_success() {
            return Err(LeetError::new(
                ErrorKind::Upstream,
                format!("Gemini API error ({})", status.as_u16()),
                "gemini"
            ).with_context(truncate(&text, 500)));
        }

        let parsed: GenerateResponse = serde_json::from_str(&text).map_err(|e| {
            LeetError::parse(format!("Invalid Gemini response JSON: {}", e), "gemini")
                .with_context(truncate(&text, 500))
        })?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| LeetError::parse("Empty AI response", "gemini"))
    }
}

impl SuggestionSource for GeminiClient {
    async fn get_suggestions(&self, prompt: &str) -> Result<Vec<AiSuggestion>, LeetError> {
        let text = self.generate_text(prompt).await?;
        tracing::debug!(raw = %truncate(&text, 2000), "Model output");
        parse_suggestions(&text)
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
