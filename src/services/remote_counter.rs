use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use crate::error::{AnalysisError, Result};
use crate::models::{AnalysisKind, AnalyzeBody, LetterCounts};
use crate::services::counter::Counter;

/// Route prefix of the counting endpoints; the kind is appended
pub const ANALYZE_PATH: &str = "/api/text-analyzer/analyze";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Where the counting service lives and how long to wait for it
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Counts letters by POSTing the text to the counting service
pub struct RemoteCounter {
    base_url: String,
    http: reqwest::Client,
}

impl RemoteCounter {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(AnalysisError::InvalidEndpoint(format!(
                "base url must start with http:// or https://, got: {}",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AnalysisError::InvalidEndpoint(format!("Failed to build HTTP client: {}", e)))?;

        Ok(RemoteCounter { base_url, http })
    }

    pub fn endpoint(&self, kind: AnalysisKind) -> String {
        format!("{}{}/{}", self.base_url, ANALYZE_PATH, kind.as_str())
    }
}

/// Read a letter -> count JSON object, keeping the key order of the body
pub fn parse_counts(body: &Value) -> Result<LetterCounts> {
    let map = body
        .as_object()
        .ok_or_else(|| AnalysisError::MalformedResponse(format!("expected a JSON object, got: {}", body)))?;

    let mut counts = LetterCounts::new();
    for (key, value) in map {
        let mut chars = key.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(AnalysisError::MalformedResponse(format!(
                    "key '{}' is not a single letter",
                    key
                )))
            }
        };
        let count = value
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| {
                AnalysisError::MalformedResponse(format!(
                    "count for '{}' is not a non-negative integer: {}",
                    key, value
                ))
            })?;
        counts.push(letter, count);
    }
    Ok(counts)
}

#[async_trait]
impl Counter for RemoteCounter {
    async fn count(&self, text: &str, kind: AnalysisKind) -> Result<LetterCounts> {
        let url = self.endpoint(kind);
        debug!("Requesting {} count from {}", kind, url);

        let response = self
            .http
            .post(&url)
            .json(&AnalyzeBody { text: text.to_string() })
            .send()
            .await
            .map_err(|e| AnalysisError::RemoteUnavailable(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::RemoteUnavailable(format!(
                "HTTP {} {} from {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
                url
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AnalysisError::RemoteUnavailable(format!("failed to read body from {}: {}", url, e)))?;
        let body: Value = serde_json::from_slice(&bytes)
            .map_err(|e| AnalysisError::MalformedResponse(format!("invalid JSON: {}", e)))?;

        let counts = parse_counts(&body)?;
        debug!("Received {} letter counts from {}", counts.len(), url);
        Ok(counts)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
