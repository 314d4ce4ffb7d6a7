//! HTTP client: one `POST /query` round trip against the backend.

use crate::messages::{self, AnswerResponse, QueryRequest};

/// Query error, displayed verbatim as the answer text.
///
/// `Transport` covers failures before a structured response is obtained
/// (connection refused, timeout, non-JSON body). `Backend` covers a received
/// JSON response with a non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    Transport(String),
    Backend(String),
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::Transport(detail) => write!(f, "Request failed: {}", detail),
            QueryError::Backend(detail) => write!(f, "Error: {}", detail),
        }
    }
}

impl std::error::Error for QueryError {}

impl From<reqwest::Error> for QueryError {
    fn from(e: reqwest::Error) -> Self {
        QueryError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(e: serde_json::Error) -> Self {
        QueryError::Transport(e.to_string())
    }
}

/// HTTP client bound to a backend base address (e.g. `http://127.0.0.1:8000`).
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one question and return the backend's answer.
    ///
    /// Empty questions are forwarded as-is; the backend decides whether to
    /// accept them. No retries, no timeout beyond the transport's own.
    pub async fn query(&self, question: &str) -> Result<String, QueryError> {
        let url = format!("{}/query", self.base_url.trim_end_matches('/'));
        let response = self
            .http
            .post(url)
            .json(&QueryRequest::new(question))
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let body: serde_json::Value = serde_json::from_str(&text)?;

        if !status.is_success() {
            return Err(QueryError::Backend(messages::error_detail(&body)));
        }

        let parsed: AnswerResponse = serde_json::from_value(body)?;
        Ok(parsed.answer)
    }
}
