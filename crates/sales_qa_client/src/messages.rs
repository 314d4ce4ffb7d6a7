//! JSON wire types for the backend's `POST /query` endpoint.

use serde::{Deserialize, Serialize};

/// Client → backend: query body. Built fresh for each submission.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest<'a> {
    pub question: &'a str,
}

impl<'a> QueryRequest<'a> {
    pub fn new(question: &'a str) -> Self {
        Self { question }
    }
}

/// Backend → client: successful (2xx) response body.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
}

/// Extract the error detail from a non-2xx response body.
///
/// The backend reports failures as `{"detail": "<string>"}`, but `detail` may
/// also be a structured value, or absent entirely. A string detail is used
/// verbatim; anything else is serialized compactly so the user still sees the
/// full diagnostic.
pub fn error_detail(body: &serde_json::Value) -> String {
    match body.get("detail") {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => body.to_string(),
    }
}
