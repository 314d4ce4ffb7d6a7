//! Session state for one running UI instance: the current question, the
//! current answer, and the in-flight flag.

use crate::client::Client;

/// In-memory state behind the question form. Not persisted; lives for the
/// duration of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub question: String,
    pub answer: String,
    pub is_submitting: bool,
}

impl Session {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: String::new(),
            is_submitting: false,
        }
    }

    /// Perform one question → answer exchange and record the outcome.
    ///
    /// The answer is cleared when the submission starts and set exactly once
    /// when it completes: either the backend's answer or the diagnostic string
    /// from [`QueryError`](crate::QueryError). `is_submitting` is true for the
    /// duration of the round trip and reset on every exit path. A second
    /// submit while one is in flight is not prevented here; the UI is expected
    /// to disable its trigger while `is_submitting` is set.
    pub async fn submit(&mut self, client: &Client) {
        self.is_submitting = true;
        self.answer.clear();

        let outcome = client.query(&self.question).await;

        self.answer = match outcome {
            Ok(answer) => answer,
            Err(e) => e.to_string(),
        };
        self.is_submitting = false;
    }
}
