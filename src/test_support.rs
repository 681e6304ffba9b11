//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::answer::{AnswerError, AnswerSource};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;

/// An answer source that always returns the same text.
pub struct CannedSource {
    text: String,
}

impl CannedSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl AnswerSource for CannedSource {
    fn name(&self) -> &str {
        "canned"
    }

    async fn answer(&self, _query: &str) -> Result<String, AnswerError> {
        Ok(self.text.clone())
    }
}

/// An answer source that always fails with the given error.
pub struct FailingSource {
    error: AnswerError,
}

impl FailingSource {
    pub fn new(error: AnswerError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl AnswerSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn answer(&self, _query: &str) -> Result<String, AnswerError> {
        Err(self.error.clone())
    }
}

/// Offline config with the workshop placeholders.
pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        query_endpoint: "https://example.com/prod/query".to_string(),
        upload_bucket: "rag-workshop-test-docs".to_string(),
        use_remote: false,
    }
}

/// Creates a fresh App in its pre-upload state.
pub fn test_app() -> App {
    App::new(test_config())
}

/// Creates an App with a document already processed, ready for questions.
pub fn ready_app() -> App {
    let mut app = test_app();
    app.documents_uploaded = true;
    app
}
