//! # Answer Sources
//!
//! Where assistant replies come from. Two implementations of the
//! [`AnswerSource`] trait:
//!
//! - [`RemoteSource`]: POSTs the query to the deployed workshop endpoint.
//! - [`KeywordResponder`]: offline keyword lookup with canned responses.
//!
//! The [`AnswerRouter`] ties them together: remote first when configured,
//! falling back to the keyword responder on any remote failure.

mod fallback;
mod remote;
mod router;

pub use fallback::{FALLBACK_DELAY, KeywordResponder};
pub use remote::RemoteSource;
pub use router::{AnswerRouter, SIMULATION_MARKER};

use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while producing an answer.
#[derive(Debug, Clone)]
pub enum AnswerError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The endpoint returned a non-2xx status. The body is not inspected.
    Api { status: u16 },
    /// The response body was not the expected `{"response": ...}` JSON.
    Parse(String),
}

impl fmt::Display for AnswerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerError::Network(msg) => write!(f, "network error: {msg}"),
            AnswerError::Api { status } => write!(f, "API error (HTTP {status})"),
            AnswerError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for AnswerError {}

/// A source of assistant replies for user queries.
#[async_trait]
pub trait AnswerSource: Send + Sync {
    /// Returns the name of the source (for logging).
    fn name(&self) -> &str;

    /// Produces the reply text for one query.
    async fn answer(&self, query: &str) -> Result<String, AnswerError>;
}
