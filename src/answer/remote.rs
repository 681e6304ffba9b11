//! Remote answer source: one JSON POST against the workshop's query endpoint.
//!
//! Wire contract (see the deployed query handler): request body
//! `{"query": <string>}`, success body `{"query", "response", "sources"}`.
//! Only `response` is consumed. Any non-2xx status is an opaque failure;
//! the body is not inspected further. No retries, no explicit timeout —
//! the transport default applies.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::answer::{AnswerError, AnswerSource};

#[derive(Serialize, Debug)]
struct QueryRequest<'a> {
    query: &'a str,
}

#[derive(Deserialize, Debug)]
struct QueryResponse {
    response: String,
}

pub struct RemoteSource {
    endpoint: String,
    client: reqwest::Client,
}

impl RemoteSource {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AnswerSource for RemoteSource {
    fn name(&self) -> &str {
        "remote"
    }

    async fn answer(&self, query: &str) -> Result<String, AnswerError> {
        debug!("POST {} query={:?}", self.endpoint, query);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&QueryRequest { query })
            .send()
            .await
            .map_err(|e| {
                warn!("Remote query failed to send: {}", e);
                AnswerError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Remote query returned HTTP {}", status.as_u16());
            return Err(AnswerError::Api {
                status: status.as_u16(),
            });
        }

        let body: QueryResponse = response
            .json()
            .await
            .map_err(|e| AnswerError::Parse(e.to_string()))?;

        info!("Remote answer received ({} bytes)", body.response.len());
        Ok(body.response)
    }
}
