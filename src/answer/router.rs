//! Remote-with-fallback routing.
//!
//! Every routed query produces exactly one reply string, whatever fails
//! along the way:
//!
//! ```text
//! use_remote?
//!   no  → fallback                       (no marker)
//!   yes → remote
//!           ok   → remote answer verbatim
//!           err  → fallback, prefixed "[Modo simulación] "
//!                    err → "Error: <original remote error>"
//! ```
//!
//! The marker flags an unexpected degradation from remote to simulated; a
//! deliberately offline configuration answers unmarked.

use std::sync::Arc;

use log::{info, warn};

use crate::answer::{AnswerSource, KeywordResponder, RemoteSource};
use crate::core::config::ResolvedConfig;

/// Visible prefix on fallback answers produced after a remote failure.
pub const SIMULATION_MARKER: &str = "[Modo simulación] ";

pub struct AnswerRouter {
    remote: Option<Arc<dyn AnswerSource>>,
    fallback: Arc<dyn AnswerSource>,
}

impl AnswerRouter {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let remote: Option<Arc<dyn AnswerSource>> = config
            .use_remote
            .then(|| Arc::new(RemoteSource::new(config.query_endpoint.clone())) as _);
        Self {
            remote,
            fallback: Arc::new(KeywordResponder::new()),
        }
    }

    /// Test seam: explicit sources instead of config-built ones.
    pub fn with_sources(
        remote: Option<Arc<dyn AnswerSource>>,
        fallback: Arc<dyn AnswerSource>,
    ) -> Self {
        Self { remote, fallback }
    }

    /// Routes one query to exactly one reply string. Infallible by design:
    /// every failure mode collapses into reply text.
    pub async fn route(&self, query: &str) -> String {
        let Some(remote) = &self.remote else {
            info!("Offline mode, answering from {}", self.fallback.name());
            return match self.fallback.answer(query).await {
                Ok(text) => text,
                Err(e) => format!("Error: {e}"),
            };
        };

        match remote.answer(query).await {
            Ok(text) => text,
            Err(remote_err) => {
                warn!("Remote failed ({}), falling back to simulation", remote_err);
                match self.fallback.answer(query).await {
                    Ok(text) => format!("{SIMULATION_MARKER}{text}"),
                    Err(fallback_err) => {
                        warn!("Fallback also failed: {}", fallback_err);
                        // Surface the original remote error, not the fallback's.
                        format!("Error: {remote_err}")
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::AnswerError;
    use crate::test_support::{CannedSource, FailingSource};
    use std::time::Duration;

    fn canned(text: &str) -> Arc<dyn AnswerSource> {
        Arc::new(CannedSource::new(text))
    }

    #[tokio::test]
    async fn test_offline_routes_to_fallback_without_marker() {
        let router = AnswerRouter::with_sources(None, canned("local"));
        assert_eq!(router.route("hola").await, "local");
    }

    #[tokio::test]
    async fn test_remote_success_is_verbatim() {
        let router = AnswerRouter::with_sources(Some(canned("del servidor")), canned("local"));
        assert_eq!(router.route("hola").await, "del servidor");
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back_with_marker() {
        let remote: Arc<dyn AnswerSource> =
            Arc::new(FailingSource::new(AnswerError::Api { status: 502 }));
        let router = AnswerRouter::with_sources(Some(remote), canned("local"));
        assert_eq!(
            router.route("hola").await,
            format!("{SIMULATION_MARKER}local")
        );
    }

    #[tokio::test]
    async fn test_double_failure_surfaces_original_remote_error() {
        let remote: Arc<dyn AnswerSource> = Arc::new(FailingSource::new(AnswerError::Network(
            "connection refused".into(),
        )));
        let fallback: Arc<dyn AnswerSource> =
            Arc::new(FailingSource::new(AnswerError::Parse("bad".into())));
        let router = AnswerRouter::with_sources(Some(remote), fallback);
        assert_eq!(
            router.route("hola").await,
            "Error: network error: connection refused"
        );
    }

    #[tokio::test]
    async fn test_remote_failure_reaches_keyword_table() {
        // End-to-end through the real responder: remote down, keyword query.
        let remote: Arc<dyn AnswerSource> =
            Arc::new(FailingSource::new(AnswerError::Network("down".into())));
        let fallback: Arc<dyn AnswerSource> =
            Arc::new(KeywordResponder::with_delay(Duration::ZERO));
        let router = AnswerRouter::with_sources(Some(remote), fallback);

        let reply = router.route("¿Cuántos días de vacaciones tengo?").await;
        assert!(reply.starts_with(SIMULATION_MARKER));
        assert!(reply.contains("15 días hábiles de vacaciones"));
    }
}
