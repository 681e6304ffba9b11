//! # Application State
//!
//! Core business state for Consulta. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── config: ResolvedConfig        // endpoint, bucket, remote flag
//! ├── documents_uploaded: bool      // a document finished processing
//! ├── transcript: Transcript        // append-only chat history
//! ├── status: Option<StatusBanner>  // single transient banner
//! ├── status_seq: u64               // banner generation counter
//! ├── is_uploading: bool            // intake in flight
//! └── is_answering: bool            // query in flight (send gate)
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::config::ResolvedConfig;
use crate::core::transcript::Transcript;

/// How long a success banner stays on screen before it clears itself.
pub const SUCCESS_BANNER_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
    Success,
}

/// The single current status banner. A new banner replaces the old one;
/// only `Success` banners self-clear (see the banner sequence in `App`).
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBanner {
    pub message: String,
    pub severity: Severity,
}

pub struct App {
    pub config: ResolvedConfig,
    pub documents_uploaded: bool,
    pub transcript: Transcript,
    pub status: Option<StatusBanner>,
    /// Bumped on every banner change. A scheduled auto-clear carries the
    /// sequence it was created for; stale clears are dropped, so a timer
    /// from an old banner can never wipe a newer one.
    pub status_seq: u64,
    pub is_uploading: bool,
    pub is_answering: bool,
}

impl App {
    pub fn new(config: ResolvedConfig) -> Self {
        Self {
            config,
            documents_uploaded: false,
            transcript: Transcript::new(),
            status: Some(StatusBanner {
                message: String::from("Sube un documento para comenzar"),
                severity: Severity::Info,
            }),
            status_seq: 0,
            is_uploading: false,
            is_answering: false,
        }
    }

    /// Questions can be sent only after a document is ready and no answer is
    /// already in flight. This is the UI-level send gate; the remote service
    /// does not enforce it.
    pub fn query_enabled(&self) -> bool {
        self.documents_uploaded && !self.is_answering
    }

    /// Replaces the current banner and bumps the sequence counter.
    /// Returns the new sequence so callers can schedule a matching clear.
    pub fn set_status(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.status = Some(StatusBanner {
            message: message.into(),
            severity,
        });
        self.status_seq += 1;
        self.status_seq
    }
}

#[cfg(test)]
mod tests {
    use crate::core::state::Severity;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(!app.documents_uploaded);
        assert!(!app.is_uploading);
        assert!(!app.is_answering);
        assert!(!app.query_enabled());
        assert!(app.transcript.is_empty());
        let banner = app.status.as_ref().expect("initial banner");
        assert_eq!(banner.message, "Sube un documento para comenzar");
        assert_eq!(banner.severity, Severity::Info);
    }

    #[test]
    fn test_set_status_replaces_and_bumps_seq() {
        let mut app = test_app();
        let first = app.set_status("uno", Severity::Info);
        let second = app.set_status("dos", Severity::Error);
        assert!(second > first);
        assert_eq!(app.status.as_ref().unwrap().message, "dos");
    }

    #[test]
    fn test_query_enabled_requires_document_and_idle() {
        let mut app = test_app();
        app.documents_uploaded = true;
        assert!(app.query_enabled());
        app.is_answering = true;
        assert!(!app.query_enabled());
    }
}
