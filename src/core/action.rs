//! # Actions
//!
//! Everything that can happen in Consulta becomes an `Action`.
//! User presses Enter? That's `Action::SubmitInput`.
//! The routed answer arrives? That's `Action::AnswerReady(text)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` describing I/O the caller must perform
//! (spawn an intake task, spawn a query, schedule a banner clear). No I/O
//! happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: feed actions, assert on the state and the
//! returned effect, no terminal and no network required.

use std::path::PathBuf;

use log::info;

use crate::core::state::{App, Severity};
use crate::intake::IntakeError;

#[derive(Debug)]
pub enum Action {
    /// The input line was submitted. Interpreted as a document path while no
    /// document is ready, and as a question afterwards.
    SubmitInput(String),
    /// A file was dragged onto the terminal (arrives as a pasted path).
    FileDropped(PathBuf),
    /// Intake validation passed; simulated processing has begun.
    IntakeStarted { file_name: String },
    /// Simulated processing finished; the document is queryable.
    IntakeFinished { file_name: String },
    /// Validation or processing failed.
    IntakeFailed(IntakeError),
    /// The answer router produced the single assistant reply for a query.
    AnswerReady(String),
    /// A scheduled banner auto-clear fired. Ignored when stale.
    ClearStatus { seq: u64 },
    Quit,
}

/// I/O the event loop must perform after an `update()`.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnIntake(PathBuf),
    SpawnQuery(String),
    ScheduleStatusClear { seq: u64 },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SubmitInput(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Effect::None;
            }
            if !app.documents_uploaded {
                if app.is_uploading {
                    return Effect::None;
                }
                return Effect::SpawnIntake(PathBuf::from(trimmed));
            }
            if app.is_answering {
                // Send gate: a query is already in flight.
                return Effect::None;
            }
            let query = trimmed.to_string();
            app.transcript.push_user(query.clone());
            app.is_answering = true;
            Effect::SpawnQuery(query)
        }

        Action::FileDropped(path) => {
            if app.is_uploading {
                return Effect::None;
            }
            Effect::SpawnIntake(path)
        }

        Action::IntakeStarted { file_name } => {
            info!("Intake started for \"{}\"", file_name);
            app.is_uploading = true;
            app.set_status("Subiendo y procesando documento...", Severity::Info);
            Effect::None
        }

        Action::IntakeFinished { file_name } => {
            app.is_uploading = false;
            app.documents_uploaded = true;
            let seq = app.set_status(
                format!("✅ Documento \"{file_name}\" procesado exitosamente"),
                Severity::Success,
            );
            app.transcript.push_assistant(format!(
                "Perfecto! He procesado tu documento \"{file_name}\". \
                 Ahora puedes hacerme preguntas sobre su contenido."
            ));
            Effect::ScheduleStatusClear { seq }
        }

        Action::IntakeFailed(error) => {
            info!("Intake failed: {}", error);
            app.is_uploading = false;
            // Readiness granted by an earlier successful upload is not revoked.
            app.set_status(error.to_string(), Severity::Error);
            Effect::None
        }

        Action::AnswerReady(text) => {
            app.transcript.push_assistant(text);
            app.is_answering = false;
            Effect::None
        }

        Action::ClearStatus { seq } => {
            if seq == app.status_seq {
                app.status = None;
            }
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}
