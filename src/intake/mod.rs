//! # Document Intake
//!
//! Accepts a candidate document, validates it, and runs the workshop's
//! simulated processing step. The real pipeline (S3 upload, chunking,
//! embedding) lives in the deployed stack; here success is assumed after a
//! fixed delay, which is exactly what the workshop demonstrates.
//!
//! Validation is pure (`validate`) and fails fast with no side effects; the
//! async step sits behind the [`DocumentIntake`] trait so the controller can
//! be tested without touching the filesystem or the clock.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};

/// Upload limit from the workshop handout: 10 MiB.
pub const MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;

/// How long the simulated upload-and-process step takes.
pub const SIMULATED_PROCESSING: Duration = Duration::from_secs(2);

/// Errors surfaced to the status banner. Display strings are the
/// user-facing Spanish messages from the workshop UI.
#[derive(Debug)]
pub enum IntakeError {
    /// Not a PDF or TXT file.
    UnsupportedType,
    /// Larger than [`MAX_DOCUMENT_BYTES`].
    TooLarge,
    /// The path does not point to a regular file.
    NotFound(PathBuf),
    /// Filesystem error while inspecting the candidate.
    Io(String),
}

impl fmt::Display for IntakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeError::UnsupportedType => {
                write!(f, "Por favor selecciona un archivo PDF o TXT")
            }
            IntakeError::TooLarge => {
                write!(f, "El archivo es demasiado grande. Máximo 10MB")
            }
            IntakeError::NotFound(path) => {
                write!(f, "No se encontró el archivo \"{}\"", path.display())
            }
            IntakeError::Io(msg) => write!(f, "Error procesando documento: {msg}"),
        }
    }
}

impl std::error::Error for IntakeError {}

/// A file offered for intake, reduced to what validation needs.
#[derive(Debug, Clone)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
}

impl CandidateFile {
    /// Stats the path and builds a candidate. Does not read the file.
    pub fn from_path(path: &Path) -> Result<Self, IntakeError> {
        let metadata = match std::fs::metadata(path) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(IntakeError::NotFound(path.to_path_buf()));
            }
            Err(e) => return Err(IntakeError::Io(e.to_string())),
        };
        if !metadata.is_file() {
            return Err(IntakeError::NotFound(path.to_path_buf()));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self {
            path: path.to_path_buf(),
            name,
            size: metadata.len(),
        })
    }
}

/// Fail-fast validation: type first, then size, matching the original's
/// check order. The terminal has no MIME types, so `.pdf`/`.txt` extensions
/// stand in for `application/pdf`/`text/plain`.
pub fn validate(name: &str, size: u64) -> Result<(), IntakeError> {
    let lower = name.to_lowercase();
    if !lower.ends_with(".pdf") && !lower.ends_with(".txt") {
        return Err(IntakeError::UnsupportedType);
    }
    if size > MAX_DOCUMENT_BYTES {
        return Err(IntakeError::TooLarge);
    }
    debug!("Validated \"{}\" ({} bytes)", name, size);
    Ok(())
}

/// Capability seam for the processing step, so tests can swap the delay out.
#[async_trait]
pub trait DocumentIntake: Send + Sync {
    /// Processes an already-validated candidate into a queryable state.
    async fn process(&self, file: &CandidateFile) -> Result<(), IntakeError>;
}

/// Workshop intake: sleeps for a fixed interval and succeeds. The simulation
/// itself has no failure path; only the surrounding calls can error.
pub struct SimulatedIntake {
    delay: Duration,
}

impl SimulatedIntake {
    pub fn new() -> Self {
        Self {
            delay: SIMULATED_PROCESSING,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedIntake {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentIntake for SimulatedIntake {
    async fn process(&self, file: &CandidateFile) -> Result<(), IntakeError> {
        info!(
            "Simulating upload of {} ({} bytes)",
            file.path.display(),
            file.size
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_pdf_and_txt() {
        assert!(validate("manual.pdf", 1024).is_ok());
        assert!(validate("notas.txt", 1024).is_ok());
        assert!(validate("POLITICAS.PDF", 1024).is_ok(), "extension match is case-insensitive");
    }

    #[test]
    fn test_validate_rejects_other_types() {
        for name in ["informe.docx", "datos.csv", "imagen.png", "sin_extension"] {
            assert!(
                matches!(validate(name, 1024), Err(IntakeError::UnsupportedType)),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_rejects_oversized_files() {
        assert!(validate("grande.pdf", MAX_DOCUMENT_BYTES).is_ok(), "limit is inclusive");
        assert!(matches!(
            validate("grande.pdf", MAX_DOCUMENT_BYTES + 1),
            Err(IntakeError::TooLarge)
        ));
    }

    #[test]
    fn test_type_check_runs_before_size_check() {
        // An oversized file of the wrong type reports the type error,
        // matching the original's check order.
        assert!(matches!(
            validate("grande.docx", MAX_DOCUMENT_BYTES + 1),
            Err(IntakeError::UnsupportedType)
        ));
    }

    #[test]
    fn test_error_messages_are_the_workshop_strings() {
        assert_eq!(
            IntakeError::UnsupportedType.to_string(),
            "Por favor selecciona un archivo PDF o TXT"
        );
        assert_eq!(
            IntakeError::TooLarge.to_string(),
            "El archivo es demasiado grande. Máximo 10MB"
        );
    }

    #[test]
    fn test_candidate_from_missing_path() {
        let result = CandidateFile::from_path(Path::new("/no/existe/manual.pdf"));
        assert!(matches!(result, Err(IntakeError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_simulated_intake_succeeds() {
        let intake = SimulatedIntake::with_delay(Duration::ZERO);
        let file = CandidateFile {
            path: PathBuf::from("manual.pdf"),
            name: "manual.pdf".to_string(),
            size: 42,
        };
        assert!(intake.process(&file).await.is_ok());
    }
}
