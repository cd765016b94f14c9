//! Upload failure taxonomy.

use std::path::PathBuf;
use std::time::Duration;

use crate::request::ValidationError;

/// Why an upload attempt did not succeed.
///
/// Each variant calls for a different remediation, so they are kept apart
/// rather than collapsed into a generic transport error.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The local file does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    /// The request could not be built (empty content, bad token).
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The server answered with a non-2xx status.
    #[error("server rejected upload: HTTP {status}")]
    ServerRejected { status: u32, body: String },
    /// The server could not be reached (DNS, refused, reset before a response).
    #[error("server unreachable: {reason}")]
    Unreachable { reason: String },
    /// No response arrived within the timeout.
    #[error("no response within {}s", .timeout.as_secs_f64())]
    TimedOut { timeout: Duration },
    /// Anything else: malformed response, local I/O failure, bad URL.
    #[error("{detail}")]
    Unclassified { detail: String },
}

/// Coarse failure class of an [`UploadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Missing,
    Validation,
    ServerRejected,
    Unreachable,
    TimedOut,
    Unclassified,
}

impl UploadError {
    pub fn kind(&self) -> FailureKind {
        match self {
            UploadError::FileNotFound(_) => FailureKind::Missing,
            UploadError::Validation(_) => FailureKind::Validation,
            UploadError::ServerRejected { .. } => FailureKind::ServerRejected,
            UploadError::Unreachable { .. } => FailureKind::Unreachable,
            UploadError::TimedOut { .. } => FailureKind::TimedOut,
            UploadError::Unclassified { .. } => FailureKind::Unclassified,
        }
    }

    pub(crate) fn unclassified(detail: impl Into<String>) -> Self {
        UploadError::Unclassified {
            detail: detail.into(),
        }
    }
}
