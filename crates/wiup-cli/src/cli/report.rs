//! Outcome display and exit codes.

use std::time::Duration;
use wiup_core::upload::{FailureKind, UploadError, UploadOutcome};

pub const EXIT_OK: i32 = 0;
/// No file selected, or the given path does not exist.
pub const EXIT_NO_FILE: i32 = 1;
/// The server answered with a non-2xx status.
pub const EXIT_REJECTED: i32 = 2;
/// Connection, DNS or timeout failure.
pub const EXIT_NETWORK: i32 = 3;
pub const EXIT_UNCLASSIFIED: i32 = 4;

pub fn exit_code(kind: FailureKind) -> i32 {
    match kind {
        FailureKind::Missing => EXIT_NO_FILE,
        FailureKind::ServerRejected => EXIT_REJECTED,
        FailureKind::Unreachable | FailureKind::TimedOut => EXIT_NETWORK,
        FailureKind::Validation | FailureKind::Unclassified => EXIT_UNCLASSIFIED,
    }
}

/// Print the outcome for the operator and return the exit code.
pub fn print_outcome(outcome: &UploadOutcome, timeout: Duration) -> i32 {
    let err = match outcome {
        Ok(success) => {
            println!("HTTP {}", success.status);
            println!("Header file name: {}", success.file_name);
            println!("{}", pretty_body(&success.body));
            return EXIT_OK;
        }
        Err(err) => err,
    };

    match err {
        UploadError::FileNotFound(path) => {
            println!("No file to upload at {}; check the --file path.", path.display());
        }
        UploadError::ServerRejected { status, body } => {
            println!("Upload failed: HTTP {}", status);
            println!("{}", body);
        }
        UploadError::Unreachable { reason } => {
            println!("Connection failed: {}", reason);
        }
        UploadError::TimedOut { .. } => {
            println!("Connection timed out after {}s.", timeout.as_secs());
            println!("Hint: raise --timeout (e.g. 60 or 120) and check the server port and firewall.");
        }
        UploadError::Validation(_) | UploadError::Unclassified { .. } => {
            println!("Upload error: {}", err);
        }
    }
    tracing::error!(kind = ?err.kind(), "upload did not succeed: {}", err);
    exit_code(err.kind())
}

/// Pretty-print `body` as JSON when it parses, otherwise return it unchanged.
pub fn pretty_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| serde_json::to_string_pretty(&v).ok())
        .unwrap_or_else(|| body.to_string())
}
