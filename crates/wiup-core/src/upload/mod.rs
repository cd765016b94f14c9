//! Upload execution and outcome classification.
//!
//! Sends a built [`UploadRequest`] as a single POST through libcurl (via the
//! `curl` crate), bounded by a timeout, and maps the result onto
//! [`UploadSuccess`] or one of the [`UploadError`] classes. There are no
//! retries; one call is one attempt.

mod classify;
mod error;
mod file;
mod wire;

use std::time::Duration;

use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::file_name::FileNameToken;
use crate::request::UploadRequest;
use wire::HeaderLines;

pub use classify::{check_status, classify_curl_error};
pub use error::{FailureKind, UploadError};
pub use file::{read_payload, upload_file, upload_file_async};

/// Default time to wait for the server to answer.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

/// A 2xx answer from the upload server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSuccess {
    pub status: u32,
    /// Response body decoded as UTF-8, invalid sequences replaced.
    pub body: String,
    /// The value that was sent in `X-File-Name`.
    pub file_name: FileNameToken,
}

/// Result of one upload attempt.
pub type UploadOutcome = Result<UploadSuccess, UploadError>;

/// Blocking upload client with a whole-request timeout.
#[derive(Debug, Clone, Copy)]
pub struct UploadClient {
    timeout: Duration,
}

impl Default for UploadClient {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl UploadClient {
    /// A zero timeout is raised to one millisecond (curl treats zero as "never").
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout: timeout.max(Duration::from_millis(1)),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends `request` and classifies the outcome.
    ///
    /// Runs in the current thread. The connection is released when this
    /// returns, including on timeout.
    pub fn send(&self, request: &UploadRequest) -> UploadOutcome {
        tracing::debug!(
            url = %request.url,
            file_name = %request.file_name,
            content_type = %request.content_type,
            bytes = request.body.len(),
            "sending upload"
        );

        let lines = header_lines(request)?;
        let (status, raw_body) = self.perform(request, &lines).map_err(|failed| {
            let err = classify_curl_error(&failed.error, failed.status_seen, self.timeout);
            tracing::warn!(
                url = %request.url,
                kind = ?err.kind(),
                status_seen = failed.status_seen,
                "upload failed: {}",
                failed.error
            );
            err
        })?;
        if status == 0 {
            return Err(UploadError::unclassified("response carried no HTTP status"));
        }

        let body = String::from_utf8_lossy(&raw_body).into_owned();
        if let Err(err) = check_status(status, &body) {
            tracing::warn!(url = %request.url, status, "server rejected upload");
            return Err(err);
        }

        tracing::info!(url = %request.url, status, file_name = %request.file_name, "upload accepted");
        Ok(UploadSuccess {
            status,
            body,
            file_name: request.file_name.clone(),
        })
    }

    /// Runs [`send`](Self::send) on the tokio blocking pool.
    pub async fn send_async(&self, request: UploadRequest) -> UploadOutcome {
        let client = *self;
        tokio::task::spawn_blocking(move || client.send(&request))
            .await
            .unwrap_or_else(|e| Err(UploadError::unclassified(format!("upload task failed: {}", e))))
    }

    fn perform(
        &self,
        request: &UploadRequest,
        lines: &HeaderLines,
    ) -> Result<(u32, Vec<u8>), TransferError> {
        let mut response = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(&request.url)?;
        easy.post(true)?;
        easy.post_fields_copy(&request.body)?;
        easy.follow_location(false)?;
        easy.timeout(self.timeout)?;
        lines.attach(&easy)?;

        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                response.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()
        };
        if let Err(error) = performed {
            let status_seen = easy.response_code().unwrap_or(0);
            return Err(TransferError { error, status_seen });
        }

        let status = easy.response_code()?;
        Ok((status, response))
    }
}

/// A failed transfer plus the HTTP status libcurl had parsed before failing.
struct TransferError {
    error: curl::Error,
    status_seen: u32,
}

impl From<curl::Error> for TransferError {
    fn from(error: curl::Error) -> Self {
        Self {
            error,
            status_seen: 0,
        }
    }
}

/// Encodes the request headers for libcurl, values as Latin-1 bytes.
fn header_lines(request: &UploadRequest) -> Result<HeaderLines, UploadError> {
    let mut lines = HeaderLines::new();
    for (name, value) in &request.headers {
        let line = wire::header_line(name, value).ok_or_else(|| {
            UploadError::unclassified(format!("header {} is not Latin-1 text", name))
        })?;
        lines
            .push(&line)
            .map_err(|e| UploadError::unclassified(format!("header {}: {}", name, e)))?;
    }
    // Send the body immediately instead of waiting on 100-continue.
    lines
        .push(b"Expect:")
        .map_err(|e| UploadError::unclassified(format!("header Expect: {}", e)))?;
    Ok(lines)
}
