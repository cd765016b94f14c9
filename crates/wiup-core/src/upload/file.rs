//! Local file reading and the read → build → send pipeline.

use std::io;
use std::path::Path;
use std::time::Duration;

use super::{UploadClient, UploadError, UploadOutcome};
use crate::checksum;
use crate::request::{build_request, UploadRequest, UploadTarget};

/// Reads the whole file at `path` as the upload payload.
///
/// A missing path (or one that is not a regular file) is `FileNotFound`;
/// any other read failure is `Unclassified`.
pub fn read_payload(path: &Path) -> Result<Vec<u8>, UploadError> {
    if !path.is_file() {
        return Err(UploadError::FileNotFound(path.to_path_buf()));
    }
    std::fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => UploadError::FileNotFound(path.to_path_buf()),
        _ => UploadError::unclassified(format!("read {}: {}", path.display(), e)),
    })
}

/// Uploads the file at `path` to `target` in one blocking attempt.
pub fn upload_file(
    target: &UploadTarget,
    path: &Path,
    description: &str,
    timeout: Duration,
) -> UploadOutcome {
    let request = prepare(target, path, description)?;
    UploadClient::new(timeout).send(&request)
}

/// Async form of [`upload_file`]. Reading and building run inline; the
/// transfer runs on the tokio blocking pool.
pub async fn upload_file_async(
    target: &UploadTarget,
    path: &Path,
    description: &str,
    timeout: Duration,
) -> UploadOutcome {
    let request = prepare(target, path, description)?;
    UploadClient::new(timeout).send_async(request).await
}

fn prepare(
    target: &UploadTarget,
    path: &Path,
    description: &str,
) -> Result<UploadRequest, UploadError> {
    let payload = read_payload(path)?;
    tracing::debug!(
        path = %path.display(),
        bytes = payload.len(),
        sha256 = %checksum::sha256_hex(&payload),
        "read payload"
    );
    Ok(build_request(target, path, payload, description)?)
}
