//! Upload request assembly.
//!
//! Turns a local file (path + bytes), the target server settings and a
//! description into a fully specified [`UploadRequest`]. Pure data
//! transformation: no I/O, deterministic, safe to unit test without a network.

pub mod headers;
mod url;

use std::path::Path;

use crate::description::encode_description;
use crate::file_name::{sanitize_file_name, FileNameToken};

pub use url::join_upload_url;

/// Content type sent when the file extension is unknown.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Where and how to upload: server base URL, upload path and optional token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub base_url: String,
    pub upload_path: String,
    pub token: Option<String>,
}

impl UploadTarget {
    /// The full upload URL (`base_url` + `upload_path`).
    pub fn url(&self) -> String {
        join_upload_url(&self.base_url, &self.upload_path)
    }
}

/// Local problems that stop a request from being built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The file has no content.
    #[error("file content is empty")]
    EmptyBody,
    /// The upload token holds characters that cannot go in a header.
    #[error("upload token must be visible ASCII without spaces")]
    InvalidToken,
}

/// A fully specified upload: POST `url` with `headers` and raw `body`.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub url: String,
    /// Ordered, unique header names (compare case-insensitively).
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    pub content_type: String,
    /// The sanitized name sent in `X-File-Name`.
    pub file_name: FileNameToken,
}

impl UploadRequest {
    /// Looks up a header value by name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        headers::find(&self.headers, name)
    }
}

/// Builds the upload request for `file_path` whose content is `body`.
///
/// The content type is guessed from the original file name; the header
/// filename is the sanitized token, never the original. Fails before any
/// network activity if `body` is empty or the token is not header-safe.
pub fn build_request(
    target: &UploadTarget,
    file_path: &Path,
    body: Vec<u8>,
    description: &str,
) -> Result<UploadRequest, ValidationError> {
    if body.is_empty() {
        return Err(ValidationError::EmptyBody);
    }
    let token = target.token.as_deref().filter(|t| !t.is_empty());
    if token.is_some_and(|t| !headers::is_token_safe(t)) {
        return Err(ValidationError::InvalidToken);
    }

    let original_name = file_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = sanitize_file_name(&original_name);
    let content_type = mime_guess::from_path(&original_name)
        .first_raw()
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string();
    let description = encode_description(description);
    let headers = headers::assemble(&content_type, &file_name, token, &description);

    Ok(UploadRequest {
        url: target.url(),
        headers,
        body,
        content_type,
        file_name,
    })
}
