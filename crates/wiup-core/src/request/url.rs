//! Upload URL construction.

/// Joins `base_url` and `upload_path` with exactly one `/` between them.
///
/// Trailing slashes on the base and leading slashes on the path are dropped
/// before joining, so `("http://h:3000/", "upload")` and
/// `("http://h:3000", "//upload")` both give `http://h:3000/upload`.
pub fn join_upload_url(base_url: &str, upload_path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = upload_path.trim_start_matches('/');
    format!("{}/{}", base, path)
}
