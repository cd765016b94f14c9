//! Map curl errors and HTTP status codes onto upload failures.

use std::time::Duration;

use super::error::UploadError;

/// Classify a curl error raised while sending an upload.
///
/// `status_seen` is the HTTP status libcurl had already parsed when the
/// error hit (0 if none). Timeouts are checked first so a slow connect is
/// reported as a timeout rather than as an unreachable host. A transport
/// failure after a status line arrived is not `Unreachable`: the server was
/// reached and the response got cut off.
pub fn classify_curl_error(e: &curl::Error, status_seen: u32, timeout: Duration) -> UploadError {
    if e.is_operation_timedout() {
        return UploadError::TimedOut { timeout };
    }
    let transport = e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_send_error()
        || e.is_recv_error()
        || e.is_got_nothing();
    if transport && status_seen == 0 {
        return UploadError::Unreachable {
            reason: describe(e),
        };
    }
    if status_seen != 0 {
        return UploadError::unclassified(format!(
            "response cut off after HTTP {}: {}",
            status_seen,
            describe(e)
        ));
    }
    UploadError::unclassified(describe(e))
}

/// Returns `Err(ServerRejected)` for any status outside 200..=299.
pub fn check_status(status: u32, body: &str) -> Result<(), UploadError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(UploadError::ServerRejected {
            status,
            body: body.to_string(),
        })
    }
}

fn describe(e: &curl::Error) -> String {
    match e.extra_description() {
        Some(extra) => format!("{} ({})", e.description(), extra),
        None => e.description().to_string(),
    }
}
