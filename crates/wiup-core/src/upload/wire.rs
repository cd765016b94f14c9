//! Header lines handed to libcurl as raw bytes.
//!
//! `curl::easy::List` only takes `&str`, which would put a Latin-1 value such
//! as `café` on the wire as UTF-8. Here each char of a header value becomes
//! exactly one byte, the way HTTP/1.1 receivers decode field values.

use std::ffi::CString;
use std::ptr;

/// Owned `curl_slist` of header lines.
pub(super) struct HeaderLines {
    raw: *mut curl_sys::curl_slist,
}

impl HeaderLines {
    pub(super) fn new() -> Self {
        Self {
            raw: ptr::null_mut(),
        }
    }

    pub(super) fn push(&mut self, line: &[u8]) -> Result<(), curl::Error> {
        let line = CString::new(line)
            .map_err(|_| curl::Error::new(curl_sys::CURLE_BAD_FUNCTION_ARGUMENT))?;
        // curl_slist_append copies the string; `line` may be dropped afterwards.
        let raw = unsafe { curl_sys::curl_slist_append(self.raw, line.as_ptr()) };
        if raw.is_null() {
            return Err(curl::Error::new(curl_sys::CURLE_OUT_OF_MEMORY));
        }
        self.raw = raw;
        Ok(())
    }

    /// Installs the list as `CURLOPT_HTTPHEADER`. The list must outlive every
    /// transfer performed on `easy`.
    pub(super) fn attach(&self, easy: &curl::easy::Easy) -> Result<(), curl::Error> {
        let rc = unsafe {
            curl_sys::curl_easy_setopt(easy.raw(), curl_sys::CURLOPT_HTTPHEADER, self.raw)
        };
        if rc == curl_sys::CURLE_OK {
            Ok(())
        } else {
            Err(curl::Error::new(rc))
        }
    }
}

impl Drop for HeaderLines {
    fn drop(&mut self) {
        unsafe { curl_sys::curl_slist_free_all(self.raw) }
    }
}

/// Encodes one header as `name: value` with a Latin-1 value.
///
/// Returns `None` if the value holds a char above U+00FF. A blank value uses
/// curl's `name;` form, which sends the header empty; `name:` would remove it.
pub(super) fn header_line(name: &str, value: &str) -> Option<Vec<u8>> {
    let mut line = Vec::with_capacity(name.len() + value.len() + 2);
    line.extend_from_slice(name.as_bytes());
    if value.trim().is_empty() {
        line.push(b';');
        return Some(line);
    }
    line.extend_from_slice(b": ");
    for c in value.chars() {
        line.push(u8::try_from(u32::from(c)).ok()?);
    }
    Some(line)
}
