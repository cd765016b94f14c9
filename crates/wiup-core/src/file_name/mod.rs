//! Header-safe filename tokens.
//!
//! The upload protocol carries the filename in the `X-File-Name` request
//! header, so it has to survive as plain ASCII. Sanitization is total: any
//! input yields a usable `<stem>.<ext>` token, falling back to `image` and
//! `.bin` when nothing usable is left.

mod sanitize;
mod split;

use std::fmt;

pub use sanitize::sanitize_file_name;

/// Stem used when nothing printable survives sanitization.
const FALLBACK_STEM: &str = "image";
/// Extension used when the original one is missing or not `[a-z0-9]{1,10}`.
const FALLBACK_EXT: &str = ".bin";

/// An ASCII `<stem>.<ext>` filename that is always a legal header value.
///
/// Only [`sanitize_file_name`] constructs one, so holding a `FileNameToken`
/// means the value matches `^[A-Za-z0-9._-]+\.[a-z0-9]{1,10}$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileNameToken(String);

impl FileNameToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FileNameToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileNameToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for FileNameToken {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
