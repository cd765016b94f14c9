//! ASCII-only filename sanitization for the `X-File-Name` header.

use unicode_normalization::UnicodeNormalization;

use super::split::{basename, split_extension};
use super::{FileNameToken, FALLBACK_EXT, FALLBACK_STEM};

const MAX_EXT_LEN: usize = 10;

/// Converts an arbitrary filename into a header-safe [`FileNameToken`].
///
/// - Strips directory components and surrounding whitespace
/// - NFKD-normalizes the stem and drops anything outside printable ASCII
/// - Replaces each run of characters outside `[A-Za-z0-9._-]` with one `_`
/// - Trims leading/trailing `.`, `_`, `-` from the stem
/// - Lower-cases the extension, replacing it with `.bin` unless it matches
///   `\.[a-z0-9]{1,10}`
///
/// Never fails. `""` becomes `image.bin` and `图片.png` becomes `image.png`.
pub fn sanitize_file_name(original: &str) -> FileNameToken {
    let name = basename(original).trim();
    if name.is_empty() {
        return FileNameToken(format!("{}{}", FALLBACK_STEM, FALLBACK_EXT));
    }

    let (stem, ext) = split_extension(name);
    let mut stem = sanitize_stem(stem);
    if stem.is_empty() {
        stem.push_str(FALLBACK_STEM);
    }
    stem.push_str(&sanitize_extension(ext));
    FileNameToken(stem)
}

fn sanitize_stem(stem: &str) -> String {
    let ascii = stem.nfkd().filter(|c| matches!(*c, ' '..='~'));

    let mut out = String::with_capacity(stem.len());
    let mut in_run = false;
    for c in ascii {
        if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }

    out.trim_matches(|c| matches!(c, '.' | '_' | '-')).to_string()
}

fn sanitize_extension(ext: &str) -> String {
    let lowered = ext.to_lowercase();
    let valid = lowered
        .strip_prefix('.')
        .filter(|rest| (1..=MAX_EXT_LEN).contains(&rest.len()))
        .is_some_and(|rest| {
            rest.bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        });
    if valid {
        lowered
    } else {
        FALLBACK_EXT.to_string()
    }
}
