//! Basename and stem/extension splitting.

/// Returns the final path component of `name`, accepting both `/` and `\`
/// as separators. A trailing separator yields an empty basename.
pub(super) fn basename(name: &str) -> &str {
    match name.rfind(|c| c == '/' || c == '\\') {
        Some(idx) => &name[idx + 1..],
        None => name,
    }
}

/// Splits `name` into `(stem, ext)` at the last `.`, with `ext` keeping its dot.
///
/// Leading dots belong to the stem, so `.bashrc` and `..png` have no
/// extension. A name ending in `.` has extension `"."`.
pub(super) fn split_extension(name: &str) -> (&str, &str) {
    let Some(dot) = name.rfind('.') else {
        return (name, "");
    };
    if name[..dot].bytes().all(|b| b == b'.') {
        return (name, "");
    }
    name.split_at(dot)
}
