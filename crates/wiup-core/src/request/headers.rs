//! Upload protocol header names and assembly.

use crate::description::DescriptionEncoding;
use crate::file_name::FileNameToken;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const FILE_NAME: &str = "X-File-Name";
pub const UPLOAD_TOKEN: &str = "X-Upload-Token";
pub const DESCRIPTION: &str = "X-Description";
pub const DESCRIPTION_ENCODED: &str = "X-Description-Encoded";

/// Builds the ordered header list for one upload.
///
/// `Content-Type` and `X-File-Name` are always present; the token and
/// description headers only when there is something to send.
pub(super) fn assemble(
    content_type: &str,
    file_name: &FileNameToken,
    token: Option<&str>,
    description: &DescriptionEncoding,
) -> Vec<(String, String)> {
    let mut headers = vec![
        (CONTENT_TYPE.to_string(), content_type.to_string()),
        (FILE_NAME.to_string(), file_name.as_str().to_string()),
    ];
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        headers.push((UPLOAD_TOKEN.to_string(), token.to_string()));
    }
    if let Some(raw) = &description.raw {
        headers.push((DESCRIPTION.to_string(), raw.clone()));
    }
    if let Some(encoded) = &description.encoded {
        headers.push((DESCRIPTION_ENCODED.to_string(), encoded.clone()));
    }
    headers
}

/// Case-insensitive lookup in a header list.
pub(super) fn find<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// True if every byte is visible ASCII (`!`..=`~`).
pub(super) fn is_token_safe(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_graphic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::encode_description;
    use crate::file_name::sanitize_file_name;

    fn names(headers: &[(String, String)]) -> Vec<&str> {
        headers.iter().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn minimal_headers() {
        let h = assemble(
            "image/png",
            &sanitize_file_name("a.png"),
            None,
            &encode_description(""),
        );
        assert_eq!(names(&h), [CONTENT_TYPE, FILE_NAME]);
        assert_eq!(find(&h, "content-type"), Some("image/png"));
        assert_eq!(find(&h, "x-file-name"), Some("a.png"));
    }

    #[test]
    fn empty_token_is_omitted() {
        let h = assemble(
            "image/png",
            &sanitize_file_name("a.png"),
            Some(""),
            &encode_description(""),
        );
        assert!(find(&h, UPLOAD_TOKEN).is_none());
    }

    #[test]
    fn all_headers_in_protocol_order() {
        let h = assemble(
            "image/jpeg",
            &sanitize_file_name("b.jpg"),
            Some("s3cret"),
            &encode_description("hi there"),
        );
        assert_eq!(
            names(&h),
            [CONTENT_TYPE, FILE_NAME, UPLOAD_TOKEN, DESCRIPTION, DESCRIPTION_ENCODED]
        );
        assert_eq!(find(&h, DESCRIPTION_ENCODED), Some("hi%20there"));
    }

    #[test]
    fn non_latin1_description_sends_only_encoded() {
        let h = assemble(
            "image/jpeg",
            &sanitize_file_name("b.jpg"),
            None,
            &encode_description("水质"),
        );
        assert!(find(&h, DESCRIPTION).is_none());
        assert!(find(&h, DESCRIPTION_ENCODED).is_some());
    }

    #[test]
    fn token_safety() {
        assert!(is_token_safe("abc-123_XYZ.~"));
        assert!(!is_token_safe("has space"));
        assert!(!is_token_safe("crlf\r\nX: y"));
        assert!(!is_token_safe("tokén"));
    }
}
