//! Description encoding for the `X-Description*` headers.
//!
//! A description is carried twice: verbatim in `X-Description` when it fits
//! the single-byte Latin-1 range, and always as percent-encoded UTF-8 in
//! `X-Description-Encoded`. Receivers should prefer the encoded form.

/// Header representations of one description string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionEncoding {
    /// The description verbatim; `None` unless every char is Latin-1 and
    /// safe inside a header line.
    pub raw: Option<String>,
    /// Percent-encoded UTF-8; `None` only for an empty description.
    pub encoded: Option<String>,
}

impl DescriptionEncoding {
    /// True when no description headers should be emitted.
    pub fn is_empty(&self) -> bool {
        self.raw.is_none() && self.encoded.is_none()
    }
}

/// Encodes `description` into its header representations.
///
/// Percent-encoding leaves only `A-Z a-z 0-9 - _ . ~` unescaped. The raw form
/// is also withheld when the text holds control characters (tab excepted),
/// since those cannot appear inside a header field, and when it is only
/// whitespace, since a blank field value does not survive the header line.
pub fn encode_description(description: &str) -> DescriptionEncoding {
    if description.is_empty() {
        return DescriptionEncoding::default();
    }

    let raw = (!description.trim().is_empty() && is_latin1_header_text(description))
        .then(|| description.to_string());
    let encoded = urlencoding::encode(description).into_owned();

    DescriptionEncoding {
        raw,
        encoded: Some(encoded),
    }
}

fn is_latin1_header_text(s: &str) -> bool {
    s.chars()
        .all(|c| u32::from(c) <= 0xFF && (c == '\t' || !c.is_control()))
}
