//! Character encoding detection and transcoding for byte input.
//!
//! Web pages arrive as bytes in whatever charset the publisher chose. This
//! module sniffs the declared charset from the document head and decodes to
//! UTF-8, replacing invalid sequences with the Unicode replacement character
//! rather than failing.

use encoding_rs::{Encoding, UTF_8};

use crate::patterns::META_CHARSET;

/// How many leading bytes are searched for a charset declaration.
const SNIFF_WINDOW: usize = 1024;

/// Detect the declared character encoding of an HTML byte stream.
///
/// Covers `<meta charset="...">` and the legacy
/// `http-equiv="Content-Type"` form, falling back to UTF-8 when no
/// recognizable declaration is found.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(SNIFF_WINDOW)];
    let head_str = String::from_utf8_lossy(head);

    META_CHARSET
        .captures(&head_str)
        .and_then(|captures| captures.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Never fails: undecodable sequences become replacement characters.
///
/// # Examples
///
/// ```
/// use passagemark::encoding::transcode_to_utf8;
///
/// let html = b"<html><body>Hello, World!</body></html>";
/// assert!(transcode_to_utf8(html).contains("Hello, World!"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
