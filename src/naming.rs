//! File name derivation for saved images.

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;
use url::Url;

use crate::classify::strip_query;

/// Longest file name produced by [`sanitize_file_name`], in characters.
pub const MAX_NAME_CHARS: usize = 240;

static UNSAFE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.\-]+").expect("static regex is valid"));

/// Replace each run of characters outside `[A-Za-z0-9_.-]` with one `_` and
/// cap the result at [`MAX_NAME_CHARS`].
pub fn sanitize_file_name(name: &str) -> String {
    UNSAFE_RUN
        .replace_all(name, "_")
        .chars()
        .take(MAX_NAME_CHARS)
        .collect()
}

/// Name to save `url` under: its last path segment (query ignored,
/// percent-decoded), or `image_<index>.jpg` when the path ends in `/`.
/// Always sanitized.
///
/// ```
/// use fullsize_grabber::file_name_for;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/up/My%20Look.jpg?w=300").unwrap();
/// assert_eq!(file_name_for(&url, 1), "My_Look.jpg");
///
/// let url = Url::parse("https://example.com/up/").unwrap();
/// assert_eq!(file_name_for(&url, 7), "image_7.jpg");
/// ```
pub fn file_name_for(url: &Url, index: usize) -> String {
    let stripped = strip_query(url);
    let last = stripped
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or_default();

    if last.is_empty() {
        sanitize_file_name(&format!("image_{index}.jpg"))
    } else {
        sanitize_file_name(&percent_decode_str(last).decode_utf8_lossy())
    }
}

/// `photo.jpg` -> `photo_2.jpg`; names without an extension get the counter
/// appended.
pub fn with_counter(name: &str, counter: u32) -> String {
    match name.rfind('.') {
        Some(dot) if dot > 0 => format!("{}_{counter}{}", &name[..dot], &name[dot..]),
        _ => format!("{name}_{counter}"),
    }
}
