//! `srcset` attribute parsing.

/// Pick the URL with the largest `w` descriptor from a `srcset` value.
///
/// Entries are comma separated, `<url> <width>w`. A missing or malformed
/// width counts as `0`. Comparison is strictly greater, so on a tie the
/// first entry wins. Returns `None` only when no entry has a URL.
///
/// ```
/// use fullsize_grabber::extract::biggest_from_srcset;
///
/// let best = biggest_from_srcset("a.jpg 300w, b.jpg 1200w, c.jpg");
/// assert_eq!(best, Some("b.jpg"));
/// ```
pub fn biggest_from_srcset(srcset: &str) -> Option<&str> {
    let mut best: Option<(&str, i64)> = None;

    for entry in srcset.split(',') {
        let mut bits = entry.split_whitespace();
        let Some(url) = bits.next() else {
            continue;
        };
        let width = bits.next().map(parse_width).unwrap_or(0);

        if best.is_none_or(|(_, best_width)| width > best_width) {
            best = Some((url, width));
        }
    }

    best.map(|(url, _)| url)
}

fn parse_width(descriptor: &str) -> i64 {
    descriptor
        .strip_suffix('w')
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(0)
}
