//! Extension-based image URL classification.

use url::Url;

/// Path suffixes that mark a URL as an image, compared case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".webp", ".gif", ".avif"];

/// Returns `true` if the path of `url` ends with a known image extension.
///
/// Query and fragment are ignored. `data:` URLs are always rejected.
pub fn looks_like_image(url: &Url) -> bool {
    if url.scheme().eq_ignore_ascii_case("data") {
        return false;
    }
    has_image_extension(url.path())
}

/// String form of [`looks_like_image`] that also accepts relative references
/// such as `../uploads/photo.JPG?w=300`.
///
/// ```
/// use fullsize_grabber::is_image_url;
///
/// assert!(is_image_url("https://cdn.example.com/a/photo.JPG?w=300"));
/// assert!(is_image_url("/uploads/pic.webp#top"));
/// assert!(!is_image_url("data:image/png;base64,iVBORw0KGgo="));
/// assert!(!is_image_url("https://example.com/gallery/"));
/// ```
pub fn is_image_url(raw: &str) -> bool {
    let raw = raw.trim();
    match Url::parse(raw) {
        Ok(url) => looks_like_image(&url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let end = raw.find(['?', '#']).unwrap_or(raw.len());
            has_image_extension(&raw[..end])
        }
        Err(_) => false,
    }
}

/// Returns a copy of `url` with query and fragment removed.
pub fn strip_query(url: &Url) -> Url {
    let mut stripped = url.clone();
    stripped.set_query(None);
    stripped.set_fragment(None);
    stripped
}

fn has_image_extension(path: &str) -> bool {
    let path = path.to_ascii_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}
