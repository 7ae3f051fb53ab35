//! Candidate image URL extraction from a parsed page.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::classify::{is_image_url, looks_like_image};

/// `<img>` attributes that may carry a direct image reference. Lazy-loading
/// plugins put the real source in the `data-*` variants.
pub const IMG_SOURCE_ATTRS: &[&str] = &["src", "data-src", "data-lazy-src", "data-original"];

/// Social preview `<meta>` keys, matched against both `property` and `name`.
pub const PREVIEW_META_KEYS: &[&str] = &["og:image", "twitter:image"];

static IMG: LazyLock<Selector> = LazyLock::new(|| static_selector("img"));
static META: LazyLock<Selector> = LazyLock::new(|| static_selector("meta[content]"));

pub(crate) fn static_selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

/// Collect every plausible image URL referenced by `html`, resolved against
/// `page_url`.
///
/// Looks at `srcset` (largest width only), the [`IMG_SOURCE_ATTRS`], an
/// enclosing `<a href>` that itself points at an image, and the
/// [`PREVIEW_META_KEYS`] meta tags. References that cannot be resolved are
/// dropped, and only URLs passing [`looks_like_image`] are returned.
pub fn extract_candidates(page_url: &Url, html: &Html) -> BTreeSet<Url> {
    let mut found = BTreeSet::new();
    let mut add = |reference: &str| {
        if let Some(url) = resolve(page_url, reference) {
            found.insert(url);
        }
    };

    for img in html.select(&IMG) {
        let el = img.value();

        if let Some(srcset) = el.attr("srcset").filter(|s| !s.trim().is_empty()) {
            if let Some(biggest) = super::biggest_from_srcset(srcset) {
                add(biggest);
            }
        }

        for attr in IMG_SOURCE_ATTRS {
            if let Some(value) = el.attr(attr).filter(|v| !v.is_empty()) {
                add(value);
            }
        }

        if let Some(href) = parent_anchor_href(img).filter(|href| is_image_url(href)) {
            add(href);
        }
    }

    for meta in html.select(&META) {
        let el = meta.value();
        let is_preview = ["property", "name"]
            .iter()
            .filter_map(|key| el.attr(key))
            .any(|value| PREVIEW_META_KEYS.contains(&value));
        if !is_preview {
            continue;
        }
        if let Some(content) = el.attr("content").filter(|c| !c.is_empty()) {
            add(content);
        }
    }

    found.retain(looks_like_image);
    found
}

fn parent_anchor_href(img: ElementRef<'_>) -> Option<&str> {
    let parent = img.parent().and_then(ElementRef::wrap)?;
    if parent.value().name() != "a" {
        return None;
    }
    parent.value().attr("href").filter(|href| !href.is_empty())
}

fn resolve(base: &Url, reference: &str) -> Option<Url> {
    match base.join(reference.trim()) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::debug!("Dropping unresolvable reference {reference:?}: {e}");
            None
        }
    }
}
