//! Same-site article link discovery.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use super::candidates::static_selector;
use crate::config::{DEFAULT_DOMAIN_SUFFIX, DEFAULT_PATH_SEGMENT};

static ANCHOR: LazyLock<Selector> = LazyLock::new(|| static_selector("a[href]"));

/// Which links count as part of the gallery.
///
/// A link qualifies when its host ends with `domain_suffix` and its path
/// contains `path_segment`. Plain substring checks, nothing smarter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkScope {
    pub domain_suffix: String,
    pub path_segment: String,
}

impl LinkScope {
    pub fn new(domain_suffix: impl Into<String>, path_segment: impl Into<String>) -> Self {
        Self {
            domain_suffix: domain_suffix.into(),
            path_segment: path_segment.into(),
        }
    }

    /// Returns `true` if `url` falls inside this scope.
    pub fn contains(&self, url: &Url) -> bool {
        url.host_str()
            .is_some_and(|host| host.ends_with(&self.domain_suffix))
            && url.path().contains(&self.path_segment)
    }
}

impl Default for LinkScope {
    fn default() -> Self {
        Self::new(DEFAULT_DOMAIN_SUFFIX, DEFAULT_PATH_SEGMENT)
    }
}

/// Find the in-scope pages linked from `html`.
///
/// Every `<a href>` is resolved against `base`; fragments are dropped so
/// in-page anchors do not count as separate pages. Does not recurse.
pub fn discover_links(base: &Url, html: &Html, scope: &LinkScope) -> BTreeSet<Url> {
    html.select(&ANCHOR)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(|href| base.join(href.trim()).ok())
        .map(|mut url| {
            url.set_fragment(None);
            url
        })
        .filter(|url| scope.contains(url))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.starstyle.com/celebrity/olivia-rodrigo/").unwrap()
    }

    fn discover(body: &str) -> Vec<String> {
        let html = Html::parse_document(body);
        discover_links(&base(), &html, &LinkScope::default())
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn keeps_in_scope_links_only() {
        let found = discover(concat!(
            r#"<a href="/olivia-rodrigo/grammys-dress/">Look</a>"#,
            r#"<a href="https://shop.starstyle.com/olivia-rodrigo/boots/">Shop</a>"#,
            r#"<a href="/celebrity/taylor-swift/">Other</a>"#,
            r#"<a href="https://evil.example.com/olivia-rodrigo/">Off-site</a>"#,
            r#"<a href="mailto:tips@starstyle.com">Mail</a>"#,
        ));
        assert_eq!(
            found,
            vec![
                "https://shop.starstyle.com/olivia-rodrigo/boots/",
                "https://www.starstyle.com/olivia-rodrigo/grammys-dress/",
            ]
        );
    }

    #[test]
    fn relative_links_resolve_against_base() {
        let found = discover(r#"<a href="page/2/">Next</a>"#);
        assert_eq!(
            found,
            vec!["https://www.starstyle.com/celebrity/olivia-rodrigo/page/2/"]
        );
    }

    #[test]
    fn fragments_collapse_to_one_page() {
        let found = discover(concat!(
            r##"<a href="#comments">Comments</a>"##,
            r##"<a href="/celebrity/olivia-rodrigo/#top">Top</a>"##,
        ));
        assert_eq!(
            found,
            vec!["https://www.starstyle.com/celebrity/olivia-rodrigo/"]
        );
    }

    #[test]
    fn host_suffix_check_is_literal() {
        let scope = LinkScope::default();
        let spoof = Url::parse("https://notstarstyle.com/olivia-rodrigo/").unwrap();
        assert!(scope.contains(&spoof));
        let wrong = Url::parse("https://starstyle.com.evil.net/olivia-rodrigo/").unwrap();
        assert!(!scope.contains(&wrong));
    }

    #[test]
    fn custom_scope() {
        let scope = LinkScope::new("example.org", "/gallery/");
        let html = Html::parse_document(concat!(
            r#"<a href="https://example.org/gallery/1">One</a>"#,
            r#"<a href="https://example.org/about">About</a>"#,
        ));
        let base = Url::parse("https://example.org/").unwrap();
        let found = discover_links(&base, &html, &scope);
        assert_eq!(found.len(), 1);
        assert!(found.iter().all(|u| u.path().starts_with("/gallery/")));
    }
}
