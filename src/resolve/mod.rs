//! Original-size URL resolution.
//!
//! Gallery pages usually embed resized renditions whose file names carry a
//! generated suffix. Stripping the suffix is a guess at the original upload;
//! nothing here checks that the guessed URL exists.
//!
//! Rules implement [`VariantRule`] and are composed into a
//! [`VariantPipeline`]. Each rule sees the path produced by the rules before
//! it, so `photo-scaled-300x450.jpg` walks through `photo-scaled.jpg` to
//! `photo.jpg`.

mod suffix;

pub use suffix::SuffixRule;

use url::Url;

use crate::classify::strip_query;

/// A path rewrite that may point at a larger rendition.
pub trait VariantRule: Send + Sync {
    /// Return the rewritten path, or `None` if the rule does not apply.
    fn derive(&self, path: &str) -> Option<String>;
}

/// An ordered chain of [`VariantRule`]s.
pub struct VariantPipeline {
    rules: Vec<Box<dyn VariantRule>>,
}

impl VariantPipeline {
    /// Create an empty pipeline. It still yields the raw and query-stripped
    /// forms of a URL.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule to the end of the pipeline.
    pub fn add(&mut self, rule: impl VariantRule + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Returns `true` if no rules have been added.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Build the ordered, deduplicated list of URLs to try for `url`.
    ///
    /// The list always starts with `url` itself, followed by its
    /// query-stripped form and then one entry per applicable rule.
    pub fn variants(&self, url: &Url) -> Vec<Url> {
        let mut out = vec![url.clone()];
        let mut push = |candidate: Url| {
            if !out.contains(&candidate) {
                out.push(candidate);
            }
        };

        let stripped = strip_query(url);
        push(stripped.clone());

        let mut path = stripped.path().to_string();
        for rule in &self.rules {
            let Some(derived) = rule.derive(&path) else {
                continue;
            };
            let mut next = stripped.clone();
            next.set_path(&derived);
            push(next);
            path = derived;
        }

        out
    }
}

impl Default for VariantPipeline {
    /// Dimension suffix first, then `-scaled`.
    fn default() -> Self {
        let mut pipeline = Self::new();
        pipeline.add(SuffixRule::dimensions());
        pipeline.add(SuffixRule::scaled());
        pipeline
    }
}

/// [`VariantPipeline::variants`] with the default rules.
///
/// ```
/// use fullsize_grabber::variants_for_fullsize;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/up/look-300x450.jpg?ssl=1").unwrap();
/// let variants: Vec<String> = variants_for_fullsize(&url)
///     .into_iter()
///     .map(String::from)
///     .collect();
/// assert_eq!(
///     variants,
///     [
///         "https://example.com/up/look-300x450.jpg?ssl=1",
///         "https://example.com/up/look-300x450.jpg",
///         "https://example.com/up/look.jpg",
///     ]
/// );
/// ```
pub fn variants_for_fullsize(url: &Url) -> Vec<Url> {
    VariantPipeline::default().variants(url)
}
