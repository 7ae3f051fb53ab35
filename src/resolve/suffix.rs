//! Regex-based filename suffix stripping.

use regex::Regex;

use super::VariantRule;

/// Rule that removes a generated suffix sitting right before the file
/// extension, e.g. `-300x450` in `photo-300x450.jpg`.
///
/// The pattern describes only the suffix; it is anchored between the stem
/// and a trailing `.ext` automatically and matched case-insensitively.
///
/// # Example
///
/// ```
/// use fullsize_grabber::{SuffixRule, VariantRule};
///
/// let rule = SuffixRule::new("-thumb");
/// assert_eq!(rule.derive("/a/b-THUMB.png").as_deref(), Some("/a/b.png"));
/// assert_eq!(rule.derive("/a/b-thumb-x.png"), None);
/// ```
pub struct SuffixRule {
    re: Regex,
}

impl SuffixRule {
    /// Create a rule from a suffix pattern.
    ///
    /// # Panics
    ///
    /// Panics if the pattern is not a valid regex. Use
    /// [`try_new`](Self::try_new) for a fallible alternative.
    pub fn new(suffix: &str) -> Self {
        Self::try_new(suffix).expect("invalid suffix pattern")
    }

    /// Fallible constructor that returns a [`regex::Error`] for invalid patterns.
    pub fn try_new(suffix: &str) -> Result<Self, regex::Error> {
        let re = Regex::new(&format!(r"(?i)^(.*)(?:{suffix})(\.[A-Za-z0-9]+)$"))?;
        Ok(Self { re })
    }

    /// Thumbnail dimensions, `-<width>x<height>` with 2 to 5 digits each.
    pub fn dimensions() -> Self {
        Self::new(r"-\d{2,5}x\d{2,5}")
    }

    /// The `-scaled` marker added to downsized large uploads.
    pub fn scaled() -> Self {
        Self::new("-scaled")
    }
}

impl VariantRule for SuffixRule {
    fn derive(&self, path: &str) -> Option<String> {
        let caps = self.re.captures(path)?;
        Some(format!("{}{}", &caps[1], &caps[2]))
    }
}
