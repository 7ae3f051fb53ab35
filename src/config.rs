//! Run configuration and the builder that assembles a [`Grabber`].

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::{GrabberError, Result};
use crate::extract::LinkScope;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::grabber::Grabber;
use crate::resolve::{VariantPipeline, VariantRule};
use crate::storage::{FsStorage, Storage};

pub const DEFAULT_START_URL: &str = "https://www.starstyle.com/celebrity/olivia-rodrigo/";
pub const DEFAULT_OUTPUT_DIR: &str = "starstyle-olivia-images";
pub const DEFAULT_MIN_WIDTH: u32 = 900;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(45);
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_SMALL_PREFIX: &str = "small_";
pub const DEFAULT_DOMAIN_SUFFIX: &str = "starstyle.com";
pub const DEFAULT_PATH_SEGMENT: &str = "/olivia-rodrigo/";

/// Everything a run needs to know, passed explicitly into the components.
#[derive(Clone, Debug)]
pub struct GrabberConfig {
    /// Gallery page the crawl starts from.
    pub start_url: Url,
    /// Directory images are written to by [`GrabberBuilder::build`]. Created
    /// if missing.
    pub output_dir: PathBuf,
    /// Minimum pixel width for a full-size save.
    pub min_width: u32,
    /// Per-request timeout.
    pub timeout: Duration,
    pub user_agent: String,
    /// `Referer` header; `None` sends the start URL.
    pub referer: Option<String>,
    /// Which linked pages are scanned besides the start page.
    pub scope: LinkScope,
    /// Prepended to the file name of fallback saves.
    pub small_prefix: String,
}

impl GrabberConfig {
    /// Defaults for everything except the start URL.
    pub fn new(start_url: Url) -> Self {
        Self {
            start_url,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            min_width: DEFAULT_MIN_WIDTH,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            referer: None,
            scope: LinkScope::default(),
            small_prefix: DEFAULT_SMALL_PREFIX.to_string(),
        }
    }

    /// The `Referer` actually sent.
    pub fn effective_referer(&self) -> &str {
        self.referer.as_deref().unwrap_or(self.start_url.as_str())
    }

    pub fn validate(&self) -> Result<()> {
        if !matches!(self.start_url.scheme(), "http" | "https") {
            return Err(GrabberError::Config(format!(
                "start URL must be http(s), got {}",
                self.start_url
            )));
        }
        if self.timeout.is_zero() {
            return Err(GrabberError::Config("timeout must be non-zero".into()));
        }
        if self.scope.domain_suffix.is_empty() || self.scope.path_segment.is_empty() {
            return Err(GrabberError::Config(
                "domain suffix and path segment must be non-empty".into(),
            ));
        }
        Ok(())
    }
}

/// Builder for configuring a [`Grabber`].
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use fullsize_grabber::{GrabberBuilder, LinkScope};
/// use url::Url;
///
/// # async fn example() -> fullsize_grabber::Result<()> {
/// let start = Url::parse("https://www.starstyle.com/celebrity/olivia-rodrigo/").unwrap();
/// let grabber = GrabberBuilder::new(start)
///     .output_dir("olivia")
///     .min_width(1200)
///     .timeout(Duration::from_secs(20))
///     .scope(LinkScope::new("starstyle.com", "/olivia-rodrigo/"))
///     .build()?;
///
/// let summary = grabber.run().await?;
/// println!("{summary}");
/// # Ok(())
/// # }
/// ```
pub struct GrabberBuilder {
    config: GrabberConfig,
    pipeline: VariantPipeline,
}

impl GrabberBuilder {
    /// Create a builder with the default variant rules and settings.
    ///
    /// Defaults: output dir `starstyle-olivia-images`, min width 900 px,
    /// timeout 45 s, user agent `Mozilla/5.0`, referer = start URL.
    pub fn new(start_url: Url) -> Self {
        Self::from_config(GrabberConfig::new(start_url))
    }

    pub fn from_config(config: GrabberConfig) -> Self {
        Self {
            config,
            pipeline: VariantPipeline::default(),
        }
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn min_width(mut self, width: u32) -> Self {
        self.config.min_width = width;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn referer(mut self, referer: impl Into<String>) -> Self {
        self.config.referer = Some(referer.into());
        self
    }

    pub fn scope(mut self, scope: LinkScope) -> Self {
        self.config.scope = scope;
        self
    }

    pub fn small_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.small_prefix = prefix.into();
        self
    }

    /// Append a [`VariantRule`] after the built-in ones.
    pub fn add_variant_rule(mut self, rule: impl VariantRule + 'static) -> Self {
        self.pipeline.add(rule);
        self
    }

    /// Replace the variant rules entirely.
    pub fn variant_pipeline(mut self, pipeline: VariantPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn config(&self) -> &GrabberConfig {
        &self.config
    }

    /// Build with the network [`HttpFetcher`] and an [`FsStorage`] rooted at
    /// the configured output directory.
    pub fn build(self) -> Result<Grabber<HttpFetcher, FsStorage>> {
        self.config.validate()?;
        let fetcher = HttpFetcher::new(
            self.config.timeout,
            &self.config.user_agent,
            Some(self.config.effective_referer()),
        )?;
        let storage = FsStorage::new(self.config.output_dir.clone());
        self.build_with(fetcher, storage)
    }

    /// Build with caller-supplied backends.
    ///
    /// The storage backend decides where files go; the configured
    /// `output_dir` is only used by [`build`](Self::build).
    pub fn build_with<F: Fetcher, S: Storage>(
        self,
        fetcher: F,
        storage: S,
    ) -> Result<Grabber<F, S>> {
        self.config.validate()?;
        Ok(Grabber::new(self.config, self.pipeline, fetcher, storage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Url {
        Url::parse(DEFAULT_START_URL).unwrap()
    }

    #[test]
    fn defaults() {
        let builder = GrabberBuilder::new(start());
        let config = builder.config();
        assert_eq!(config.min_width, 900);
        assert_eq!(config.timeout, Duration::from_secs(45));
        assert_eq!(config.output_dir, PathBuf::from("starstyle-olivia-images"));
        assert_eq!(config.user_agent, "Mozilla/5.0");
        assert_eq!(config.effective_referer(), DEFAULT_START_URL);
        assert_eq!(config.scope, LinkScope::new("starstyle.com", "/olivia-rodrigo/"));
        assert_eq!(config.small_prefix, "small_");
    }

    #[test]
    fn setters_apply() {
        let builder = GrabberBuilder::new(start())
            .output_dir("/tmp/out")
            .min_width(1200)
            .timeout(Duration::from_secs(5))
            .user_agent("grabber/1")
            .referer("https://example.com/")
            .small_prefix("lowres_");
        let config = builder.config();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.min_width, 1200);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "grabber/1");
        assert_eq!(config.effective_referer(), "https://example.com/");
        assert_eq!(config.small_prefix, "lowres_");
    }

    #[test]
    fn zero_timeout_rejected() {
        let result = GrabberBuilder::new(start()).timeout(Duration::ZERO).build();
        assert!(matches!(result, Err(GrabberError::Config(_))));
    }

    #[test]
    fn non_http_start_rejected() {
        let url = Url::parse("ftp://example.com/gallery/").unwrap();
        let err = GrabberConfig::new(url).validate().unwrap_err();
        assert!(err.to_string().contains("http(s)"));
    }

    #[test]
    fn empty_scope_rejected() {
        let mut config = GrabberConfig::new(start());
        config.scope = LinkScope::new("", "/olivia-rodrigo/");
        assert!(config.validate().is_err());
    }
}
