//! The crawl: pages -> candidates -> variants -> saved files.
//!
//! Everything runs one request at a time. Only two failures stop a run: the
//! start page being unavailable and a storage write failing.

use std::collections::BTreeSet;

use scraper::Html;
use url::Url;

use crate::config::GrabberConfig;
use crate::error::{GrabberError, Result};
use crate::extract::{discover_links, extract_candidates};
use crate::fetch::Fetcher;
use crate::naming::file_name_for;
use crate::outcome::{Attempt, AttemptOutcome, CandidateOutcome, Resolution, RunSummary};
use crate::probe::{SizeCheck, check_width};
use crate::resolve::VariantPipeline;
use crate::storage::Storage;

/// A configured crawl. Create one with [`GrabberBuilder`](crate::GrabberBuilder).
pub struct Grabber<F: Fetcher, S: Storage> {
    config: GrabberConfig,
    pipeline: VariantPipeline,
    fetcher: F,
    storage: S,
}

impl<F: Fetcher, S: Storage> Grabber<F, S> {
    pub(crate) fn new(
        config: GrabberConfig,
        pipeline: VariantPipeline,
        fetcher: F,
        storage: S,
    ) -> Self {
        Self {
            config,
            pipeline,
            fetcher,
            storage,
        }
    }

    pub fn config(&self) -> &GrabberConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Crawl, resolve and save. Returns the counters for the summary line.
    pub async fn run(&self) -> Result<RunSummary> {
        let mut summary = RunSummary {
            min_width: self.config.min_width,
            ..RunSummary::default()
        };

        self.storage.prepare().await?;

        let candidates = self.collect_candidates(&mut summary).await?;
        summary.candidates = candidates.len();
        tracing::info!("Found {} candidate image URLs", candidates.len());

        for (i, raw) in candidates.iter().enumerate() {
            let index = i + 1;
            let outcome = self.resolve_candidate(raw).await;

            match outcome.resolution {
                Resolution::Accepted { url, bytes, width } => {
                    let name = self.storage.put(&file_name_for(&url, index), &bytes).await?;
                    tracing::info!("[{index}] Saved {name} ({width}px)");
                    summary.saved += 1;
                }
                Resolution::Fallback { bytes } => {
                    let name = format!("{}{}", self.config.small_prefix, file_name_for(raw, index));
                    let name = self.storage.put(&name, &bytes).await?;
                    tracing::info!("[{index}] Saved small version {name}");
                    summary.saved_small += 1;
                }
                Resolution::Unavailable => {
                    tracing::warn!("[{index}] Nothing saved for {raw}");
                    summary.unavailable += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Fetch the start page and every in-scope page it links to, and gather
    /// the image candidates of all of them.
    ///
    /// The start page is fetched once and reused. Linked pages that fail are
    /// skipped with a warning.
    pub async fn collect_candidates(&self, summary: &mut RunSummary) -> Result<BTreeSet<Url>> {
        let start = &self.config.start_url;
        tracing::info!("Fetching start page {start}");
        let body = self
            .fetcher
            .fetch(start)
            .await
            .map_err(|source| GrabberError::StartPage {
                url: start.to_string(),
                source,
            })?;

        let (mut candidates, links) = self.scan_start_page(&body);
        summary.pages_scanned += 1;
        tracing::info!("Discovered {} linked pages", links.len());

        for page in links.iter().filter(|page| *page != start) {
            match self.fetcher.fetch(page).await {
                Ok(body) => {
                    let found = scan_page(page, &body);
                    tracing::debug!("{} candidates on {page}", found.len());
                    candidates.extend(found);
                    summary.pages_scanned += 1;
                }
                Err(e) => {
                    tracing::warn!("Skipping page {page}: {e}");
                    summary.pages_skipped += 1;
                }
            }
        }

        Ok(candidates)
    }

    fn scan_start_page(&self, body: &[u8]) -> (BTreeSet<Url>, BTreeSet<Url>) {
        let start = &self.config.start_url;
        let html = Html::parse_document(&String::from_utf8_lossy(body));
        (
            extract_candidates(start, &html),
            discover_links(start, &html, &self.config.scope),
        )
    }

    /// Try the variants of `raw` until one is wide enough.
    ///
    /// The first variant is always `raw` itself, so its bytes double as the
    /// small fallback without a second download. An empty body counts as
    /// nothing downloaded.
    pub async fn resolve_candidate(&self, raw: &Url) -> CandidateOutcome {
        let mut attempts = Vec::new();
        let mut original = None;

        for variant in self.pipeline.variants(raw) {
            let bytes = match self.fetcher.fetch(&variant).await {
                Ok(bytes) if bytes.is_empty() => {
                    tracing::debug!("{variant} returned an empty body");
                    attempts.push(Attempt {
                        url: variant,
                        outcome: AttemptOutcome::Empty,
                    });
                    continue;
                }
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::debug!("{variant} unavailable: {e}");
                    attempts.push(Attempt {
                        url: variant,
                        outcome: AttemptOutcome::Unavailable(e),
                    });
                    continue;
                }
            };

            let outcome = match check_width(&bytes, self.config.min_width) {
                SizeCheck::Qualifies { width } => {
                    attempts.push(Attempt {
                        url: variant.clone(),
                        outcome: AttemptOutcome::Accepted { width },
                    });
                    return CandidateOutcome {
                        attempts,
                        resolution: Resolution::Accepted {
                            url: variant,
                            bytes,
                            width,
                        },
                    };
                }
                SizeCheck::TooNarrow { width } => AttemptOutcome::TooNarrow { width },
                SizeCheck::DecodeFailed => AttemptOutcome::DecodeFailed,
            };
            tracing::debug!("{variant} rejected: {outcome:?}");

            if variant == *raw {
                original = Some(bytes);
            }
            attempts.push(Attempt {
                url: variant,
                outcome,
            });
        }

        let resolution = match original {
            Some(bytes) => Resolution::Fallback { bytes },
            None => Resolution::Unavailable,
        };
        CandidateOutcome {
            attempts,
            resolution,
        }
    }
}

fn scan_page(page: &Url, body: &[u8]) -> BTreeSet<Url> {
    let html = Html::parse_document(&String::from_utf8_lossy(body));
    extract_candidates(page, &html)
}
