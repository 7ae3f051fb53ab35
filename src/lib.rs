//! # fullsize_grabber
//!
//! Save the full-size photos of a single celebrity gallery.
//!
//! ## Overview
//!
//! A [`Grabber`] fetches a start page, follows the in-scope article links it
//! finds (one level), and collects candidate image URLs from `<img>` tags,
//! `srcset` lists, image-linking anchors and social preview meta tags. Each
//! candidate is expanded into a list of likely-original URLs by a
//! [`VariantPipeline`] (query stripped, `-300x450` and `-scaled` suffixes
//! removed). The first variant that downloads and is at least
//! [`GrabberConfig::min_width`] pixels wide is saved; otherwise the
//! candidate's own bytes are saved with a `small_` prefix.
//!
//! Network and storage sit behind the [`Fetcher`] and [`Storage`] traits, so
//! the whole crawl can run against fixtures.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use fullsize_grabber::GrabberBuilder;
//! use url::Url;
//!
//! # async fn example() -> fullsize_grabber::Result<()> {
//! let start = Url::parse("https://www.starstyle.com/celebrity/olivia-rodrigo/").unwrap();
//! let summary = GrabberBuilder::new(start)
//!     .output_dir("starstyle-olivia-images")
//!     .min_width(900)
//!     .build()?
//!     .run()
//!     .await?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod grabber;
pub mod logging;
pub mod naming;
pub mod outcome;
pub mod probe;
pub mod resolve;
pub mod storage;

pub use classify::{is_image_url, looks_like_image, strip_query};
pub use config::{GrabberBuilder, GrabberConfig};
pub use error::{GrabberError, Result};
pub use extract::{LinkScope, biggest_from_srcset, discover_links, extract_candidates};
pub use fetch::{FetchError, Fetcher, HttpFetcher};
pub use grabber::Grabber;
pub use naming::{file_name_for, sanitize_file_name};
pub use outcome::{Attempt, AttemptOutcome, CandidateOutcome, Resolution, RunSummary};
pub use probe::{SizeCheck, check_width};
pub use resolve::{SuffixRule, VariantPipeline, VariantRule, variants_for_fullsize};
pub use storage::{FsStorage, Storage};
