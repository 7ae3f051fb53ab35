//! Per-candidate and per-run results.

use std::fmt;

use url::Url;

use crate::fetch::FetchError;

/// What happened when one variant URL was tried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Nothing was downloaded.
    Unavailable(FetchError),
    /// The request succeeded but the body was empty.
    Empty,
    /// Downloaded, but not a readable image.
    DecodeFailed,
    /// Downloaded and decoded, but below the minimum width.
    TooNarrow { width: u32 },
    /// Downloaded and wide enough; the search stops here.
    Accepted { width: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub url: Url,
    pub outcome: AttemptOutcome,
}

/// Final decision for one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A variant met the width threshold.
    Accepted { url: Url, bytes: Vec<u8>, width: u32 },
    /// No variant qualified; the candidate's own bytes are kept as a small
    /// copy whatever their size.
    Fallback { bytes: Vec<u8> },
    /// Not even the candidate itself could be downloaded, or it came back
    /// empty.
    Unavailable,
}

/// Attempts made for a candidate, in order, and what came of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateOutcome {
    pub attempts: Vec<Attempt>,
    pub resolution: Resolution,
}

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Pages whose HTML was parsed, start page included.
    pub pages_scanned: usize,
    /// Linked pages that could not be fetched.
    pub pages_skipped: usize,
    /// Unique candidate image URLs across all pages.
    pub candidates: usize,
    /// Full-size images saved.
    pub saved: usize,
    /// Fallback copies saved with the small prefix.
    pub saved_small: usize,
    /// Candidates for which nothing could be saved.
    pub unavailable: usize,
    pub min_width: u32,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Done. Saved {} images with width >= {}px \
             ({} small fallbacks, {} unavailable, {} of {} pages scanned).",
            self.saved,
            self.min_width,
            self.saved_small,
            self.unavailable,
            self.pages_scanned,
            self.pages_scanned + self.pages_skipped,
        )
    }
}
