//! HTML scanning: image candidates and gallery links.
//!
//! - [`extract_candidates`] -- image URLs referenced by one page.
//! - [`discover_links`] -- in-scope article pages linked from the start page.
//! - [`biggest_from_srcset`] -- the widest entry of a `srcset` value.

mod candidates;
mod links;
mod srcset;

pub use candidates::{IMG_SOURCE_ATTRS, PREVIEW_META_KEYS, extract_candidates};
pub use links::{LinkScope, discover_links};
pub use srcset::biggest_from_srcset;
