//! Site search
//!
//! A linear scan over a handful of static pages. Everything here is pure:
//! - No DOM access
//! - Results borrow from the index and are dropped after rendering
//! - Ties keep index order

pub mod index;
pub mod rank;
pub mod render;

pub use index::{PageDescriptor, SiteIndex};
pub use rank::{SearchResult, normalize_query, score_page};
pub use render::{SearchOutcome, render_results};
