//! Static page index

use serde::{Deserialize, Serialize};

use super::rank::{SearchResult, normalize_query, score_page};
use crate::error::Result;

/// Built-in index, shipped with the wasm module
const BUILTIN_INDEX: &str = include_str!("site_index.json");

/// One searchable page of the site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDescriptor {
    pub title: String,
    /// Relative URL, also used as the navigation target
    pub url: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// Read-only list of pages, defined once at load
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteIndex {
    pages: Vec<PageDescriptor>,
}

impl SiteIndex {
    pub fn new(pages: Vec<PageDescriptor>) -> Self {
        Self { pages }
    }

    /// The index compiled into the crate
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_INDEX)
    }

    /// Parse an index from a JSON array of page descriptors
    pub fn from_json(json: &str) -> Result<Self> {
        let index: SiteIndex = serde_json::from_str(json)?;
        log::debug!("Loaded site index with {} pages", index.len());
        Ok(index)
    }

    /// Page-provided override if it parses, otherwise the built-in index
    pub fn from_override(json: Option<&str>) -> Result<Self> {
        let Some(json) = json else {
            return Self::builtin();
        };

        match Self::from_json(json) {
            Ok(index) => {
                log::info!("Using page-provided site index ({} pages)", index.len());
                Ok(index)
            }
            Err(e) => {
                log::warn!("{}; falling back to built-in index", e);
                Self::builtin()
            }
        }
    }

    pub fn pages(&self) -> &[PageDescriptor] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Score every page against `query` and return matches, best first.
    ///
    /// Queries shorter than [`MIN_QUERY_LEN`](crate::consts::MIN_QUERY_LEN)
    /// characters after trimming return nothing.
    pub fn search(&self, query: &str) -> Vec<SearchResult<'_>> {
        let Some(query) = normalize_query(query) else {
            return Vec::new();
        };

        let mut results: Vec<SearchResult<'_>> = self
            .pages
            .iter()
            .filter_map(|page| {
                let score = score_page(page, &query);
                (score > 0).then_some(SearchResult { page, score })
            })
            .collect();

        // Stable, so equal scores keep index order
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results
    }
}
