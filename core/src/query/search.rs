#![deny(missing_docs)]

//! # Keyword Search
//!
//! Case-insensitive substring search across every text field an
//! endpoint carries. Hits come back in index order; relevance ranking
//! is deliberately absent so results stay stable across calls.

use super::QueryEngine;
use crate::error::{QueryError, QueryResult};
use crate::index::Endpoint;

/// Hits kept when the caller does not pass a limit.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Result page for one keyword search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults<'a> {
    /// The keyword as given.
    pub keyword: String,

    /// Matching endpoints before truncation.
    pub total: usize,

    /// Matching endpoints after truncation, index order preserved.
    pub hits: Vec<&'a Endpoint>,
}

impl SearchResults<'_> {
    /// True when the page shows fewer hits than matched.
    pub fn truncated(&self) -> bool {
        self.hits.len() < self.total
    }
}

impl<'a> QueryEngine<'a> {
    /// Searches path, summary, description, operation id and tags.
    ///
    /// `limit` defaults to [`DEFAULT_SEARCH_LIMIT`]; the result still
    /// reports the full match count so truncation is detectable.
    pub fn search(&self, keyword: &str, limit: Option<usize>) -> QueryResult<SearchResults<'a>> {
        if keyword.trim().is_empty() {
            return Err(QueryError::InvalidArgument(
                "keyword must be a non-empty string".to_string(),
            ));
        }
        let needle = keyword.to_lowercase();

        let mut hits: Vec<&Endpoint> = self
            .index
            .all()
            .iter()
            .filter(|ep| matches_keyword(ep, &needle))
            .collect();
        let total = hits.len();
        hits.truncate(limit.unwrap_or(DEFAULT_SEARCH_LIMIT));

        Ok(SearchResults {
            keyword: keyword.to_string(),
            total,
            hits,
        })
    }
}

/// True when any text field contains the lowercased needle.
fn matches_keyword(ep: &Endpoint, needle: &str) -> bool {
    let in_text = |text: &Option<String>| {
        text.as_deref()
            .map_or(false, |t| t.to_lowercase().contains(needle))
    };
    ep.path.to_lowercase().contains(needle)
        || ep.operation_id.to_lowercase().contains(needle)
        || in_text(&ep.summary)
        || in_text(&ep.description)
        || ep.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}
