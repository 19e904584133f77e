//! Document query adapter: staged whole-word → partial search.

use crate::kernel::services::ports::{
    DocumentService, MatchHandle, QueryOptions, SearchError, SearchRequest, SearchResult,
};
use std::sync::Arc;

pub struct DocumentQuery {
    document: Arc<dyn DocumentService>,
}

impl DocumentQuery {
    pub fn new(document: Arc<dyn DocumentService>) -> Self {
        Self { document }
    }

    /// Runs the request against the document and returns match handles in
    /// document order.
    ///
    /// With `prefer_whole_word` the whole-word search runs first and the partial
    /// search only runs when it finds nothing, so fragments and hyphenated terms
    /// still produce results. An empty query never reaches the document.
    pub async fn search(&self, request: &SearchRequest) -> SearchResult<Vec<MatchHandle>> {
        if request.is_empty() {
            return Ok(Vec::new());
        }
        if !self.document.is_available() {
            return Err(SearchError::HostUnavailable);
        }

        let query = request.query().to_string();
        let match_case = request.match_case();

        if request.prefer_whole_word() {
            let whole = self
                .document
                .search(query.clone(), QueryOptions::whole_word(match_case))
                .await?;
            if !whole.is_empty() {
                tracing::debug!(query = %query, matches = whole.len(), "whole-word search hit");
                return Ok(whole);
            }
            tracing::debug!(query = %query, "no whole-word matches, falling back to partial");
        }

        let partial = self
            .document
            .search(query.clone(), QueryOptions::partial(match_case))
            .await?;
        tracing::debug!(query = %query, matches = partial.len(), "partial search");
        Ok(partial)
    }

    /// Passive variant: a missing host reads as "no matches".
    pub async fn probe(&self, request: &SearchRequest) -> SearchResult<Vec<MatchHandle>> {
        match self.search(request).await {
            Err(SearchError::HostUnavailable) => Ok(Vec::new()),
            other => other,
        }
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/search/query.rs"]
mod tests;
