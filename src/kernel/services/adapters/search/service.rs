//! Document search service
//!
//! Composes the query adapter, the result assembler and the highlight manager
//! into the clear → search → highlight → assemble sequence used by a session.

use super::assemble::ResultAssembler;
use super::query::DocumentQuery;
use crate::kernel::services::adapters::highlight::HighlightManager;
use crate::kernel::services::ports::{
    DocumentService, SearchRequest, SearchResult, SearchResultItem,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Handle for one in-flight search. Cancelling only stops the task from
/// touching the document again; the host call already issued still finishes.
pub struct SearchTask {
    id: u64,
    cancelled: Arc<AtomicBool>,
}

impl SearchTask {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub(crate) fn cancelled_flag(&self) -> Arc<AtomicBool> {
        self.cancelled.clone()
    }
}

pub struct SearchService {
    query: DocumentQuery,
    assembler: ResultAssembler,
    highlighter: Arc<HighlightManager>,
    preview_limit: usize,
}

impl SearchService {
    pub fn new(
        document: Arc<dyn DocumentService>,
        highlighter: Arc<HighlightManager>,
        preview_limit: usize,
    ) -> Self {
        Self {
            query: DocumentQuery::new(document.clone()),
            assembler: ResultAssembler::new(document),
            highlighter,
            preview_limit,
        }
    }

    pub fn highlighter(&self) -> &HighlightManager {
        &self.highlighter
    }

    /// Top matches without touching highlights. A missing host yields no results.
    pub async fn preview(&self, request: &SearchRequest) -> SearchResult<Vec<SearchResultItem>> {
        let matches = self.query.probe(request).await?;
        self.assembler.assemble(matches, self.preview_limit).await
    }

    /// Clears highlights, searches, optionally highlights every match, then
    /// assembles up to `limit` items.
    ///
    /// Returns `Ok(None)` when `cancelled` is raised at any step; a superseded
    /// search stops marking the document at the next host call.
    pub async fn run(
        &self,
        request: &SearchRequest,
        limit: usize,
        highlight_all: bool,
        cancelled: &AtomicBool,
    ) -> SearchResult<Option<Vec<SearchResultItem>>> {
        self.highlighter.clear_all().await?;
        if cancelled.load(Ordering::Relaxed) {
            return Ok(None);
        }
        let matches = self.query.search(request).await?;
        if cancelled.load(Ordering::Relaxed) {
            return Ok(None);
        }

        if highlight_all && !matches.is_empty() {
            self.highlighter.apply_all(&matches, cancelled).await?;
            if cancelled.load(Ordering::Relaxed) {
                return Ok(None);
            }
        }

        let items = self.assembler.assemble(matches, limit).await?;
        Ok(Some(items))
    }

    /// Re-runs `request` for fresh handles and highlights the `index`-th match.
    pub async fn highlight_result(
        &self,
        request: &SearchRequest,
        index: usize,
        cancelled: &AtomicBool,
    ) -> SearchResult<()> {
        self.highlighter.clear_all().await?;
        if cancelled.load(Ordering::Relaxed) {
            return Ok(());
        }
        let matches = self.query.search(request).await?;
        self.highlighter.apply_one(&matches, index, cancelled).await
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/search/service.rs"]
mod tests;
