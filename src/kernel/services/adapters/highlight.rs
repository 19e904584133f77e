//! Highlight manager.
//!
//! Callers clear before applying highlights for a new query; nothing here
//! remembers which ranges were marked before. Clear and apply passes are
//! serialized, and an apply pass re-checks its cancel flag before every host
//! call, so a newer clear never lands between a stale pass's marks.

use crate::kernel::services::ports::{
    DocumentService, MatchHandle, SearchError, SearchResult,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct HighlightManager {
    document: Arc<dyn DocumentService>,
    color: String,
    pass: Mutex<()>,
}

impl HighlightManager {
    pub fn new(document: Arc<dyn DocumentService>, color: impl Into<String>) -> Self {
        Self {
            document,
            color: color.into(),
            pass: Mutex::new(()),
        }
    }

    /// Removes every highlight in the body with one whole-range call.
    /// Without a host there is nothing highlighted, so that is not an error.
    pub async fn clear_all(&self) -> SearchResult<()> {
        let _pass = self.pass.lock().await;
        if !self.document.is_available() {
            return Ok(());
        }
        self.document.set_body_highlight(None).await?;
        Ok(())
    }

    /// Marks every match until `cancelled` is raised. Returns how many ranges
    /// were marked.
    pub async fn apply_all(
        &self,
        matches: &[MatchHandle],
        cancelled: &AtomicBool,
    ) -> SearchResult<usize> {
        let _pass = self.pass.lock().await;
        let mut applied = 0usize;
        for handle in matches {
            if cancelled.load(Ordering::Relaxed) {
                tracing::debug!(applied, total = matches.len(), "highlight pass superseded");
                return Ok(applied);
            }
            self.document
                .set_highlight(*handle, Some(self.color.clone()))
                .await?;
            applied += 1;
        }
        tracing::debug!(count = applied, "highlighted matches");
        Ok(applied)
    }

    /// Selects `matches[index]` in the host view and highlights it. Does
    /// nothing once `cancelled` is raised.
    pub async fn apply_one(
        &self,
        matches: &[MatchHandle],
        index: usize,
        cancelled: &AtomicBool,
    ) -> SearchResult<()> {
        let Some(handle) = matches.get(index).copied() else {
            return Err(SearchError::InvalidIndex {
                index,
                len: matches.len(),
            });
        };
        let _pass = self.pass.lock().await;
        if cancelled.load(Ordering::Relaxed) {
            tracing::debug!(index, "result highlight superseded");
            return Ok(());
        }
        self.document.select(handle).await?;
        if cancelled.load(Ordering::Relaxed) {
            return Ok(());
        }
        self.document
            .set_highlight(handle, Some(self.color.clone()))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/highlight.rs"]
mod tests;
