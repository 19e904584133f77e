use crate::kernel::services::ports::{
    DocumentError, DocumentService, MatchHandle, SearchResult, SearchResultItem,
};
use std::sync::Arc;

/// Turns match handles into detached result items.
pub struct ResultAssembler {
    document: Arc<dyn DocumentService>,
}

impl ResultAssembler {
    pub fn new(document: Arc<dyn DocumentService>) -> Self {
        Self { document }
    }

    /// Keeps the first `max_count` matches and resolves their text and
    /// enclosing paragraph in a single batch. Item `i` corresponds to match `i`.
    pub async fn assemble(
        &self,
        mut matches: Vec<MatchHandle>,
        max_count: usize,
    ) -> SearchResult<Vec<SearchResultItem>> {
        matches.truncate(max_count);
        if matches.is_empty() {
            return Ok(Vec::new());
        }

        let expected = matches.len();
        let resolved = self.document.resolve(matches).await?;
        if resolved.len() != expected {
            return Err(DocumentError::Rejected(format!(
                "resolve returned {} entries for {} matches",
                resolved.len(),
                expected
            ))
            .into());
        }

        Ok(resolved
            .into_iter()
            .map(|r| SearchResultItem {
                paragraph_text: r.paragraph_text,
                match_text: r.text,
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/search/assemble.rs"]
mod tests;
