use crate::kernel::services::ports::{
    SearchError, SearchMessage, SearchRequest, SearchResultItem,
};
use crate::kernel::snippet::{self, SnippetWindow};
use serde::{Serialize, Serializer};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Idle,
    Debouncing,
    Searching,
    Displaying,
}

#[derive(Debug, Clone)]
pub struct SearchState {
    pub query: String,
    pub match_case: bool,
    pub phase: SessionPhase,
    pub page: usize,
    pub page_size: usize,
    pub results: Vec<SearchResultItem>,
    /// Request behind `results` (or behind the search in flight).
    pub results_request: Option<SearchRequest>,
    pub active_search_id: Option<u64>,
    pub active_explicit: bool,
    pub last_applied_search_id: Option<u64>,
    pub debounce_seq: u64,
    pub host_available: bool,
    pub last_error: Option<SearchError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultEntry<'a> {
    /// Absolute index into the full result list.
    pub index: usize,
    pub item: &'a SearchResultItem,
    pub window: SnippetWindow,
}

#[derive(Serialize)]
pub struct SearchResultsSnapshot<'a> {
    pub query: &'a str,
    pub match_case: bool,
    pub phase: SessionPhase,
    pub loading: bool,
    pub host_available: bool,
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
    pub entries: Vec<ResultEntry<'a>>,
    #[serde(serialize_with = "error_message")]
    pub last_error: Option<&'a SearchError>,
}

fn error_message<S: Serializer>(error: &Option<&SearchError>, s: S) -> Result<S::Ok, S::Error> {
    match error {
        Some(e) => s.serialize_some(&e.to_string()),
        None => s.serialize_none(),
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(3)
    }
}

impl SearchState {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            match_case: false,
            phase: SessionPhase::Idle,
            page: 0,
            page_size: page_size.max(1),
            results: Vec::new(),
            results_request: None,
            active_search_id: None,
            active_explicit: false,
            last_applied_search_id: None,
            debounce_seq: 0,
            host_available: true,
            last_error: None,
        }
    }

    pub fn loading(&self) -> bool {
        self.phase == SessionPhase::Searching
    }

    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn set_query(&mut self, text: &str) -> bool {
        if self.query == text {
            return false;
        }
        self.query.clear();
        self.query.push_str(text);
        true
    }

    pub fn set_match_case(&mut self, match_case: bool) -> bool {
        if self.match_case == match_case {
            return false;
        }
        self.match_case = match_case;
        true
    }

    pub fn set_host_available(&mut self, available: bool) -> bool {
        if self.host_available == available {
            return false;
        }
        self.host_available = available;
        true
    }

    /// Starts (or restarts) the quiet window. Anything still in flight no longer
    /// matches the query and will be discarded when it lands.
    pub fn begin_debounce(&mut self) -> u64 {
        self.debounce_seq += 1;
        self.phase = SessionPhase::Debouncing;
        self.active_search_id = None;
        self.debounce_seq
    }

    pub fn is_current_debounce(&self, seq: u64) -> bool {
        self.phase == SessionPhase::Debouncing && self.debounce_seq == seq
    }

    /// Records an explicit search that had nothing to search for.
    pub fn reject_empty_query(&mut self) -> bool {
        if self.last_error == Some(SearchError::QueryEmpty) {
            return false;
        }
        self.last_error = Some(SearchError::QueryEmpty);
        true
    }

    pub fn begin_search(&mut self, search_id: u64, request: SearchRequest, explicit: bool) -> bool {
        self.phase = SessionPhase::Searching;
        self.active_search_id = Some(search_id);
        self.active_explicit = explicit;
        self.results.clear();
        self.results_request = Some(request);
        self.page = 0;
        self.last_error = None;
        true
    }

    /// Only the newest search may land, and never one older than a search
    /// whose response was already applied.
    pub fn accepts(&self, search_id: u64) -> bool {
        self.active_search_id == Some(search_id)
            && self
                .last_applied_search_id
                .map_or(true, |last| search_id > last)
    }

    /// Applies a finished search. `Cancelled` only ever comes from a task that
    /// a newer search or input already replaced, so it never changes state.
    pub fn apply_message(&mut self, msg: SearchMessage) -> bool {
        let search_id = msg.search_id();
        if let SearchMessage::Cancelled { .. } = msg {
            tracing::debug!(search_id, "search cancelled");
            return false;
        }
        if !self.accepts(search_id) {
            tracing::debug!(search_id, "discarding stale search response");
            return false;
        }

        self.active_search_id = None;
        match msg {
            SearchMessage::Complete {
                items,
                host_available,
                ..
            } => {
                self.last_applied_search_id = Some(search_id);
                self.results = items;
                self.page = 0;
                self.host_available = host_available;
                self.phase = SessionPhase::Displaying;
                true
            }
            SearchMessage::Cancelled { .. } => false,
            SearchMessage::Error { error, .. } => {
                self.last_applied_search_id = Some(search_id);
                self.results.clear();
                self.results_request = None;
                self.page = 0;
                if error == SearchError::HostUnavailable {
                    self.host_available = false;
                }
                self.last_error = Some(error);
                self.phase = SessionPhase::Idle;
                true
            }
        }
    }

    /// Back to idle with nothing displayed.
    pub fn reset(&mut self) -> bool {
        let changed = self.phase != SessionPhase::Idle
            || !self.results.is_empty()
            || self.last_error.is_some();
        self.phase = SessionPhase::Idle;
        self.results.clear();
        self.results_request = None;
        self.active_search_id = None;
        self.page = 0;
        self.last_error = None;
        changed
    }

    pub fn page_count(&self) -> usize {
        self.results.len().div_ceil(self.page_size)
    }

    pub fn page_range(&self) -> Range<usize> {
        let start = (self.page * self.page_size).min(self.results.len());
        let end = (start + self.page_size).min(self.results.len());
        start..end
    }

    pub fn page_items(&self) -> &[SearchResultItem] {
        &self.results[self.page_range()]
    }

    pub fn next_page(&mut self) -> bool {
        if (self.page + 1) * self.page_size >= self.results.len() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn previous_page(&mut self) -> bool {
        if self.page == 0 {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Maps a row on the current page to its index in the full result list.
    pub fn absolute_index(&self, visible_index: usize) -> Option<usize> {
        let range = self.page_range();
        let index = range.start + visible_index;
        (index < range.end).then_some(index)
    }

    pub fn snapshot(&self, words_before: usize, words_after: usize) -> SearchResultsSnapshot<'_> {
        let range = self.page_range();
        let occurrences = snippet::occurrence_indices(&self.results[..range.end]);
        let entries = range
            .map(|index| {
                let item = &self.results[index];
                ResultEntry {
                    index,
                    item,
                    window: snippet::window(item, occurrences[index], words_before, words_after),
                }
            })
            .collect();

        SearchResultsSnapshot {
            query: &self.query,
            match_case: self.match_case,
            phase: self.phase,
            loading: self.loading(),
            host_available: self.host_available,
            page: self.page,
            page_count: self.page_count(),
            total: self.results.len(),
            entries,
            last_error: self.last_error.as_ref(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/search.rs"]
mod tests;
