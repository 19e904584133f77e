use crate::kernel::notice::Notice;
use crate::kernel::services::ports::SearchRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ScheduleDebounce {
        seq: u64,
    },
    CancelDebounce,
    /// Marks the in-flight search (if any) as superseded.
    CancelSearch,
    /// Best-effort; failures are only logged.
    ClearHighlights,
    StartSearch {
        search_id: u64,
        request: SearchRequest,
        limit: usize,
        highlight_all: bool,
        explicit: bool,
    },
    HighlightResult {
        request: SearchRequest,
        index: usize,
    },
    InsertSample,
    Notify(Notice),
}
