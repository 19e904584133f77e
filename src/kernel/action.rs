use crate::kernel::services::ports::{SearchError, SearchMessage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    InputChanged(String),
    SetMatchCase(bool),
    ToggleMatchCase,
    SearchNow,
    DebounceElapsed {
        seq: u64,
    },
    SearchMessage(SearchMessage),
    NextPage,
    PreviousPage,
    ResultClicked {
        visible_index: usize,
    },
    HighlightFailed(SearchError),
    InsertSample,
    SampleInserted(Result<usize, SearchError>),
    HostAvailability(bool),
}
