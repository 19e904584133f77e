use super::notice::Notice;
use super::search::SearchResultsSnapshot;
use super::{Action, Effect, SearchState};
use crate::kernel::services::ports::{SearchError, SearchMessage, SearchRequest, SearchSettings};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn notify(notice: Notice, state_changed: bool) -> Self {
        Self {
            effects: vec![Effect::Notify(notice)],
            state_changed,
        }
    }
}

pub struct Store {
    state: SearchState,
    settings: SearchSettings,
    next_search_id: u64,
}

impl Store {
    pub fn new(settings: SearchSettings) -> Self {
        Self {
            state: SearchState::new(settings.page_size()),
            settings,
            next_search_id: 0,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    pub fn snapshot(&self) -> SearchResultsSnapshot<'_> {
        self.state
            .snapshot(self.settings.words_before, self.settings.words_after)
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::InputChanged(text) => {
                if !self.state.set_query(&text) {
                    return DispatchResult::unchanged();
                }
                if !self.state.has_query() {
                    self.state.reset();
                    return DispatchResult {
                        effects: vec![
                            Effect::CancelDebounce,
                            Effect::CancelSearch,
                            Effect::ClearHighlights,
                        ],
                        state_changed: true,
                    };
                }
                self.restart_debounce()
            }
            Action::SetMatchCase(match_case) => {
                if !self.state.set_match_case(match_case) {
                    return DispatchResult::unchanged();
                }
                self.match_case_changed()
            }
            Action::ToggleMatchCase => {
                let match_case = !self.state.match_case;
                self.state.set_match_case(match_case);
                self.match_case_changed()
            }
            Action::SearchNow => {
                if !self.state.has_query() {
                    let changed = self.state.reject_empty_query();
                    return DispatchResult::notify(Notice::enter_search_term(), changed);
                }
                let mut result = self.start_search(true);
                result
                    .effects
                    .splice(0..0, [Effect::CancelDebounce, Effect::CancelSearch]);
                result
            }
            Action::DebounceElapsed { seq } => {
                if !self.state.is_current_debounce(seq) {
                    tracing::trace!(seq, current = self.state.debounce_seq, "stale debounce");
                    return DispatchResult::unchanged();
                }
                self.start_search(false)
            }
            Action::SearchMessage(msg) => self.reduce_search_message(msg),
            Action::NextPage => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.next_page(),
            },
            Action::PreviousPage => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.previous_page(),
            },
            Action::ResultClicked { visible_index } => {
                let Some(index) = self.state.absolute_index(visible_index) else {
                    tracing::warn!(
                        visible_index,
                        page = self.state.page,
                        total = self.state.results.len(),
                        "result click outside the current page"
                    );
                    return DispatchResult::unchanged();
                };
                let Some(request) = self.state.results_request.clone() else {
                    return DispatchResult::unchanged();
                };
                DispatchResult {
                    effects: vec![Effect::HighlightResult { request, index }],
                    state_changed: false,
                }
            }
            Action::HighlightFailed(error) => match error {
                SearchError::InvalidIndex { index, len } => {
                    tracing::warn!(index, len, "highlight target no longer in the document");
                    DispatchResult::unchanged()
                }
                SearchError::HostUnavailable => {
                    let changed = self.state.set_host_available(false);
                    DispatchResult::notify(Notice::host_unavailable("Highlighting"), changed)
                }
                other => DispatchResult::notify(Notice::highlight_failed(&other), false),
            },
            Action::InsertSample => DispatchResult {
                effects: vec![Effect::InsertSample],
                state_changed: false,
            },
            Action::SampleInserted(result) => match result {
                Ok(count) => {
                    tracing::info!(paragraphs = count, "sample text inserted");
                    let changed = self.state.set_host_available(true);
                    DispatchResult::notify(Notice::sample_inserted(), changed)
                }
                Err(SearchError::HostUnavailable) => {
                    let changed = self.state.set_host_available(false);
                    DispatchResult::notify(Notice::host_unavailable("Insert sample text"), changed)
                }
                Err(error) => DispatchResult::notify(Notice::insert_failed(&error), false),
            },
            Action::HostAvailability(available) => DispatchResult {
                effects: Vec::new(),
                state_changed: self.state.set_host_available(available),
            },
        }
    }

    fn restart_debounce(&mut self) -> DispatchResult {
        let seq = self.state.begin_debounce();
        DispatchResult {
            effects: vec![Effect::CancelSearch, Effect::ScheduleDebounce { seq }],
            state_changed: true,
        }
    }

    fn match_case_changed(&mut self) -> DispatchResult {
        if !self.state.has_query() {
            return DispatchResult {
                effects: Vec::new(),
                state_changed: true,
            };
        }
        self.restart_debounce()
    }

    fn start_search(&mut self, explicit: bool) -> DispatchResult {
        self.next_search_id += 1;
        let search_id = self.next_search_id;
        let request = SearchRequest::new(
            &self.state.query,
            self.state.match_case,
            self.settings.prefer_whole_word,
        );
        tracing::debug!(search_id, query = %request.query(), explicit, "search scheduled");

        let state_changed = self.state.begin_search(search_id, request.clone(), explicit);
        DispatchResult {
            effects: vec![Effect::StartSearch {
                search_id,
                request,
                limit: self.settings.result_limit,
                highlight_all: explicit,
                explicit,
            }],
            state_changed,
        }
    }

    fn reduce_search_message(&mut self, msg: SearchMessage) -> DispatchResult {
        if !self.state.accepts(msg.search_id()) {
            tracing::debug!(search_id = msg.search_id(), "ignoring superseded search");
            return DispatchResult::unchanged();
        }

        let notice = match &msg {
            SearchMessage::Complete { items, .. }
                if items.is_empty() && self.state.active_explicit =>
            {
                Some(Notice::no_matches())
            }
            SearchMessage::Error {
                error: SearchError::HostUnavailable,
                ..
            } => Some(Notice::host_unavailable("Search")),
            SearchMessage::Error { error, .. } => Some(Notice::search_failed(error)),
            _ => None,
        };

        DispatchResult {
            effects: notice.map(Effect::Notify).into_iter().collect(),
            state_changed: self.state.apply_message(msg),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
