//! Search session controller.
//!
//! Owns the store and the async runtime: UI events become actions, the store
//! reduces them into effects, effects run on the runtime and their outcomes
//! come back over the session bus as further actions.

use crate::kernel::services::adapters::runtime::AsyncRuntime;
use crate::kernel::services::ports::{DocumentService, SearchSettings};
use crate::kernel::services::{session_bus, SessionBusReceiver, SessionMessage};
use crate::kernel::{Action, Effect, Notice, SearchResultsSnapshot, SearchState, Store};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::error::TryRecvError;

const MAX_BUS_DRAIN_PER_TICK: usize = 256;

pub struct SearchController {
    store: Store,
    runtime: AsyncRuntime,
    rx: SessionBusReceiver,
    notices: Vec<Notice>,
}

impl SearchController {
    pub fn new(
        handle: Handle,
        document: Arc<dyn DocumentService>,
        settings: SearchSettings,
    ) -> Self {
        let (bus, rx) = session_bus();
        let runtime = AsyncRuntime::new(handle, bus, document, &settings);
        let mut controller = Self {
            store: Store::new(settings),
            runtime,
            rx,
            notices: Vec::new(),
        };
        let available = controller.runtime.is_host_available();
        controller.dispatch(Action::HostAvailability(available));
        controller
    }

    pub fn state(&self) -> &SearchState {
        self.store.state()
    }

    pub fn snapshot(&self) -> SearchResultsSnapshot<'_> {
        self.store.snapshot()
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn set_query(&mut self, text: &str) -> bool {
        self.dispatch(Action::InputChanged(text.to_string()))
    }

    pub fn set_match_case(&mut self, match_case: bool) -> bool {
        self.dispatch(Action::SetMatchCase(match_case))
    }

    pub fn search_now(&mut self) -> bool {
        self.dispatch(Action::SearchNow)
    }

    pub fn next_page(&mut self) -> bool {
        self.dispatch(Action::NextPage)
    }

    pub fn previous_page(&mut self) -> bool {
        self.dispatch(Action::PreviousPage)
    }

    pub fn click_result(&mut self, visible_index: usize) -> bool {
        self.dispatch(Action::ResultClicked { visible_index })
    }

    pub fn insert_sample(&mut self) -> bool {
        self.dispatch(Action::InsertSample)
    }

    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.state_changed
    }

    /// Waits for the next runtime outcome and applies it.
    /// Returns `None` once the bus is closed.
    pub async fn process_next(&mut self) -> Option<bool> {
        let msg = self.rx.recv().await?;
        Some(self.handle_message(msg))
    }

    /// Applies every outcome already queued, without waiting.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        for _ in 0..MAX_BUS_DRAIN_PER_TICK {
            match self.rx.try_recv() {
                Ok(msg) => changed |= self.handle_message(msg),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        changed
    }

    /// Processes outcomes until no search is in flight.
    pub async fn settle(&mut self) -> bool {
        let mut changed = false;
        while self.state().loading() {
            match self.process_next().await {
                Some(c) => changed |= c,
                None => break,
            }
        }
        changed
    }

    fn handle_message(&mut self, msg: SessionMessage) -> bool {
        match msg {
            SessionMessage::Action(action) => self.dispatch(action),
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ScheduleDebounce { seq } => self.runtime.schedule_debounce(seq),
            Effect::CancelDebounce => self.runtime.cancel_debounce(),
            Effect::CancelSearch => self.runtime.cancel_search(),
            Effect::ClearHighlights => self.runtime.clear_highlights(),
            Effect::StartSearch {
                search_id,
                request,
                limit,
                highlight_all,
                explicit,
            } => self
                .runtime
                .start_search(search_id, request, limit, highlight_all, explicit),
            Effect::HighlightResult { request, index } => {
                self.runtime.highlight_result(request, index)
            }
            Effect::InsertSample => self.runtime.insert_sample(),
            Effect::Notify(notice) => {
                tracing::debug!(title = %notice.title, level = ?notice.level, "notice");
                self.notices.push(notice);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/controller.rs"]
mod tests;
