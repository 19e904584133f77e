use crate::kernel::sample;
use crate::kernel::services::adapters::highlight::HighlightManager;
use crate::kernel::services::adapters::search::{SearchService, SearchTask};
use crate::kernel::services::bus::SessionBusSender;
use crate::kernel::services::ports::{
    DocumentError, DocumentService, SearchError, SearchMessage, SearchRequest, SearchSettings,
};
use crate::kernel::Action;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub struct AsyncRuntime {
    handle: Handle,
    bus: SessionBusSender,
    document: Arc<dyn DocumentService>,
    search: Arc<SearchService>,
    debounce_delay: Duration,
    timeout: Duration,
    debounce: Option<JoinHandle<()>>,
    active_search: Option<SearchTask>,
    active_highlight: Option<SearchTask>,
    next_highlight_id: u64,
}

impl AsyncRuntime {
    pub fn new(
        handle: Handle,
        bus: SessionBusSender,
        document: Arc<dyn DocumentService>,
        settings: &SearchSettings,
    ) -> Self {
        let highlighter = Arc::new(HighlightManager::new(
            document.clone(),
            settings.highlight_color.clone(),
        ));
        let search = Arc::new(SearchService::new(
            document.clone(),
            highlighter,
            settings.preview_limit,
        ));
        Self {
            handle,
            bus,
            document,
            search,
            debounce_delay: settings.debounce(),
            timeout: settings.search_timeout(),
            debounce: None,
            active_search: None,
            active_highlight: None,
            next_highlight_id: 0,
        }
    }

    pub fn is_host_available(&self) -> bool {
        self.document.is_available()
    }

    /// Single-slot delayed task: a new schedule replaces the pending one.
    pub fn schedule_debounce(&mut self, seq: u64) {
        self.cancel_debounce();
        let bus = self.bus.clone();
        let delay = self.debounce_delay;
        self.debounce = Some(self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = bus.send_action(Action::DebounceElapsed { seq });
        }));
    }

    pub fn cancel_debounce(&mut self) {
        if let Some(task) = self.debounce.take() {
            task.abort();
        }
    }

    /// Stops the in-flight search and any pending result highlight from
    /// touching the document again.
    pub fn cancel_search(&mut self) {
        if let Some(task) = self.active_search.take() {
            tracing::debug!(search_id = task.id(), "search superseded");
            task.cancel();
        }
        self.cancel_highlight();
    }

    fn cancel_highlight(&mut self) {
        if let Some(task) = self.active_highlight.take() {
            tracing::debug!(highlight_id = task.id(), "result highlight superseded");
            task.cancel();
        }
    }

    pub fn start_search(
        &mut self,
        search_id: u64,
        request: SearchRequest,
        limit: usize,
        highlight_all: bool,
        explicit: bool,
    ) {
        self.cancel_search();
        let task = SearchTask::new(search_id);
        let cancelled = task.cancelled_flag();
        self.active_search = Some(task);

        let bus = self.bus.clone();
        let search = self.search.clone();
        let timeout = self.timeout;
        self.handle.spawn(async move {
            let started = Instant::now();
            let outcome = tokio::time::timeout(
                timeout,
                search.run(&request, limit, highlight_all, &cancelled),
            )
            .await
            .unwrap_or(Err(SearchError::ServiceCallFailed(DocumentError::Timeout(
                timeout,
            ))));
            let elapsed_ms = started.elapsed().as_millis() as u64;

            let msg = match outcome {
                Ok(Some(items)) => {
                    tracing::info!(
                        search_id,
                        query = %request.query(),
                        matches = items.len(),
                        elapsed_ms,
                        "search complete"
                    );
                    SearchMessage::Complete {
                        search_id,
                        items,
                        host_available: true,
                    }
                }
                Ok(None) => SearchMessage::Cancelled { search_id },
                Err(SearchError::HostUnavailable) if !explicit => {
                    tracing::debug!(search_id, "no document host, passive search yields nothing");
                    SearchMessage::Complete {
                        search_id,
                        items: Vec::new(),
                        host_available: false,
                    }
                }
                Err(error) => {
                    tracing::warn!(search_id, error = %error, elapsed_ms, "search failed");
                    SearchMessage::Error { search_id, error }
                }
            };
            let _ = bus.send_action(Action::SearchMessage(msg));
        });
    }

    pub fn highlight_result(&mut self, request: SearchRequest, index: usize) {
        self.cancel_highlight();
        self.next_highlight_id += 1;
        let task = SearchTask::new(self.next_highlight_id);
        let cancelled = task.cancelled_flag();
        self.active_highlight = Some(task);

        let bus = self.bus.clone();
        let search = self.search.clone();
        let timeout = self.timeout;
        self.handle.spawn(async move {
            let outcome = tokio::time::timeout(
                timeout,
                search.highlight_result(&request, index, &cancelled),
            )
            .await
            .unwrap_or(Err(SearchError::ServiceCallFailed(DocumentError::Timeout(
                timeout,
            ))));
            if let Err(error) = outcome {
                let _ = bus.send_action(Action::HighlightFailed(error));
            }
        });
    }

    pub fn clear_highlights(&self) {
        let search = self.search.clone();
        self.handle.spawn(async move {
            if let Err(e) = search.highlighter().clear_all().await {
                tracing::warn!(error = %e, "clearing highlights failed");
            }
        });
    }

    pub fn insert_sample(&self) {
        let bus = self.bus.clone();
        let document = self.document.clone();
        let timeout = self.timeout;
        self.handle.spawn(async move {
            let result = if document.is_available() {
                tokio::time::timeout(timeout, document.insert_paragraphs(sample::sample_paragraphs()))
                    .await
                    .unwrap_or(Err(DocumentError::Timeout(timeout)))
                    .map_err(SearchError::from)
            } else {
                Err(SearchError::HostUnavailable)
            };
            let _ = bus.send_action(Action::SampleInserted(result));
        });
    }
}

impl Drop for AsyncRuntime {
    fn drop(&mut self) {
        self.cancel_debounce();
        self.cancel_search();
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/runtime.rs"]
mod tests;
