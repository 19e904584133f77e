use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_search_timeout_ms")]
    pub search_timeout_ms: u64,
    /// Inline "as you type" preview tier.
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,
    /// Full result set kept for paging.
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_context_words")]
    pub words_before: usize,
    #[serde(default = "default_context_words")]
    pub words_after: usize,
    #[serde(default = "default_prefer_whole_word")]
    pub prefer_whole_word: bool,
    #[serde(default = "default_highlight_color")]
    pub highlight_color: String,
}

fn default_debounce_ms() -> u64 {
    450
}

fn default_search_timeout_ms() -> u64 {
    5_000
}

fn default_preview_limit() -> usize {
    3
}

fn default_result_limit() -> usize {
    10
}

fn default_page_size() -> usize {
    3
}

fn default_context_words() -> usize {
    5
}

fn default_prefer_whole_word() -> bool {
    true
}

fn default_highlight_color() -> String {
    "yellow".to_string()
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            search_timeout_ms: default_search_timeout_ms(),
            preview_limit: default_preview_limit(),
            result_limit: default_result_limit(),
            page_size: default_page_size(),
            words_before: default_context_words(),
            words_after: default_context_words(),
            prefer_whole_word: default_prefer_whole_word(),
            highlight_color: default_highlight_color(),
        }
    }
}

impl SearchSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn search_timeout(&self) -> Duration {
        Duration::from_millis(self.search_timeout_ms)
    }

    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }
}
