//! User-visible notices (toast equivalents). Rendering belongs to the UI.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: Option<String>,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn enter_search_term() -> Self {
        Self::new(NoticeLevel::Warning, "Enter a search term")
    }

    pub fn host_unavailable(action: &str) -> Self {
        Self::new(NoticeLevel::Info, "Connect to the document host")
            .with_description(format!("{} only works while a document is open.", action))
    }

    pub fn no_matches() -> Self {
        Self::new(NoticeLevel::Info, "No matches found")
    }

    pub fn search_failed(error: &impl std::fmt::Display) -> Self {
        Self::new(NoticeLevel::Error, "Search failed").with_description(error.to_string())
    }

    pub fn highlight_failed(error: &impl std::fmt::Display) -> Self {
        Self::new(NoticeLevel::Error, "Highlight failed").with_description(error.to_string())
    }

    pub fn sample_inserted() -> Self {
        Self::new(NoticeLevel::Success, "Sample text inserted").with_description(
            "Search for \"employee\", \"document\", \"search\", \"sample\", or \"Word\" to test.",
        )
    }

    pub fn insert_failed(error: &impl std::fmt::Display) -> Self {
        Self::new(NoticeLevel::Error, "Insert failed").with_description(error.to_string())
    }
}
