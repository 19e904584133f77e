use super::document::DocumentError;
use serde::Serialize;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    HostUnavailable,
    InvalidIndex { index: usize, len: usize },
    QueryEmpty,
    ServiceCallFailed(DocumentError),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::HostUnavailable => write!(f, "Document host is not available"),
            SearchError::InvalidIndex { index, len } => {
                write!(f, "Result index {} out of range (0..{})", index, len)
            }
            SearchError::QueryEmpty => write!(f, "Search query is empty"),
            SearchError::ServiceCallFailed(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::ServiceCallFailed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DocumentError> for SearchError {
    fn from(e: DocumentError) -> Self {
        match e {
            DocumentError::Unavailable => SearchError::HostUnavailable,
            other => SearchError::ServiceCallFailed(other),
        }
    }
}

/// One search invocation. The query is stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    query: String,
    match_case: bool,
    prefer_whole_word: bool,
}

impl SearchRequest {
    pub fn new(query: &str, match_case: bool, prefer_whole_word: bool) -> Self {
        Self {
            query: query.trim().to_string(),
            match_case,
            prefer_whole_word,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn match_case(&self) -> bool {
        self.match_case
    }

    pub fn prefer_whole_word(&self) -> bool {
        self.prefer_whole_word
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }
}

/// Snapshot of one match, detached from the live document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResultItem {
    pub paragraph_text: String,
    pub match_text: String,
}

impl SearchResultItem {
    pub fn new(paragraph_text: impl Into<String>, match_text: impl Into<String>) -> Self {
        Self {
            paragraph_text: paragraph_text.into(),
            match_text: match_text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMessage {
    Complete {
        search_id: u64,
        items: Vec<SearchResultItem>,
        host_available: bool,
    },
    /// The task was superseded before it finished. Discarded by the session.
    Cancelled {
        search_id: u64,
    },
    Error {
        search_id: u64,
        error: SearchError,
    },
}

impl SearchMessage {
    pub fn search_id(&self) -> u64 {
        match self {
            SearchMessage::Complete { search_id, .. }
            | SearchMessage::Cancelled { search_id }
            | SearchMessage::Error { search_id, .. } => *search_id,
        }
    }
}
