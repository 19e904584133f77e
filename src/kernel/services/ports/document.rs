//! Document service contract.
//!
//! The live document belongs to the host. Everything the search core gets back
//! from a query is an opaque [`MatchHandle`] that is only meaningful to the
//! document generation that produced it; handles are resolved to plain text in
//! one batch and never kept past the search call.

use super::runtime::BoxFuture;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, DocumentError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The host document is not loaded (add-in running outside the host).
    Unavailable,
    /// A handle from an older document generation was passed back in.
    StaleHandle,
    /// The host rejected the call.
    Rejected(String),
    Timeout(Duration),
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::Unavailable => write!(f, "Document host is not available"),
            DocumentError::StaleHandle => write!(f, "Match handle no longer refers to the document"),
            DocumentError::Rejected(msg) => write!(f, "Document call rejected: {}", msg),
            DocumentError::Timeout(after) => {
                write!(f, "Document call timed out after {}ms", after.as_millis())
            }
        }
    }
}

impl std::error::Error for DocumentError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryOptions {
    pub match_case: bool,
    pub match_whole_word: bool,
}

impl QueryOptions {
    pub fn whole_word(match_case: bool) -> Self {
        Self {
            match_case,
            match_whole_word: true,
        }
    }

    pub fn partial(match_case: bool) -> Self {
        Self {
            match_case,
            match_whole_word: false,
        }
    }
}

/// Located span in the live document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchHandle {
    generation: u64,
    paragraph: usize,
    start: usize,
    end: usize,
}

impl MatchHandle {
    pub fn new(generation: u64, paragraph: usize, start: usize, end: usize) -> Self {
        Self {
            generation,
            paragraph,
            start,
            end,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn paragraph(&self) -> usize {
        self.paragraph
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }
}

/// Text copied out of a handle: the matched span and its first enclosing paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMatch {
    pub text: String,
    pub paragraph_text: String,
}

/// Host document object model as seen by the search core.
///
/// Every call may suspend. `search` returns handles in document order.
/// `resolve` answers a whole batch in one round trip and returns one entry per
/// handle, in the same order.
pub trait DocumentService: Send + Sync {
    fn is_available(&self) -> bool;

    fn search(&self, query: String, options: QueryOptions)
        -> BoxFuture<'_, Result<Vec<MatchHandle>>>;

    fn resolve(&self, handles: Vec<MatchHandle>) -> BoxFuture<'_, Result<Vec<ResolvedMatch>>>;

    /// Moves the host cursor/view to the handle.
    fn select(&self, handle: MatchHandle) -> BoxFuture<'_, Result<()>>;

    /// `None` removes the highlight from the range.
    fn set_highlight(&self, handle: MatchHandle, color: Option<String>) -> BoxFuture<'_, Result<()>>;

    /// Sets the highlight colour over the whole body range in one call.
    fn set_body_highlight(&self, color: Option<String>) -> BoxFuture<'_, Result<()>>;

    /// Appends paragraphs to the end of the body. Outstanding handles become stale.
    fn insert_paragraphs(&self, paragraphs: Vec<String>) -> BoxFuture<'_, Result<usize>>;
}
