//! Service ports: traits + data contracts.

pub mod document;
pub mod runtime;
pub mod search;
pub mod settings;

pub use document::{
    DocumentError, DocumentService, MatchHandle, QueryOptions, ResolvedMatch,
    Result as DocumentResult,
};
pub use runtime::BoxFuture;
pub use search::{Result as SearchResult, SearchError, SearchMessage, SearchRequest, SearchResultItem};
pub use settings::SearchSettings;
