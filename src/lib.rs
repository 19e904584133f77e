//! docfind - document search and highlight session
//!
//! Module layout:
//! - kernel: headless session core (state, actions, effects, snippet windows)
//! - kernel::services: document service port + adapters (query, assembler,
//!   highlights, in-memory document, settings, async runtime)
//! - app: controller wiring the store to the async runtime

pub mod app;
pub mod kernel;

pub use app::SearchController;
pub use kernel::services::adapters::MemoryDocument;
pub use kernel::services::ports::{
    DocumentService, SearchError, SearchRequest, SearchResultItem, SearchSettings,
};
