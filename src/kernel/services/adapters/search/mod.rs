//! Search adapters
//!
//! - DocumentQuery: staged whole-word / partial query against the document
//! - ResultAssembler: handles → detached result items
//! - SearchService: clear → search → highlight → assemble

mod assemble;
mod query;
mod service;

pub use assemble::ResultAssembler;
pub use query::DocumentQuery;
pub use service::{SearchService, SearchTask};
