//! Service adapters: document and runtime specific implementations.

pub mod highlight;
pub mod memory;
pub mod runtime;
pub mod search;
pub mod settings;

pub use highlight::HighlightManager;
pub use memory::{HighlightSpan, MemoryDocument};
pub use runtime::AsyncRuntime;
pub use search::{DocumentQuery, ResultAssembler, SearchService, SearchTask};
pub use settings::{
    ensure_log_dir, ensure_settings_file, get_log_dir, get_settings_path, load_settings,
    load_settings_from,
};
