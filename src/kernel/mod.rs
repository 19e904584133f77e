//! Headless search session core (state/action/effect).

pub mod action;
pub mod effect;
pub mod notice;
pub mod sample;
pub mod search;
pub mod services;
pub mod snippet;
pub mod store;

pub use action::Action;
pub use effect::Effect;
pub use notice::{Notice, NoticeLevel};
pub use search::{ResultEntry, SearchResultsSnapshot, SearchState, SessionPhase};
pub use snippet::SnippetWindow;
pub use store::{DispatchResult, Store};
