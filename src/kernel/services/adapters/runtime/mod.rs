//! Async runtime adapter: runs document effects and posts the outcome back on
//! the session bus.

mod runtime;

pub use runtime::AsyncRuntime;
