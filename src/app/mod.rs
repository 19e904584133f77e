//! Application layer: the search session controller.

pub mod controller;

pub use controller::SearchController;
