//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the session (kernel-facing).
//! - `adapters`: document/runtime specific implementations (async).

pub mod adapters;
pub mod bus;
pub mod ports;

pub use bus::{session_bus, SessionBusReceiver, SessionBusSender, SessionMessage};
