//! Headless component engines.
//!
//! Each engine lives in its own module with:
//! - `state.rs` - the state type and its transitions
//! - `events.rs` - intent handlers that gate clicks and emit events
//! - `mod.rs` - public exports
//!
//! Engines own view state only; data and rendering stay with the caller.

pub mod calendar;
pub mod selection;
pub mod table;

pub use selection::{Selection, SelectionMode};
