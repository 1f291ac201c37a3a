//! Input module - translates terminal key events into game actions.
//!
//! The mapping is the only place that knows key names; the rest of the
//! application deals in [`GameAction`](tui_snake_types::GameAction)
//! values.

pub mod map;

pub use map::{handle_key_event, should_quit};
