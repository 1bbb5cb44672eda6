//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and tracks
//! the held fast-fall key, including terminals that never report key releases.

pub mod handler;
pub mod map;

pub use falling_2048_types as types;

pub use handler::FastFallKey;
pub use map::{handle_key_event, is_fast_fall_key, should_quit};
