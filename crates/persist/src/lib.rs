//! Persistence adapters for the engine.
//!
//! - [`JsonScoreStore`]: per-tier best scores in a small JSON file, plugged into
//!   the engine through [`BestScoreStore`](crate::core::BestScoreStore)
//! - [`EventLog`]: append-only JSON-lines record of turn events
//!
//! Neither type is required by the engine; a session without them keeps its
//! best score in memory only.

pub mod event_log;
pub mod scores;

pub use falling_2048_core as core;
pub use falling_2048_types as types;

pub use event_log::{EventLog, LogRecord};
pub use scores::{JsonScoreStore, ScoreFile};
