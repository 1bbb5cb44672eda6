//! Falling 2048 (workspace facade crate).
//!
//! Re-exports the engine and its terminal front end under one
//! `falling_2048::{core,input,persist,term,types}` namespace; the
//! implementation lives in dedicated crates under `crates/`.

pub mod config;

pub use falling_2048_core as core;
pub use falling_2048_input as input;
pub use falling_2048_persist as persist;
pub use falling_2048_term as term;
pub use falling_2048_types as types;
