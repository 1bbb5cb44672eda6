//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! into a plain framebuffer that is diffed and flushed to the terminal, with
//! no widget toolkit in between.
//!
//! - [`fb`]: styled character framebuffer
//! - [`palette`]: tile colours by block value
//! - [`game_view`]: snapshot to framebuffer (board, landing preview, side panel, overlays)
//! - [`renderer`]: crossterm output with run-length diffing
//! - [`throttle`]: skip redraws of unchanged static screens

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;
pub mod throttle;

pub use falling_2048_core as core;
pub use falling_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use palette::{tile_colors, TileColors};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use throttle::{is_static, snapshot_fingerprint, RenderThrottle};
