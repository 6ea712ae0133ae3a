//! Terminal game renderer.
//!
//! A small rendering layer for terminal gameplay. It avoids widget/layout
//! frameworks and renders into a simple framebuffer that is then flushed to
//! the terminal.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: pure snapshot → framebuffer mapping (2 columns per board cell)
//! - [`renderer`]: crossterm backend with diff flushing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
