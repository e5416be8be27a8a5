//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the board snapshot is drawn into
//! a plain framebuffer of styled cells, which a crossterm-backed renderer
//! flushes to the terminal. No widget/layout framework.
//!
//! Goals:
//! - Keep `core` deterministic and testable (the view is pure)
//! - Precise control over glyphs and aspect ratio (2 columns per board cell)

pub mod fb;
pub mod renderer;
pub mod view;

pub use clusterfall_core as core;
pub use clusterfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_frame_into, TerminalRenderer};
pub use view::{BoardView, Viewport};
