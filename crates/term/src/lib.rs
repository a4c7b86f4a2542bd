//! Terminal rendering layer.
//!
//! Renders the game into a plain framebuffer and flushes it to the terminal
//! with crossterm, diffing frames so only changed runs are rewritten. No
//! widget library; the well is drawn cell by cell with precise control over
//! aspect ratio (2 chars wide per board cell).

pub mod fb;
pub mod particles;
pub mod renderer;
pub mod view;

pub use brickdrop_core as core;
pub use brickdrop_types as types;

pub use fb::{Cell, Frame, Rgb, Style};
pub use particles::ParticleField;
pub use renderer::Screen;
pub use view::{draw_banner, draw_scoreboard, BoardLayout, GameView, ScoreRow, Viewport};
