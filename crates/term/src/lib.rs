//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the game view draws into a
//! plain framebuffer of styled glyphs, and the terminal renderer flushes
//! framebuffers to the real terminal with diff-based redraws.
//!
//! Goals:
//! - Keep the simulation core free of any I/O
//! - Make the view pure and unit-testable
//! - Control the cell aspect ratio precisely (2 columns per grid cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
