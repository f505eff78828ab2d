//! Rendering abstraction layer
//!
//! The controller talks to a [`RenderSurface`]. [`BoardView`] is the
//! surface the terminal UI draws from.

pub mod board;
pub mod mode;
pub mod surface;

pub use board::{BoardCell, BoardView};
pub use mode::{detect_glyph_mode, GlyphMode};
pub use surface::{CardFace, RenderSurface, VisualState};
