//! Heartmatch - A terminal memory-matching card game
//!
//! Twelve face-down cards, six pairs of hearts. Turn two over at a time
//! and find every pair.

pub mod config;
pub mod game;
pub mod render;
pub mod ui;

// Re-export commonly used types
pub use config::GameConfig;
pub use game::{Game, GamePhase, SelectOutcome};
pub use render::{BoardView, RenderSurface};
