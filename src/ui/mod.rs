//! User Interface module
//!
//! Terminal UI using ratatui.

pub mod app;
pub mod input;
pub mod widgets;

pub use app::App;
pub use input::InputAction;
