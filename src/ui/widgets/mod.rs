//! Custom ratatui widgets

pub mod card_grid;

pub use card_grid::{card_areas, grid_size, CardGridWidget, GridCursor};
