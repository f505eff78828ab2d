//! Render surface commands
//!
//! The game controller never draws anything itself. It issues these
//! commands and the surface decides how they look.

use crate::game::{Card, Symbol};

/// What a card currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFace {
    /// Face down, shown as "?"
    #[default]
    Placeholder,
    Symbol(Symbol),
}

/// Styling class of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualState {
    #[default]
    Default,
    Revealed,
    Matched,
}

/// Display collaborator of the game controller
pub trait RenderSurface {
    /// Draw every card face down, each tagged with its position and symbol
    fn render_board(&mut self, cards: &[Card]);

    fn set_card_face(&mut self, position: usize, face: CardFace);

    fn set_card_visual_state(&mut self, position: usize, state: VisualState);

    /// Remove all rendered cards
    fn clear_board(&mut self);

    fn update_move_counter(&mut self, moves: u32);

    fn update_time_counter(&mut self, seconds: u64);

    fn notify_win(&mut self, message: &str);
}
