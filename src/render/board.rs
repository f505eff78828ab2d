//! Retained board model
//!
//! Records what the controller asked to be displayed. The terminal UI
//! draws from this every frame.

use crate::game::{Card, Symbol};

use super::surface::{CardFace, RenderSurface, VisualState};

/// One rendered card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardCell {
    pub position: usize,
    /// Underlying symbol, attached but not shown until the face says so
    pub symbol: Symbol,
    pub face: CardFace,
    pub visual: VisualState,
}

/// Display state of the whole board
#[derive(Debug, Clone, Default)]
pub struct BoardView {
    cells: Vec<BoardCell>,
    moves: u32,
    seconds: u64,
    /// Win notification waiting to be dismissed
    win_banner: Option<String>,
    /// How many win notifications were received in total
    win_notifications: u32,
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[BoardCell] {
        &self.cells
    }

    pub fn cell(&self, position: usize) -> Option<&BoardCell> {
        self.cells.get(position)
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn win_banner(&self) -> Option<&str> {
        self.win_banner.as_deref()
    }

    pub fn dismiss_win(&mut self) {
        self.win_banner = None;
    }

    pub fn win_notifications(&self) -> u32 {
        self.win_notifications
    }

    fn cell_mut(&mut self, position: usize) -> Option<&mut BoardCell> {
        let cell = self.cells.get_mut(position);
        if cell.is_none() {
            log::warn!("Render command for unknown card {}", position);
        }
        cell
    }
}

impl RenderSurface for BoardView {
    fn render_board(&mut self, cards: &[Card]) {
        self.cells = cards
            .iter()
            .map(|card| BoardCell {
                position: card.position,
                symbol: card.symbol,
                face: CardFace::Placeholder,
                visual: VisualState::Default,
            })
            .collect();
    }

    fn set_card_face(&mut self, position: usize, face: CardFace) {
        if let Some(cell) = self.cell_mut(position) {
            cell.face = face;
        }
    }

    fn set_card_visual_state(&mut self, position: usize, state: VisualState) {
        if let Some(cell) = self.cell_mut(position) {
            cell.visual = state;
        }
    }

    fn clear_board(&mut self) {
        self.cells.clear();
        self.win_banner = None;
    }

    fn update_move_counter(&mut self, moves: u32) {
        self.moves = moves;
    }

    fn update_time_counter(&mut self, seconds: u64) {
        self.seconds = seconds;
    }

    fn notify_win(&mut self, message: &str) {
        self.win_notifications += 1;
        self.win_banner = Some(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Deck;

    #[test]
    fn test_render_board_hides_faces() {
        let mut view = BoardView::new();
        view.render_board(&Deck::ordered().deal());

        assert_eq!(view.cells().len(), 12);
        assert!(view.cells().iter().all(|c| c.face == CardFace::Placeholder));
        assert_eq!(view.cell(3).map(|c| c.symbol), Some(Symbol::HeartEyes));
    }

    #[test]
    fn test_clear_board_drops_banner() {
        let mut view = BoardView::new();
        view.render_board(&Deck::ordered().deal());
        view.notify_win("yay");
        assert_eq!(view.win_banner(), Some("yay"));

        view.clear_board();
        assert!(view.cells().is_empty());
        assert!(view.win_banner().is_none());
        assert_eq!(view.win_notifications(), 1);
    }

    #[test]
    fn test_unknown_position_ignored() {
        let mut view = BoardView::new();
        view.set_card_face(4, CardFace::Placeholder);
        assert!(view.cells().is_empty());
    }
}
