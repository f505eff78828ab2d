//! Main UI Application
//!
//! Draws the board from the [`BoardView`] surface and turns player input
//! into controller calls.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::config::GameConfig;
use crate::game::{Clock, Game, SYMBOL_COUNT};
use crate::render::{detect_glyph_mode, BoardView, GlyphMode};

use super::input::InputAction;
use super::widgets::{card_areas, grid_size, CardGridWidget, GridCursor};

/// Main UI application
pub struct App {
    /// Keyboard cursor on the board
    cursor: GridCursor,
    /// Cards per row
    columns: u16,
    /// Emoji or letter faces
    glyph_mode: GlyphMode,
    /// Where each card was last drawn, for mouse hit testing
    card_areas: Vec<Rect>,
}

impl App {
    pub fn new(config: &GameConfig) -> Self {
        let glyph_mode = config.glyph_mode.unwrap_or_else(detect_glyph_mode);
        log::info!("Using glyph mode: {}", glyph_mode.name());

        Self {
            cursor: GridCursor::default(),
            columns: config.columns.max(1),
            glyph_mode,
            card_areas: Vec::new(),
        }
    }

    pub fn cursor(&self) -> GridCursor {
        self.cursor
    }

    /// Apply an input action, returns true if should quit
    pub fn handle_action<C: Clock>(
        &mut self,
        action: InputAction,
        game: &mut Game<BoardView, C>,
    ) -> bool {
        if action == InputAction::Quit {
            return true;
        }

        // The win popup swallows one input, except for a reset
        if game.surface().win_banner().is_some() && action != InputAction::Reset {
            game.surface_mut().dismiss_win();
            return false;
        }

        let count = game.cards().len();
        match action {
            InputAction::MoveUp => self.cursor.move_up(),
            InputAction::MoveDown => self.cursor.move_down(self.columns, count),
            InputAction::MoveLeft => self.cursor.move_left(),
            InputAction::MoveRight => self.cursor.move_right(self.columns, count),
            InputAction::Select => {
                game.select_card(self.cursor.position(self.columns));
            }
            InputAction::Click { column, row } => {
                if let Some(position) = self.card_at(column, row) {
                    self.cursor = GridCursor::at(position, self.columns);
                    game.select_card(position);
                }
            }
            InputAction::Reset => game.reset_game(),
            InputAction::ToggleGlyphs => {
                self.glyph_mode = self.glyph_mode.toggled();
                log::info!("Switched to glyph mode: {}", self.glyph_mode.name());
            }
            InputAction::Quit => {}
        }

        false
    }

    /// Board position drawn at a screen cell
    fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        self.card_areas
            .iter()
            .position(|area| area.contains(Position::new(column, row)))
    }

    pub fn render<C: Clock>(&mut self, frame: &mut Frame, game: &Game<BoardView, C>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0]);
        self.render_board(frame, game, chunks[1]);
        self.render_status(frame, game, chunks[2]);
        self.render_help(frame, chunks[3]);

        if let Some(message) = game.surface().win_banner() {
            self.render_win_popup(frame, game, message);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            "Heartmatch",
            Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));

        frame.render_widget(title, area);
    }

    fn render_board<C: Clock>(&mut self, frame: &mut Frame, game: &Game<BoardView, C>, area: Rect) {
        let view = game.surface();
        let (width, height) = grid_size(view.cells().len(), self.columns);

        // Center the grid in the available space
        let board = Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y + area.height.saturating_sub(height) / 2,
            width.min(area.width),
            height.min(area.height),
        );

        self.card_areas = card_areas(board, view.cells().len(), self.columns);

        let grid = CardGridWidget::new(view)
            .columns(self.columns)
            .cursor(self.cursor)
            .glyph_mode(self.glyph_mode);
        frame.render_widget(grid, board);
    }

    fn render_status<C: Clock>(&self, frame: &mut Frame, game: &Game<BoardView, C>, area: Rect) {
        let view = game.surface();
        let pairs = game.matched().len() / 2;
        let label = Style::default().fg(Color::Gray);
        let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

        let line = Line::from(vec![
            Span::styled("Moves: ", label),
            Span::styled(view.moves().to_string(), value),
            Span::raw("   "),
            Span::styled("Time: ", label),
            Span::styled(format_time(view.seconds()), value),
            Span::raw("   "),
            Span::styled("Pairs: ", label),
            Span::styled(format!("{}/{}", pairs, SYMBOL_COUNT), value),
        ]);

        let status = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP));

        frame.render_widget(status, area);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let help = Paragraph::new(
            "[←↑↓→/hjkl] Move  [Enter/Space/Click] Flip  [r] Reset  [g] Glyphs  [q] Quit",
        )
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));

        frame.render_widget(help, area);
    }

    fn render_win_popup<C: Clock>(&self, frame: &mut Frame, game: &Game<BoardView, C>, message: &str) {
        let area = centered_rect(60, 40, frame.area());
        frame.render_widget(Clear, area);

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!(
                "{} moves in {}",
                game.moves(),
                format_time(game.elapsed_seconds())
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to continue, [r] to play again",
                Style::default().fg(Color::Gray),
            )),
        ];

        let popup = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" You Win "));

        frame.render_widget(popup, area);
    }
}

/// Format seconds as m:ss
fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Deck, FrameClock, GamePhase};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn setup() -> (App, Game<BoardView, FrameClock>) {
        let config = GameConfig {
            seed: Some(1),
            glyph_mode: Some(GlyphMode::Ascii),
            ..GameConfig::default()
        };
        let mut game = Game::new(BoardView::new(), FrameClock::new(), &config);
        game.start_with_deck(Deck::ordered());
        (App::new(&config), game)
    }

    fn draw(app: &mut App, game: &Game<BoardView, FrameClock>) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| app.render(frame, game)).unwrap();
        terminal
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(75), "1:15");
    }

    #[test]
    fn test_keyboard_select() {
        let (mut app, mut game) = setup();
        app.handle_action(InputAction::MoveRight, &mut game);
        app.handle_action(InputAction::Select, &mut game);
        assert_eq!(game.revealed(), &[1]);
    }

    #[test]
    fn test_click_selects_card() {
        let (mut app, mut game) = setup();
        draw(&mut app, &game);

        let area = app.card_areas[6];
        let quit = app.handle_action(
            InputAction::Click { column: area.x + 1, row: area.y + 1 },
            &mut game,
        );
        assert!(!quit);
        assert_eq!(game.revealed(), &[6]);
        assert_eq!(app.cursor().position(4), 6);
    }

    #[test]
    fn test_click_outside_board() {
        let (mut app, mut game) = setup();
        draw(&mut app, &game);
        app.handle_action(InputAction::Click { column: 0, row: 0 }, &mut game);
        assert!(game.revealed().is_empty());
    }

    #[test]
    fn test_quit() {
        let (mut app, mut game) = setup();
        assert!(app.handle_action(InputAction::Quit, &mut game));
    }

    #[test]
    fn test_win_popup_dismissed_by_key() {
        let (mut app, mut game) = setup();
        for pair in 0..6 {
            game.select_card(pair * 2);
            game.select_card(pair * 2 + 1);
        }
        game.update(Duration::from_millis(600));
        assert!(game.surface().win_banner().is_some());
        draw(&mut app, &game);

        app.handle_action(InputAction::MoveDown, &mut game);
        assert!(game.surface().win_banner().is_none());
        assert_eq!(app.cursor(), GridCursor::default());
    }

    #[test]
    fn test_win_popup_shows_hint() {
        let (mut app, mut game) = setup();
        for pair in 0..6 {
            game.select_card(pair * 2);
            game.select_card(pair * 2 + 1);
        }
        game.update(Duration::from_millis(600));

        let terminal = draw(&mut app, &game);
        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("Press any key to continue"));
    }

    #[test]
    fn test_reset_from_win_popup() {
        let (mut app, mut game) = setup();
        for pair in 0..6 {
            game.select_card(pair * 2);
            game.select_card(pair * 2 + 1);
        }
        game.update(Duration::from_millis(600));

        app.handle_action(InputAction::Reset, &mut game);
        assert!(game.surface().win_banner().is_none());
        assert_eq!(game.moves(), 0);
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_status_bar_rendered() {
        let (mut app, game) = setup();
        let terminal = draw(&mut app, &game);
        let buffer = terminal.backend().buffer();
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Moves: 0"));
        assert!(content.contains("Pairs: 0/6"));
    }
}
