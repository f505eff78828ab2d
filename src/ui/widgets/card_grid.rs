//! Card grid widget for ratatui
//!
//! Lays the board out in rows of fixed-size cards.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::render::{BoardView, GlyphMode, VisualState};

/// Card width in cells, borders included
pub const CARD_WIDTH: u16 = 8;
/// Card height in cells, borders included
pub const CARD_HEIGHT: u16 = 3;
/// Gap between neighbouring cards
pub const CARD_GAP: u16 = 1;

/// Grid cursor position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridCursor {
    pub x: u16,
    pub y: u16,
}

impl GridCursor {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Board position under the cursor
    pub fn position(&self, columns: u16) -> usize {
        self.y as usize * columns as usize + self.x as usize
    }

    /// Cursor on a board position
    pub fn at(position: usize, columns: u16) -> Self {
        let columns = columns.max(1) as usize;
        Self {
            x: (position % columns) as u16,
            y: (position / columns) as u16,
        }
    }

    /// Move cursor up
    pub fn move_up(&mut self) {
        if self.y > 0 {
            self.y -= 1;
        }
    }

    /// Move cursor down, staying on an existing card
    pub fn move_down(&mut self, columns: u16, count: usize) {
        let below = Self::new(self.x, self.y + 1);
        if below.position(columns) < count {
            *self = below;
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.x > 0 {
            self.x -= 1;
        }
    }

    /// Move cursor right, staying on an existing card
    pub fn move_right(&mut self, columns: u16, count: usize) {
        let right = Self::new(self.x + 1, self.y);
        if right.x < columns && right.position(columns) < count {
            *self = right;
        }
    }
}

/// Total size of a grid of `count` cards
pub fn grid_size(count: usize, columns: u16) -> (u16, u16) {
    let columns = columns.max(1);
    let rows = count.div_ceil(columns as usize) as u16;
    let shown_columns = columns.min(count as u16);
    (
        (shown_columns * (CARD_WIDTH + CARD_GAP)).saturating_sub(CARD_GAP),
        (rows * (CARD_HEIGHT + CARD_GAP)).saturating_sub(CARD_GAP),
    )
}

/// Screen area of every card, indexed by board position. Cards that do
/// not fit inside `area` are left out.
pub fn card_areas(area: Rect, count: usize, columns: u16) -> Vec<Rect> {
    let columns = columns.max(1);
    (0..count)
        .map_while(|position| {
            let cursor = GridCursor::at(position, columns);
            let x = area.x + cursor.x * (CARD_WIDTH + CARD_GAP);
            let y = area.y + cursor.y * (CARD_HEIGHT + CARD_GAP);
            let rect = Rect::new(x, y, CARD_WIDTH, CARD_HEIGHT);
            (rect.right() <= area.right() && rect.bottom() <= area.bottom()).then_some(rect)
        })
        .collect()
}

/// Widget for rendering the board
pub struct CardGridWidget<'a> {
    view: &'a BoardView,
    cursor: Option<GridCursor>,
    columns: u16,
    glyph_mode: GlyphMode,
}

impl<'a> CardGridWidget<'a> {
    pub fn new(view: &'a BoardView) -> Self {
        Self {
            view,
            cursor: None,
            columns: 4,
            glyph_mode: GlyphMode::default(),
        }
    }

    pub fn cursor(mut self, cursor: GridCursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn columns(mut self, columns: u16) -> Self {
        self.columns = columns;
        self
    }

    pub fn glyph_mode(mut self, mode: GlyphMode) -> Self {
        self.glyph_mode = mode;
        self
    }
}

impl Widget for CardGridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cells = self.view.cells();
        let areas = card_areas(area, cells.len(), self.columns);
        let selected = self.cursor.map(|c| c.position(self.columns));

        for (cell, rect) in cells.iter().zip(areas) {
            let mut style = visual_style(cell.visual);
            let mut border = BorderType::Plain;

            if selected == Some(cell.position) {
                style = style.add_modifier(Modifier::REVERSED);
                border = BorderType::Thick;
            }

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(border)
                .border_style(style);

            Paragraph::new(self.glyph_mode.face(cell.face))
                .alignment(Alignment::Center)
                .style(style)
                .block(block)
                .render(rect, buf);
        }
    }
}

/// Colors for each visual state
fn visual_style(state: VisualState) -> Style {
    match state {
        VisualState::Default => Style::default().fg(Color::Gray),
        VisualState::Revealed => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        VisualState::Matched => Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Deck;
    use crate::render::RenderSurface;

    #[test]
    fn test_cursor_bounds() {
        let mut cursor = GridCursor::default();
        cursor.move_up();
        cursor.move_left();
        assert_eq!(cursor, GridCursor::new(0, 0));

        for _ in 0..10 {
            cursor.move_right(4, 12);
            cursor.move_down(4, 12);
        }
        assert_eq!(cursor, GridCursor::new(3, 2));
        assert_eq!(cursor.position(4), 11);
    }

    #[test]
    fn test_cursor_at() {
        assert_eq!(GridCursor::at(5, 4), GridCursor::new(1, 1));
        assert_eq!(GridCursor::at(5, 4).position(4), 5);
    }

    #[test]
    fn test_card_areas() {
        let area = Rect::new(2, 1, 80, 24);
        let areas = card_areas(area, 12, 4);
        assert_eq!(areas.len(), 12);
        assert_eq!(areas[0], Rect::new(2, 1, CARD_WIDTH, CARD_HEIGHT));
        assert_eq!(areas[5].x, 2 + CARD_WIDTH + CARD_GAP);
        assert_eq!(areas[5].y, 1 + CARD_HEIGHT + CARD_GAP);
    }

    #[test]
    fn test_card_areas_clipped() {
        let areas = card_areas(Rect::new(0, 0, 80, 4), 12, 4);
        assert_eq!(areas.len(), 4);
    }

    #[test]
    fn test_grid_size() {
        assert_eq!(grid_size(12, 4), (35, 11));
    }

    #[test]
    fn test_render_placeholders() {
        let mut view = BoardView::new();
        view.render_board(&Deck::ordered().deal());

        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        CardGridWidget::new(&view).columns(4).render(area, &mut buf);

        // Inside the borders of the first card
        let face: String = (1..CARD_WIDTH - 1).map(|x| buf[(x, 1)].symbol()).collect();
        assert_eq!(face.trim(), "?");
    }
}
