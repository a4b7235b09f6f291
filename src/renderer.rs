use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::config::{
    COLOR_FIELD, COLOR_FOOD, COLOR_INK, GLYPH_FOOD, GLYPH_SNAKE_SEGMENT, GridGeometry,
};
use crate::game::GameSession;
use crate::snake::Cell;
use crate::ui::hud::{HudInfo, render_score_row, render_title};

/// Screen regions for one frame, centered in the terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub board_frame: Rect,
    pub board: Rect,
    pub score: Rect,
}

impl ScreenLayout {
    /// Total terminal size needed for the board, its border, the title row,
    /// the score row and the margins.
    #[must_use]
    pub fn required_size(geometry: GridGeometry) -> (u16, u16) {
        let margins = geometry.offset.saturating_mul(2);
        let width = geometry.board_width().saturating_add(2).saturating_add(margins);
        let height = geometry.board_height().saturating_add(4).saturating_add(margins);
        (width, height)
    }

    /// Places the board in `area`, or returns `None` when it does not fit.
    #[must_use]
    pub fn fit(area: Rect, geometry: GridGeometry) -> Option<Self> {
        let (width, height) = Self::required_size(geometry);
        if area.width < width || area.height < height {
            return None;
        }

        let x = area.x + (area.width - width) / 2 + geometry.offset;
        let y = area.y + (area.height - height) / 2 + geometry.offset;
        let frame_width = geometry.board_width() + 2;
        let frame_height = geometry.board_height() + 2;

        Some(Self {
            title: Rect::new(x, y, frame_width, 1),
            board_frame: Rect::new(x, y + 1, frame_width, frame_height),
            board: Rect::new(x + 1, y + 2, geometry.board_width(), geometry.board_height()),
            score: Rect::new(x, y + 1 + frame_height, frame_width, 1),
        })
    }
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, session: &GameSession) {
    let area = frame.area();
    let geometry = session.geometry();
    frame.render_widget(Block::new().style(Style::new().bg(COLOR_FIELD)), area);

    let Some(layout) = ScreenLayout::fit(area, geometry) else {
        render_too_small(frame, area, geometry);
        return;
    };

    render_title(frame, layout.title);
    frame.render_widget(
        Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(Style::new().fg(COLOR_INK).bg(COLOR_FIELD)),
        layout.board_frame,
    );

    render_food(frame, layout.board, geometry, session.food.position);
    render_snake(frame, layout.board, geometry, session.snake.segments());

    render_score_row(
        frame,
        layout.score,
        HudInfo {
            score: session.score,
            length: session.snake.len(),
            status: session.status,
            last_collision: session.last_collision,
        },
    );
}

fn render_food(frame: &mut Frame<'_>, board: Rect, geometry: GridGeometry, position: Cell) {
    let Some((x, y)) = cell_origin(board, geometry, position) else {
        return;
    };

    let width = usize::from(geometry.cell_size);
    frame.buffer_mut().set_string(
        x,
        y,
        format!("{GLYPH_FOOD:<width$}"),
        Style::new().fg(COLOR_FOOD).bg(COLOR_FIELD),
    );
}

fn render_snake<'a>(
    frame: &mut Frame<'_>,
    board: Rect,
    geometry: GridGeometry,
    segments: impl Iterator<Item = &'a Cell>,
) {
    let glyph = GLYPH_SNAKE_SEGMENT.repeat(usize::from(geometry.cell_size));
    let style = Style::new().fg(COLOR_INK).bg(COLOR_FIELD);
    let buffer = frame.buffer_mut();

    for segment in segments {
        // The head may sit one step past the border between move and reset.
        let Some((x, y)) = cell_origin(board, geometry, *segment) else {
            continue;
        };
        buffer.set_string(x, y, &glyph, style);
    }
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, geometry: GridGeometry) {
    let (width, height) = ScreenLayout::required_size(geometry);
    let message = format!(
        "Terminal too small: {}x{} needed, {}x{} available",
        width, height, area.width, area.height
    );

    frame.render_widget(
        Paragraph::new(Line::from(message))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::new().fg(COLOR_INK).bg(COLOR_FIELD)),
        area,
    );
}

fn cell_origin(board: Rect, geometry: GridGeometry, cell: Cell) -> Option<(u16, u16)> {
    let (dx, dy) = geometry.cell_to_screen(cell)?;
    let x = board.x.saturating_add(dx);
    let y = board.y.saturating_add(dy);
    if x >= board.right() || y >= board.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use crate::config::{GLYPH_FOOD, GLYPH_SNAKE_SEGMENT, GridGeometry};
    use crate::food::Food;
    use crate::game::GameSession;
    use crate::snake::Cell;

    use super::{ScreenLayout, render};

    #[test]
    fn default_board_needs_54_by_31() {
        assert_eq!(ScreenLayout::required_size(GridGeometry::default()), (54, 31));
    }

    #[test]
    fn layout_is_centered_inside_margins() {
        let geometry = GridGeometry::default();
        let layout = ScreenLayout::fit(Rect::new(0, 0, 60, 31), geometry)
            .expect("board should fit");

        assert_eq!(layout.title, Rect::new(4, 1, 52, 1));
        assert_eq!(layout.board_frame, Rect::new(4, 2, 52, 27));
        assert_eq!(layout.board, Rect::new(5, 3, 50, 25));
        assert_eq!(layout.score, Rect::new(4, 29, 52, 1));
    }

    #[test]
    fn layout_rejects_small_terminal() {
        assert_eq!(
            ScreenLayout::fit(Rect::new(0, 0, 53, 40), GridGeometry::default()),
            None
        );
    }

    #[test]
    fn frame_shows_title_snake_food_and_score() {
        let geometry = GridGeometry::default();
        let mut session = GameSession::new_with_seed(geometry, 9);
        session.food = Food::at(Cell::new(0, 0));
        session.score = 12;

        let mut terminal = Terminal::new(TestBackend::new(54, 31)).expect("test terminal");
        terminal
            .draw(|frame| render(frame, &session))
            .expect("draw should succeed");

        let layout = ScreenLayout::fit(Rect::new(0, 0, 54, 31), geometry).expect("fits");
        let buffer = terminal.backend().buffer();

        let title: String = (layout.title.x..layout.title.x + 11)
            .map(|x| buffer[(x, layout.title.y)].symbol().to_owned())
            .collect();
        assert_eq!(title, "Retro Snake");

        assert_eq!(buffer[(layout.board.x, layout.board.y)].symbol(), GLYPH_FOOD);

        let head_x = layout.board.x + 6 * geometry.cell_size;
        let head_y = layout.board.y + 9;
        assert_eq!(buffer[(head_x, head_y)].symbol(), GLYPH_SNAKE_SEGMENT);
        assert_eq!(buffer[(head_x + 1, head_y)].symbol(), GLYPH_SNAKE_SEGMENT);

        assert_eq!(buffer[(layout.score.x, layout.score.y)].symbol(), "1");
        assert_eq!(buffer[(layout.score.x + 1, layout.score.y)].symbol(), "2");
    }
}
