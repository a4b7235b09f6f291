use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::{COLOR_FIELD, COLOR_INK, GAME_TITLE};
use crate::game::{Collision, GameStatus};

/// Values shown in the row under the board.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    pub score: u32,
    pub length: usize,
    pub status: GameStatus,
    pub last_collision: Option<Collision>,
}

/// Draws the game title above the board.
pub fn render_title(frame: &mut Frame<'_>, area: Rect) {
    frame.render_widget(
        Paragraph::new(Line::from(GAME_TITLE))
            .alignment(Alignment::Left)
            .style(ink().add_modifier(Modifier::BOLD)),
        area,
    );
}

/// Draws the score on the left and, while halted, a resume hint on the right.
pub fn render_score_row(frame: &mut Frame<'_>, area: Rect, info: HudInfo) {
    let hint = status_hint(info);
    let hint_width = u16::try_from(hint.width()).unwrap_or(u16::MAX);
    let [score_area, hint_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(hint_width)]).areas(area);

    frame.render_widget(
        Paragraph::new(score_line(info))
            .alignment(Alignment::Left)
            .style(ink()),
        score_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(hint))
            .alignment(Alignment::Right)
            .style(ink()),
        hint_area,
    );
}

fn score_line(info: HudInfo) -> Line<'static> {
    Line::from(vec![
        Span::styled(info.score.to_string(), ink().add_modifier(Modifier::BOLD)),
        Span::raw(format!("  length {}", info.length)),
    ])
}

fn status_hint(info: HudInfo) -> &'static str {
    match (info.status, info.last_collision) {
        (GameStatus::Running, _) => "",
        (GameStatus::Halted, Some(Collision::Wall)) => "hit the wall - arrow key to restart",
        (GameStatus::Halted, Some(Collision::SelfBite)) => "bit yourself - arrow key to restart",
        (GameStatus::Halted, None) => "arrow key to start",
    }
}

fn ink() -> Style {
    Style::new().fg(COLOR_INK).bg(COLOR_FIELD)
}
