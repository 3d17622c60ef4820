use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{CollisionType, Position, Snapshot};
use crate::metrics::{RoundMetrics, RoundSummary};

/// Game-over notice currently on screen. The text comes from
/// [`RoundMetrics::last_round`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    None,
    /// One line in the header while play goes on
    Banner,
    /// Popup over the board; play waits for a key
    Modal,
}

pub struct Renderer {
    cell_width: u16,
}

impl Renderer {
    pub fn new(cell_width: u16) -> Self {
        Self {
            cell_width: cell_width.max(1),
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        snapshot: &Snapshot<'_>,
        metrics: &RoundMetrics,
        notice: Notice,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot, metrics, notice), chunks[0]);

        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        frame.render_widget(self.render_grid(snapshot), game_area);

        if let (Notice::Modal, Some(summary)) = (notice, metrics.last_round) {
            let popup = centered(game_area, 48, 9);
            frame.render_widget(Clear, popup);
            frame.render_widget(self.render_game_over(summary), popup);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn cell(&self, glyph: &str, style: Style) -> Span<'static> {
        let padding = " ".repeat(usize::from(self.cell_width) - 1);
        Span::styled(format!("{glyph}{padding}"), style)
    }

    fn render_grid(&self, snapshot: &Snapshot<'_>) -> Paragraph<'static> {
        let head = snapshot.head();
        let mut lines = Vec::with_capacity(snapshot.grid.rows);

        for y in 0..snapshot.grid.rows {
            let mut spans = Vec::with_capacity(snapshot.grid.columns);

            for x in 0..snapshot.grid.columns {
                let pos = Position::from_cell(x, y);

                // Food is drawn over the snake when the two overlap
                let cell = if pos == snapshot.food {
                    self.cell("●", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                } else if pos == head {
                    self.cell("■", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                } else if snapshot.snake.contains(&pos) {
                    self.cell("□", Style::default().fg(Color::Green))
                } else {
                    self.cell("·", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let border = if snapshot.running { Color::White } else { Color::Red };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(border))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        snapshot: &Snapshot<'_>,
        metrics: &RoundMetrics,
        notice: Notice,
    ) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let mut text = vec![Line::from(vec![
            Span::styled("Length: ", label),
            Span::styled(
                snapshot.snake_len().to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Ticks: ", label),
            Span::styled(snapshot.ticks.to_string(), value),
            Span::raw("    "),
            Span::styled("Level: ", label),
            Span::styled(snapshot.level.label(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
            Span::raw("    "),
            Span::styled("Rounds: ", label),
            Span::styled(metrics.rounds_played.to_string(), value),
        ])];

        if let (Notice::Banner, Some(summary)) = (notice, metrics.last_round) {
            text.push(Line::from(Span::styled(
                format!("Game Over! {}", describe(summary)),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, summary: RoundSummary) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(describe(summary), Style::default().fg(Color::White))),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "Press any key",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(2)
    }
}

fn describe(summary: RoundSummary) -> String {
    let cause = match summary.collision {
        CollisionType::Wall => "Hit the wall",
        CollisionType::SelfCollision => "Bit your own tail",
    };
    format!("{cause} at length {} after {} moves", summary.length, summary.ticks)
}

/// A `width` x `height` rectangle in the middle of `area`, clipped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Grid, Heading, Level};
    use ratatui::{Terminal, backend::TestBackend};

    fn snapshot<'a>(snake: &'a [Position], food: Position, running: bool) -> Snapshot<'a> {
        Snapshot {
            grid: Grid::new(4, 3),
            snake,
            heading: Heading::Right,
            food,
            running,
            level: Level::Easy,
            ticks: 7,
        }
    }

    fn draw(snapshot: &Snapshot<'_>, metrics: &RoundMetrics, notice: Notice) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        let renderer = Renderer::default();
        terminal
            .draw(|frame| renderer.render(frame, snapshot, metrics, notice))
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_draws_snake_and_food() {
        let snake = [Position::new(1, 1), Position::new(0, 1)];
        let metrics = RoundMetrics::new();
        let screen = draw(&snapshot(&snake, Position::new(3, 2), true), &metrics, Notice::None);

        assert!(screen.contains("■"));
        assert!(screen.contains("□"));
        assert!(screen.contains("●"));
        assert!(screen.contains("Length: 2"));
        assert!(!screen.contains("GAME OVER"));
    }

    #[test]
    fn test_food_drawn_over_snake() {
        let snake = [Position::new(1, 1)];
        let metrics = RoundMetrics::new();
        let screen = draw(&snapshot(&snake, Position::new(1, 1), true), &metrics, Notice::None);

        assert!(screen.contains("●"));
        assert!(!screen.contains("■"));
    }

    #[test]
    fn test_banner_and_modal() {
        let snake = [Position::new(3, 1)];
        let mut metrics = RoundMetrics::new();
        metrics.on_round_over(RoundSummary {
            collision: CollisionType::Wall,
            length: 1,
            ticks: 3,
        });

        let playing = snapshot(&snake, Position::new(0, 0), true);
        let banner = draw(&playing, &metrics, Notice::Banner);
        assert!(banner.contains("Game Over! Hit the wall at length 1 after 3 moves"));
        assert!(!banner.contains("GAME OVER"));

        let stopped = snapshot(&snake, Position::new(0, 0), false);
        let modal = draw(&stopped, &metrics, Notice::Modal);
        assert!(modal.contains("GAME OVER"));
        assert!(modal.contains("Press any key"));
    }

    #[test]
    fn test_notice_needs_a_finished_round() {
        let snake = [Position::new(3, 1)];
        let metrics = RoundMetrics::new();
        let playing = snapshot(&snake, Position::new(0, 0), true);

        let screen = draw(&playing, &metrics, Notice::Banner);
        assert!(!screen.contains("Game Over!"));

        let screen = draw(&playing, &metrics, Notice::Modal);
        assert!(!screen.contains("GAME OVER"));
    }

    #[test]
    fn test_centered_clips_to_area() {
        let area = Rect::new(2, 1, 10, 4);
        assert_eq!(centered(area, 4, 2), Rect::new(5, 2, 4, 2));
        assert_eq!(centered(area, 40, 20), area);
    }

    #[test]
    fn test_describe() {
        let summary = RoundSummary {
            collision: CollisionType::SelfCollision,
            length: 5,
            ticks: 12,
        };
        assert_eq!(describe(summary), "Bit your own tail at length 5 after 12 moves");
    }
}
