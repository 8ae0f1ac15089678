use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{GameState, Position, ScoreTracker};
use crate::metrics::SessionMetrics;
use crate::session::SessionState;

/// Darkest green a body segment fades to
const BODY_FLOOR: u8 = 50;
const BODY_FADE_STEP: usize = 10;

/// Size of the Idle/Paused message box drawn over the grid
const OVERLAY_WIDTH: u16 = 34;
const OVERLAY_HEIGHT: u16 = 5;

/// Everything a frame needs, borrowed read-only from the session
pub struct Snapshot<'a> {
    pub state: &'a GameState,
    pub score: &'a ScoreTracker,
    pub session: SessionState,
    pub metrics: &'a SessionMetrics,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot), chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match snapshot.session {
            SessionState::Over => {
                frame.render_widget(self.render_game_over(snapshot.score), game_area);
            }
            SessionState::Idle | SessionState::Paused => {
                frame.render_widget(self.render_grid(snapshot), game_area);
                let overlay = centered(game_area, OVERLAY_WIDTH, OVERLAY_HEIGHT);
                frame.render_widget(Clear, overlay);
                frame.render_widget(self.render_overlay(snapshot.session), overlay);
            }
            SessionState::Running => {
                frame.render_widget(self.render_grid(snapshot), game_area);
            }
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let state = snapshot.state;
        let n = state.grid_size as i32;
        let mut lines = Vec::with_capacity(state.grid_size);

        for y in 0..n {
            let spans: Vec<Span> = (0..n)
                .map(|x| cell_span(state, Position::new(x, y)))
                .collect();
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                snapshot.score.current().to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(snapshot.score.best().to_string(), value),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(snapshot.state.snake.len().to_string(), value),
            Span::raw("    "),
            Span::styled("Eaten: ", label),
            Span::styled(snapshot.metrics.foods_eaten.to_string(), value),
            Span::raw("    "),
            Span::styled("Resets: ", label),
            Span::styled(snapshot.metrics.soft_resets.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(snapshot.metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_overlay(&self, session: SessionState) -> Paragraph<'_> {
        let key = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);
        let hint = Style::default().fg(Color::Gray);

        let (heading, lines) = if session == SessionState::Paused {
            (
                "PAUSED",
                Line::from(vec![
                    Span::styled("Press ", hint),
                    Span::styled("Space", key),
                    Span::styled(" to resume", hint),
                ]),
            )
        } else {
            (
                "SNAKE",
                Line::from(vec![
                    Span::styled("Press ", hint),
                    Span::styled("Enter", key),
                    Span::styled(" to start", hint),
                ]),
            )
        };

        let text = vec![
            Line::from(Span::styled(
                heading,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            lines,
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
    }

    fn render_game_over(&self, score: &ScoreTracker) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Your score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    score.current().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let key = Style::default().fg(Color::Cyan);
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", key),
            Span::raw(" or "),
            Span::styled("WASD", key),
            Span::raw(" to move | "),
            Span::styled("Enter", key),
            Span::raw(" start | "),
            Span::styled("Space", key),
            Span::raw(" pause | "),
            Span::styled("R", key),
            Span::raw(" restart | "),
            Span::styled("X", key),
            Span::raw(" end | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn cell_span(state: &GameState, pos: Position) -> Span<'static> {
    if let Some(index) = state.snake.body.iter().position(|segment| *segment == pos) {
        let glyph = if index == 0 { "■ " } else { "□ " };
        let mut style = Style::default().fg(segment_color(index));
        if index == 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        Span::styled(glyph, style)
    } else if pos == state.food {
        Span::styled(
            "O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(". ", Style::default().fg(Color::DarkGray))
    }
}

/// A `width` x `height` box in the middle of `area`, shrunk to fit
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

/// Bright green head, body fading darker towards the tail
pub fn segment_color(index: usize) -> Color {
    let fade = index.saturating_mul(BODY_FADE_STEP);
    let green = 255usize.saturating_sub(fade).max(BODY_FLOOR as usize) as u8;
    Color::Rgb(0, green, 0)
}
