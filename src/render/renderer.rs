use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

use super::board::BoardPainter;
use super::frame_view::FrameView;
use super::surface::FrameBuffer;
use crate::game::{GameConfig, GameState, GameStatus};
use crate::metrics::SessionStats;
use crate::reporter::Leaderboard;

/// Everything the play screen shows, borrowed for one frame
pub struct PlayView<'a> {
    pub username: &'a str,
    pub state: &'a GameState,
    pub stats: &'a SessionStats,
    pub leaderboard: &'a Leaderboard,
}

/// Everything the login screen shows
pub struct LoginView<'a> {
    pub input: &'a str,
    pub error: Option<&'a str>,
    pub busy: bool,
}

pub struct Renderer {
    painter: BoardPainter,
    board: FrameBuffer,
    tile_count: usize,
}

impl Renderer {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            painter: BoardPainter::new(config.cell_size),
            board: FrameBuffer::square(config.surface_size()),
            tile_count: config.tile_count,
        }
    }

    /// Last painted board surface
    pub fn board(&self) -> &FrameBuffer {
        &self.board
    }

    pub fn render_play(&mut self, frame: &mut Frame, view: &PlayView) {
        self.painter
            .paint(&mut self.board, &view.state.snake, view.state.food);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
            .split(frame.area());

        frame.render_widget(self.render_leaderboard(view.leaderboard), columns[0]);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(columns[1]);

        frame.render_widget(self.render_header(view), chunks[0]);

        // Board plus its border, centred in the game area
        let (cols, rows) = FrameView::preferred_size(self.tile_count);
        let board_area = centered(chunks[1], cols + 2, rows + 2);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(" Snake ");
        let inner = block.inner(board_area);
        frame.render_widget(block, board_area);
        frame.render_widget(FrameView::new(&self.board), inner);

        match view.state.status {
            GameStatus::Over => {
                let area = centered(board_area, 30, 7);
                frame.render_widget(Clear, area);
                frame.render_widget(self.render_game_over(view.state), area);
            }
            GameStatus::Paused => {
                let area = centered(board_area, 20, 3);
                frame.render_widget(Clear, area);
                frame.render_widget(self.render_paused(), area);
            }
            GameStatus::Running => {}
        }

        frame.render_widget(self.render_controls(view.state.is_paused()), chunks[2]);
    }

    pub fn render_login(&self, frame: &mut Frame, view: &LoginView) {
        let area = centered(frame.area(), 44, 10);

        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Enter username",
                Style::default().fg(Color::Gray),
            )),
            Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::Green)),
                Span::styled(
                    view.input,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("_", Style::default().fg(Color::Green)),
            ]),
            Line::from(""),
        ];

        if view.busy {
            text.push(Line::from(Span::styled(
                "Logging in...",
                Style::default().fg(Color::Yellow),
            )));
        } else if let Some(error) = view.error {
            text.push(Line::from(Span::styled(
                error,
                Style::default().fg(Color::Red),
            )));
        } else {
            text.push(Line::from(""));
        }

        text.push(Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" to start | "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]));

        let login = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Green))
                .title(" Login / Register "),
        );

        frame.render_widget(login, area);
    }

    fn render_leaderboard(&self, leaderboard: &Leaderboard) -> List<'_> {
        let items: Vec<ListItem> = leaderboard
            .entries()
            .iter()
            .enumerate()
            .map(|(rank, entry)| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{}. {}", rank + 1, entry.username),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        entry.high_score.to_string(),
                        Style::default().fg(Color::Yellow),
                    ),
                ]))
            })
            .collect();

        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Top 10 Scores "),
        )
    }

    fn render_header(&self, view: &PlayView) -> Paragraph<'_> {
        let text = vec![
            Line::from(Span::styled(
                format!("Hello, {}!", view.username),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    view.state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("    "),
                Span::styled("Best: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    view.stats.best_score.to_string(),
                    Style::default().fg(Color::White),
                ),
                Span::raw("    "),
                Span::styled("Time: ", Style::default().fg(Color::Yellow)),
                Span::styled(view.stats.format_time(), Style::default().fg(Color::White)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to reset", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_paused(&self) -> Paragraph<'_> {
        Paragraph::new(Line::from(Span::styled(
            "PAUSED",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
    }

    fn render_controls(&self, paused: bool) -> Paragraph<'_> {
        let pause_label = if paused {
            " to resume | "
        } else {
            " to pause | "
        };

        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("P", Style::default().fg(Color::Cyan)),
            Span::raw(pause_label),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to reset | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

/// A `width` x `height` rectangle centred in `area`, shrunk to fit
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
