//! TUI rendering with ratatui
//!
//! Draws the grid, clock, found words and overlays for the puzzle.

use super::app::{App, MessageStyle};
use crate::core::{GRID_SIZE, TIME_LIMIT_SECS, WORD_LEN, WORDS_PER_SET};
use crate::engine::{CellState, RoundOutcome, RoundSnapshot, format_time};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

const CELL_WIDTH: u16 = 5;
const CELL_HEIGHT: u16 = 3;
const CELL_GAP: u16 = 1;
const SIDE: u16 = WORD_LEN as u16;
const GRID_PANEL_WIDTH: u16 = SIDE * CELL_WIDTH + (SIDE - 1) * CELL_GAP + 2;
const GRID_PANEL_HEIGHT: u16 = SIDE * CELL_HEIGHT + 2;
/// Remaining seconds at which the clock turns red
const LOW_TIME_SECS: u32 = 30;

/// Colors for light and dark mode
#[derive(Debug, Clone, Copy)]
struct Palette {
    bg: Color,
    fg: Color,
    muted: Color,
    accent: Color,
    cell_bg: Color,
}

impl Palette {
    const LIGHT: Self = Self {
        bg: Color::White,
        fg: Color::Black,
        muted: Color::DarkGray,
        accent: Color::Blue,
        cell_bg: Color::Rgb(229, 231, 235),
    };

    const DARK: Self = Self {
        bg: Color::Black,
        fg: Color::White,
        muted: Color::Gray,
        accent: Color::Cyan,
        cell_bg: Color::Rgb(55, 65, 81),
    };

    const fn for_mode(dark: bool) -> Self {
        if dark { Self::DARK } else { Self::LIGHT }
    }

    fn base(self) -> Style {
        Style::default().bg(self.bg).fg(self.fg)
    }

    fn cell(self, state: CellState) -> Style {
        match state {
            CellState::Solved => Style::default().bg(Color::Green).fg(Color::Black),
            CellState::Selected => Style::default().bg(Color::Yellow).fg(Color::Black),
            CellState::Error => Style::default().bg(Color::Red).fg(Color::White),
            CellState::Hinted => Style::default().bg(Color::Magenta).fg(Color::White),
            CellState::Plain => Style::default().bg(self.cell_bg).fg(self.fg),
        }
        .add_modifier(Modifier::BOLD)
    }
}

/// Screen regions, shared by drawing and mouse hit-testing
struct ScreenLayout {
    header: Rect,
    info: Rect,
    grid: Rect,
    side: Rect,
    messages: Rect,
    status: Rect,
}

impl ScreenLayout {
    fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                 // Header
                Constraint::Length(3),                 // Clock, theme, set number
                Constraint::Length(GRID_PANEL_HEIGHT), // Grid and found words
                Constraint::Min(4),                    // Messages
                Constraint::Length(1),                 // Status bar
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GRID_PANEL_WIDTH), Constraint::Min(20)])
            .split(chunks[2]);

        Self {
            header: chunks[0],
            info: chunks[1],
            grid: body[0],
            side: body[1],
            messages: chunks[3],
            status: chunks[4],
        }
    }

    /// Cell rectangles in grid order
    fn cells(&self) -> Vec<Rect> {
        let inner = Block::default().borders(Borders::ALL).inner(self.grid);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(CELL_HEIGHT); WORD_LEN])
            .split(inner);

        rows.iter()
            .flat_map(|&row| {
                Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Length(CELL_WIDTH); WORD_LEN])
                    .spacing(CELL_GAP)
                    .split(row)
                    .to_vec()
            })
            .collect()
    }
}

/// Grid position under a terminal coordinate
#[must_use]
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<usize> {
    let point = Position::new(column, row);
    ScreenLayout::new(area)
        .cells()
        .iter()
        .position(|cell| cell.contains(point))
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let palette = Palette::for_mode(app.dark_mode());
    let snapshot = app.round.snapshot();
    let layout = ScreenLayout::new(f.area());

    f.render_widget(Block::default().style(palette.base()), f.area());

    render_header(f, palette, layout.header);
    render_info(f, app, &snapshot, palette, layout.info);
    render_grid(f, app, &snapshot, palette, &layout);
    render_side_panel(f, app, &snapshot, palette, layout.side);
    render_messages(f, app, palette, layout.messages);
    render_status(f, palette, layout.status);

    if let Some(outcome) = &snapshot.outcome {
        render_result_overlay(f, app, &snapshot, outcome, palette);
    }
    if app.show_rules {
        render_rules_overlay(f, palette);
    }
}

fn render_header(f: &mut Frame, palette: Palette, area: Rect) {
    let header = Paragraph::new("🧩 QUIZWORDZ 5x5")
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(palette.accent)),
        );
    f.render_widget(header, area);
}

fn render_info(f: &mut Frame, app: &App, snapshot: &RoundSnapshot, palette: Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(GRID_PANEL_WIDTH),
            Constraint::Min(10),
            Constraint::Length(16),
        ])
        .split(area);

    let clock_color = if snapshot.time_left <= LOW_TIME_SECS {
        Color::Red
    } else {
        Color::Green
    };
    let mut label = format_time(snapshot.time_left);
    if snapshot.is_paused() {
        label.push_str(" (paused)");
    }
    let percent = (snapshot.time_left * 100 / TIME_LIMIT_SECS.max(1)) as u16;
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Time ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(clock_color).bg(palette.cell_bg))
        .percent(percent.min(100))
        .label(Span::styled(
            label,
            Style::default()
                .fg(palette.fg)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(gauge, chunks[0]);

    let theme = Paragraph::new(Line::from(vec![
        Span::raw("Theme: "),
        Span::styled(
            snapshot.theme.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(theme, chunks[1]);

    let set_number = Paragraph::new(format!("Set {} of {}", app.set_number(), app.catalog.len()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.muted))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(set_number, chunks[2]);
}

fn render_grid(
    f: &mut Frame,
    app: &App,
    snapshot: &RoundSnapshot,
    palette: Palette,
    layout: &ScreenLayout,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if snapshot.is_paused() {
        let paused = Paragraph::new(vec![
            Line::from(""),
            Line::from(""),
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "Game Paused",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press p to resume",
                Style::default().fg(palette.muted),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(paused, layout.grid);
        return;
    }

    f.render_widget(block, layout.grid);

    let show_cursor = snapshot.outcome.is_none();
    for (position, cell) in layout.cells().into_iter().enumerate().take(GRID_SIZE) {
        let state = snapshot.cell_state(position);
        let style = palette.cell(state);
        let (border_type, border_style) = if show_cursor && position == app.cursor {
            (
                BorderType::Thick,
                Style::default().fg(palette.accent).bg(palette.bg),
            )
        } else {
            (BorderType::Rounded, Style::default().fg(palette.muted).bg(palette.bg))
        };

        let letter = snapshot.letters.get(position).copied().unwrap_or(' ');
        let widget = Paragraph::new(letter.to_string())
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(border_type)
                    .border_style(border_style),
            );
        f.render_widget(widget, cell);
    }
}

fn render_side_panel(
    f: &mut Frame,
    app: &App,
    snapshot: &RoundSnapshot,
    palette: Palette,
    area: Rect,
) {
    let mut lines = vec![Line::from(Span::styled(
        format!("Found {} of {WORDS_PER_SET}", snapshot.solved_words.len()),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    for slot in 0..WORDS_PER_SET {
        let line = match snapshot.solved_words.get(slot) {
            Some(word) => Line::from(Span::styled(
                format!("  ✓ {word}"),
                Style::default().fg(Color::Green),
            )),
            None => Line::from(Span::styled(
                "  · _ _ _ _ _",
                Style::default().fg(palette.muted),
            )),
        };
        lines.push(line);
    }

    lines.push(Line::from(""));
    let attempt = snapshot.attempt();
    let attempt_style = if snapshot.error {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.accent)
    };
    lines.push(Line::from(vec![
        Span::raw("Selected: "),
        Span::styled(attempt, attempt_style),
    ]));

    lines.push(Line::from(""));
    let best = app
        .stats
        .best_time
        .map_or_else(|| "-".to_string(), format_time);
    lines.push(Line::from(Span::styled(
        format!(
            "Solved {}/{} | Best {best}",
            app.stats.rounds_solved, app.stats.rounds_played
        ),
        Style::default().fg(palette.muted),
    )));

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Words ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(panel, area);
}

fn render_messages(f: &mut Frame, app: &App, palette: Palette, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(palette.fg),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, palette: Palette, area: Rect) {
    let help = Paragraph::new(
        "←↑↓→ move | Space select | h hint | s solve | r shuffle | p pause | d dark | ? rules | n new | q quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(palette.muted));
    f.render_widget(help, area);
}

/// Rectangle of at most `width` x `height` centered in `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn render_result_overlay(
    f: &mut Frame,
    app: &App,
    snapshot: &RoundSnapshot,
    outcome: &RoundOutcome,
    palette: Palette,
) {
    let (title, color) = if outcome.timed_out {
        (" ⏰ Time's Up! ", Color::Red)
    } else {
        (" 🎉 Congratulations! ", Color::Green)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Theme: "),
            Span::styled(
                snapshot.theme.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Time: {}", format_time(outcome.time_taken))),
        Line::from(format!(
            "Words found: {} of {WORDS_PER_SET}",
            outcome.solved_words.len()
        )),
        Line::from(""),
    ];
    for word in &outcome.solved_words {
        lines.push(Line::from(Span::styled(
            format!("  ✓ {word}"),
            Style::default().fg(Color::Green),
        )));
    }

    if let Some(share) = app.round.share_message(&app.share_url) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Share your result:",
            Style::default().fg(palette.accent),
        )));
        lines.extend(share.lines().map(|line| Line::from(line.to_string())));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "n: play again | q: quit",
        Style::default().fg(palette.muted),
    )));

    let height = lines.len() as u16 + 4;
    let area = centered_rect(64, height, f.area());
    let popup = Paragraph::new(lines)
        .style(palette.base())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn render_rules_overlay(f: &mut Frame, palette: Palette) {
    let lines = vec![
        Line::from("Find the five words that share the theme."),
        Line::from("Every letter in the grid belongs to one of them."),
        Line::from(""),
        Line::from("Select five cells to spell a word. Letters can be picked"),
        Line::from("in any position; a found word moves to the top rows."),
        Line::from(format!(
            "You have {} to find all five.",
            format_time(TIME_LIMIT_SECS)
        )),
        Line::from(""),
        Line::from("h  highlight the first letter of a remaining word"),
        Line::from("s  reveal a remaining word"),
        Line::from("r  shuffle the unsolved letters"),
        Line::from("p  pause the clock (the grid is hidden)"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or ? to close",
            Style::default().fg(palette.muted),
        )),
    ];

    let area = centered_rect(62, lines.len() as u16 + 2, f.area());
    let popup = Paragraph::new(lines).style(palette.base()).block(
        Block::default()
            .title(" How to Play ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(palette.accent)),
    );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}
