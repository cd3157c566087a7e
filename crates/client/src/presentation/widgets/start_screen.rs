//! Start screen shown before the first match and after quitting to it.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use mailstorm_runtime::ScoreEntry;

/// Renders the start screen: banner, briefing, best scores.
pub fn render(frame: &mut Frame, area: Rect, leaderboard: &[ScoreEntry]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    render_title(frame, chunks[0]);
    render_briefing(frame, chunks[1], leaderboard);
    render_footer(frame, chunks[2]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "MAILSTORM",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![Span::styled(
            "Five minutes in the CEO chair",
            Style::default().fg(Color::Gray),
        )]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(title, area);
}

fn render_briefing(frame: &mut Frame, area: Rect, leaderboard: &[ScoreEntry]) {
    let mut lines = vec![
        Line::from(""),
        Line::from("Messages will hit your inbox faster and faster."),
        Line::from("Handle, delegate, defer, or ignore each one."),
        Line::from("Every choice moves your team, your business, and your stress."),
        Line::from("Letting the inbox pile up hurts on its own."),
        Line::from(""),
    ];

    if !leaderboard.is_empty() {
        lines.push(Line::from(Span::styled(
            "Best runs",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for (rank, entry) in leaderboard.iter().take(3).enumerate() {
            lines.push(Line::from(format!("  {}. {}", rank + 1, entry.score)));
        }
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Briefing ")
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::styled(" Start  ", Style::default().fg(Color::Gray)),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::styled(" Quit", Style::default().fg(Color::Gray)),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::NONE));

    frame.render_widget(footer, area);
}
