//! End screen with the final score, reflection, and leaderboard.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use mailstorm_runtime::MatchSnapshot;

/// Renders the end screen: reason banner, score, reflection, best scores.
pub fn render(frame: &mut Frame, area: Rect, snapshot: &MatchSnapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(area);

    render_reason(frame, chunks[0], snapshot);
    render_score(frame, chunks[1], snapshot);
    render_body(frame, chunks[2], snapshot);
    render_footer(frame, chunks[3]);
}

fn render_reason(frame: &mut Frame, area: Rect, snapshot: &MatchSnapshot) {
    let reason = snapshot.state.end_reason.as_deref().unwrap_or("");

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            reason,
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title(" The Bell "));

    frame.render_widget(paragraph, area);
}

fn render_score(frame: &mut Frame, area: Rect, snapshot: &MatchSnapshot) {
    let meters = &snapshot.state.meters;
    let score_text = snapshot
        .score
        .map(|score| score.to_string())
        .unwrap_or_else(|| "—".to_string());

    let lines = vec![
        Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                score_text,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw(format!("Team trust {:.0}", meters.team_trust)),
            Span::raw("  |  "),
            Span::raw(format!("Business {:.0}", meters.business_health)),
            Span::raw("  |  "),
            Span::raw(format!("Stress {:.0}", meters.ceo_stress)),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Result "));

    frame.render_widget(paragraph, area);
}

fn render_body(frame: &mut Frame, area: Rect, snapshot: &MatchSnapshot) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_reflection(frame, chunks[0], snapshot);
    render_leaderboard(frame, chunks[1], snapshot);
}

fn render_reflection(frame: &mut Frame, area: Rect, snapshot: &MatchSnapshot) {
    let reflection = snapshot.reflection.as_deref().unwrap_or("");

    let paragraph = Paragraph::new(reflection)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Reflection "));

    frame.render_widget(paragraph, area);
}

fn render_leaderboard(frame: &mut Frame, area: Rect, snapshot: &MatchSnapshot) {
    let items: Vec<ListItem> = snapshot
        .leaderboard
        .iter()
        .enumerate()
        .map(|(rank, entry)| {
            let is_current = snapshot.score == Some(entry.score);
            let style = if is_current {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!(
                    "{:>2}. {:>4}  {}",
                    rank + 1,
                    entry.score,
                    entry.created_at.format("%Y-%m-%d %H:%M")
                ),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Best Scores "),
    );

    frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(vec![Line::from(vec![
        Span::styled("Enter/r", Style::default().fg(Color::Yellow)),
        Span::styled(" Play again  ", Style::default().fg(Color::Gray)),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::styled(" Quit", Style::default().fg(Color::Gray)),
    ])])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::NONE));

    frame.render_widget(footer, area);
}
