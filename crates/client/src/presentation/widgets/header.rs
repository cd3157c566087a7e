//! Header widget with the countdown clock and inbox pressure readout.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use mailstorm_core::{MatchState, VisualPhase};

/// Render the header panel: clock, waiting count, decisions made.
pub fn render(frame: &mut Frame, area: Rect, state: &MatchState) {
    let clock_color = match state.visual_phase() {
        VisualPhase::Early => Color::Green,
        VisualPhase::Mid => Color::Yellow,
        VisualPhase::Late => Color::Red,
    };

    let waiting = state.waiting_count();
    let waiting_style = if waiting > 3 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if waiting > 0 {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Green)
    };

    let text = vec![Line::from(vec![
        Span::raw("Time left: "),
        Span::styled(
            format_clock(state.time_remaining),
            Style::default()
                .fg(clock_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Waiting: "),
        Span::styled(waiting.to_string(), waiting_style),
        Span::raw(" | Decided: "),
        Span::styled(
            state.history.len().to_string(),
            Style::default().fg(Color::Cyan),
        ),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(" Inbox Storm "));

    frame.render_widget(paragraph, area);
}

/// Formats seconds as `m:ss`, clamping at zero.
pub fn format_clock(seconds: f64) -> String {
    let total = seconds.max(0.0).ceil() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
