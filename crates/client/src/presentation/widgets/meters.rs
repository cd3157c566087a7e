//! Meter gauges for team trust, business health, and CEO stress.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Gauge},
};

use mailstorm_core::Meters;

/// Render the three meter gauges stacked vertically.
pub fn render(frame: &mut Frame, area: Rect, meters: &Meters) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    render_gauge(
        frame,
        chunks[0],
        "Team Trust",
        meters.team_trust,
        scale_color(meters.team_trust),
    );
    render_gauge(
        frame,
        chunks[1],
        "Business Health",
        meters.business_health,
        scale_color(meters.business_health),
    );
    // Stress reads inverted: high is bad.
    render_gauge(
        frame,
        chunks[2],
        "CEO Stress",
        meters.ceo_stress,
        scale_color(100.0 - meters.ceo_stress),
    );
}

fn render_gauge(frame: &mut Frame, area: Rect, title: &str, value: f64, color: Color) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(format!(" {title} ")))
        .gauge_style(Style::default().fg(color))
        .ratio((value / 100.0).clamp(0.0, 1.0))
        .label(format!("{value:.0}"));

    frame.render_widget(gauge, area);
}

fn scale_color(healthy_fraction: f64) -> Color {
    if healthy_fraction > 60.0 {
        Color::Green
    } else if healthy_fraction > 25.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}
