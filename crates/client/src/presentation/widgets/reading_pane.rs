//! Reading pane showing the message awaiting a decision.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use mailstorm_core::{EmotionalWeight, Message, Urgency};

/// Render the current message, or a placeholder between arrivals.
pub fn render(frame: &mut Frame, area: Rect, message: Option<&Message>) {
    let lines = match message {
        Some(message) => message_lines(message),
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Inbox clear. The next message is already on its way.",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Incoming "));

    frame.render_widget(paragraph, area);
}

fn message_lines(message: &Message) -> Vec<Line<'_>> {
    vec![
        Line::from(vec![
            Span::styled(
                format!("[{}]", message.urgency),
                urgency_style(message.urgency),
            ),
            Span::raw(" "),
            Span::styled(
                format!("area: {}", message.impact_area),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw("  "),
            Span::styled(
                format!("tone: {}", message.emotional_weight),
                tone_style(message.emotional_weight),
            ),
        ]),
        Line::from(""),
        Line::from(Span::raw(message.text.as_str())),
    ]
}

fn urgency_style(urgency: Urgency) -> Style {
    let color = match urgency {
        Urgency::High => Color::Red,
        Urgency::Medium => Color::Yellow,
        Urgency::Low => Color::Green,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn tone_style(weight: EmotionalWeight) -> Style {
    let color = match weight {
        EmotionalWeight::Urgent => Color::LightRed,
        EmotionalWeight::Concerning => Color::LightYellow,
        EmotionalWeight::Neutral => Color::Gray,
    };
    Style::default().fg(color)
}
