//! Waiting-inbox panel listing messages piling up behind the current one.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use mailstorm_core::{Message, Urgency};

/// Render the queue of messages waiting behind the reading pane.
///
/// Every waiting message bleeds stress and business health each second,
/// so the list doubles as a pressure warning.
pub fn render<'a>(
    frame: &mut Frame,
    area: Rect,
    waiting: impl Iterator<Item = &'a Message>,
    waiting_count: usize,
) {
    let items: Vec<ListItem> = waiting
        .map(|message| {
            ListItem::new(Line::from(vec![
                Span::styled("• ", urgency_marker(message.urgency)),
                Span::raw(preview(&message.text)),
            ]))
        })
        .collect();

    let title = if waiting_count == 0 {
        " Waiting ".to_string()
    } else {
        format!(" Waiting ({waiting_count}) ")
    };

    let border_style = if waiting_count > 3 {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );

    frame.render_widget(list, area);
}

fn urgency_marker(urgency: Urgency) -> Style {
    let color = match urgency {
        Urgency::High => Color::Red,
        Urgency::Medium => Color::Yellow,
        Urgency::Low => Color::Green,
    };
    Style::default().fg(color)
}

/// First words of the message, truncated to fit a narrow column.
fn preview(text: &str) -> String {
    const MAX: usize = 40;
    if text.chars().count() <= MAX {
        text.to_string()
    } else {
        let cut: String = text.chars().take(MAX - 1).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_long_text() {
        let long = "a".repeat(80);
        let short = preview(&long);
        assert_eq!(short.chars().count(), 40);
        assert!(short.ends_with('…'));
    }

    #[test]
    fn preview_keeps_short_text() {
        assert_eq!(preview("ship it"), "ship it");
    }
}
