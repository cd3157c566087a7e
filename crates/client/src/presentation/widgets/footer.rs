//! Footer widget displaying context-sensitive key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use mailstorm_core::Phase;

/// Render the footer panel with key bindings help.
///
/// Displays context-sensitive controls based on the current phase.
pub fn render(frame: &mut Frame, area: Rect, phase: Phase) {
    let text = match phase {
        Phase::Start => vec![Line::from(vec![
            Span::raw("[Enter/s] Start | "),
            Span::raw("[q] Quit"),
        ])],
        Phase::Playing => vec![Line::from(vec![
            Span::raw("[1/h] Handle | "),
            Span::raw("[2/d] Delegate | "),
            Span::raw("[3/f] Defer | "),
            Span::raw("[4/i] Ignore | "),
            Span::raw("[r] Restart | "),
            Span::raw("[q] Quit"),
        ])],
        Phase::End => vec![Line::from(vec![
            Span::raw("[Enter/r] Play again | "),
            Span::raw("[q] Quit"),
        ])],
    };

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
