//! Frame composition routed by match phase.
//!
//! The start and end screens take the whole terminal; mid-match the frame
//! splits into header, reading pane plus side column, and footer.

use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use mailstorm_core::Phase;

use crate::presentation::{terminal::Tui, widgets};
use crate::state::AppState;

pub fn render(terminal: &mut Tui, app_state: &AppState) -> Result<()> {
    terminal.draw(|frame| render_frame(frame, app_state))?;
    Ok(())
}

fn render_frame(frame: &mut Frame, app_state: &AppState) {
    let snapshot = app_state.snapshot();

    match app_state.phase() {
        Phase::Start => widgets::start_screen::render(frame, frame.area(), &snapshot.leaderboard),
        Phase::Playing => render_match(frame, app_state),
        Phase::End => widgets::end_screen::render(frame, frame.area(), snapshot),
    }
}

fn render_match(frame: &mut Frame, app_state: &AppState) {
    let state = &app_state.snapshot().state;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], state);
    widgets::footer::render(frame, chunks[2], state.phase);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    widgets::reading_pane::render(frame, body[0], state.current_message.as_ref());

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(body[1]);

    widgets::meters::render(frame, side[0], &state.meters);
    widgets::inbox::render(frame, side[1], state.inbox.iter(), state.waiting_count());
}
