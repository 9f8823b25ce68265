//! Top-level screen layout.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::state::{AppMode, AppState};

use super::widgets;

/// Render one frame of the application.
pub fn render(frame: &mut Frame, app: &AppState) {
    let editing = !matches!(app.mode, AppMode::Browse);

    let constraints = if editing {
        vec![
            Constraint::Length(3), // Title
            Constraint::Min(6),    // Groups + members
            Constraint::Length(3), // Text entry
            Constraint::Length(7), // Draw result
            Constraint::Length(4), // Status + key help
        ]
    } else {
        vec![
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(7),
            Constraint::Length(4),
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    widgets::header::render(frame, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);
    widgets::groups::render(frame, panes[0], app);
    widgets::members::render(frame, panes[1], app);

    if editing {
        widgets::input_box::render(frame, chunks[2], app);
        widgets::result::render(frame, chunks[3], app);
        widgets::footer::render(frame, chunks[4], app);
    } else {
        widgets::result::render(frame, chunks[2], app);
        widgets::footer::render(frame, chunks[3], app);
    }
}
