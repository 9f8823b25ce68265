//! One-line text entry box for group/member names.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{AppMode, AppState};

pub fn render(frame: &mut Frame, area: Rect, app: &AppState) {
    let (title, input) = match &app.mode {
        AppMode::AddGroup { input } => (" New group name ", input.as_str()),
        AppMode::AddMember { input } => (" New member name ", input.as_str()),
        AppMode::Browse => return,
    };

    let entry = Paragraph::new(Line::from(vec![
        Span::styled(input, Style::default().fg(Color::White)),
        Span::styled("█", Style::default().fg(Color::Yellow)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(title),
    );

    frame.render_widget(entry, area);
}
