//! Status line and key help.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{AppMode, AppState};

pub fn render(frame: &mut Frame, area: Rect, app: &AppState) {
    let status = match &app.status {
        Some(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(Span::styled(
            app.selection_hint(),
            Style::default().fg(Color::Gray),
        )),
    };

    let help = match app.mode {
        AppMode::Browse => Line::from(vec![
            Span::styled("a", Style::default().fg(Color::Yellow)),
            Span::raw(" group  "),
            Span::styled("m", Style::default().fg(Color::Yellow)),
            Span::raw(" member  "),
            Span::styled("t", Style::default().fg(Color::Yellow)),
            Span::raw(" target  "),
            Span::styled("space", Style::default().fg(Color::Yellow)),
            Span::raw(" select  "),
            Span::styled("d", Style::default().fg(Color::Green)),
            Span::raw(" draw  "),
            Span::styled("x/X", Style::default().fg(Color::Red)),
            Span::raw(" delete  "),
            Span::styled("R", Style::default().fg(Color::Red)),
            Span::raw(" reset  "),
            Span::styled("q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ]),
        _ => Line::from(vec![
            Span::styled("enter", Style::default().fg(Color::Green)),
            Span::raw(" confirm  "),
            Span::styled("esc", Style::default().fg(Color::Red)),
            Span::raw(" cancel"),
        ]),
    };

    let footer = Paragraph::new(vec![status, help])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        );

    frame.render_widget(footer, area);
}
