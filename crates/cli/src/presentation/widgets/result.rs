//! Draw result panel.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(" Draw ");

    let lines = if app.roster.is_drawing() {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "Drawing...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
        ]
    } else if let Some(result) = &app.roster.result {
        vec![
            Line::from(Span::styled(
                "Draw result!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    format!("{}: ", result.group1_name),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    result.member1.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled("+", Style::default().fg(Color::Green))),
            Line::from(vec![
                Span::styled(
                    format!("{}: ", result.group2_name),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    result.member2.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ]
    } else {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                app.selection_hint(),
                Style::default().fg(Color::Gray),
            )),
        ]
    };

    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(block);
    frame.render_widget(panel, area);
}
