//! Groups pane: every group with its selection and target markers.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.roster.groups.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No groups yet.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "Press 'a' to add one",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block.title(" Groups "));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .roster
        .groups
        .iter()
        .enumerate()
        .map(|(idx, group)| {
            let is_highlighted = idx == app.cursor;
            let prefix = if is_highlighted { "► " } else { "  " };

            // Selection slot: [1] / [2] by selection order.
            let slot = match app.roster.selected.iter().position(|&id| id == group.id) {
                Some(0) => "[1]",
                Some(_) => "[2]",
                None => "[ ]",
            };
            let target = if app.roster.member_target == Some(group.id) {
                " *"
            } else {
                "  "
            };

            let name_style = if is_highlighted {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let line = Line::from(vec![
                Span::styled(prefix, Style::default().fg(Color::Yellow)),
                Span::styled(slot, Style::default().fg(Color::Magenta)),
                Span::styled(target, Style::default().fg(Color::Green)),
                Span::raw(" "),
                Span::styled(group.name.clone(), name_style),
                Span::styled(
                    format!("  ({})", group.members.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block.title(" Groups (space: select, *: member target) "));
    frame.render_widget(list, area);
}
