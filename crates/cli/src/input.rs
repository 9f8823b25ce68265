//! Input processing for the terminal client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events. Mode transitions and cursor movement are
//! applied to [`AppState`] directly; anything that must mutate the roster is
//! returned as a [`KeyAction::Submit`].

use crossterm::event::{KeyCode, KeyEvent};
use sorteo_core::Action;

use crate::state::{AppMode, AppState};

/// High-level outcome of processing a keyboard event.
#[derive(Debug)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Submit the decoded action to the runtime.
    Submit(Action),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into session actions and UI state changes.
#[derive(Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command, updating UI
    /// state (mode, cursors) along the way.
    pub fn handle_key(&self, key: KeyEvent, app: &mut AppState) -> KeyAction {
        match &app.mode {
            AppMode::Browse => self.handle_browse(key, app),
            AppMode::AddGroup { .. } | AppMode::AddMember { .. } => self.handle_entry(key, app),
        }
    }

    fn handle_browse(&self, key: KeyEvent, app: &mut AppState) -> KeyAction {
        match key.code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('a') => {
                app.mode = AppMode::AddGroup {
                    input: String::new(),
                };
                KeyAction::None
            }
            KeyCode::Char('m') => {
                if app.roster.member_target.is_some() {
                    app.mode = AppMode::AddMember {
                        input: String::new(),
                    };
                } else {
                    app.status = Some("Add a group before adding members".to_string());
                }
                KeyAction::None
            }
            KeyCode::Char('t') => match app.highlighted_group_id() {
                Some(id) => KeyAction::Submit(Action::set_member_target(id)),
                None => KeyAction::None,
            },
            KeyCode::Char(' ') => {
                // A third selection is disabled, matching the grayed-out
                // checkboxes of the selection UI.
                if !app.can_toggle_highlighted() {
                    return KeyAction::None;
                }
                match app.highlighted_group_id() {
                    Some(id) => KeyAction::Submit(Action::toggle_selection(id)),
                    None => KeyAction::None,
                }
            }
            KeyCode::Char('d') | KeyCode::Enter => {
                if app.roster.is_drawing() {
                    return KeyAction::None;
                }
                KeyAction::Submit(Action::draw())
            }
            KeyCode::Char('x') => match app.highlighted_group_id() {
                Some(id) => KeyAction::Submit(Action::remove_member(id, app.member_cursor)),
                None => KeyAction::None,
            },
            KeyCode::Char('X') => match app.highlighted_group_id() {
                Some(id) => KeyAction::Submit(Action::remove_group(id)),
                None => KeyAction::None,
            },
            KeyCode::Char('R') => KeyAction::Submit(Action::reset()),
            KeyCode::Up | KeyCode::Char('k') => {
                app.move_cursor_up();
                KeyAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.move_cursor_down();
                KeyAction::None
            }
            KeyCode::Char('K') => {
                app.move_member_cursor_up();
                KeyAction::None
            }
            KeyCode::Char('J') => {
                app.move_member_cursor_down();
                KeyAction::None
            }
            _ => KeyAction::None,
        }
    }

    fn handle_entry(&self, key: KeyEvent, app: &mut AppState) -> KeyAction {
        match key.code {
            KeyCode::Esc => {
                app.mode = AppMode::Browse;
                KeyAction::None
            }
            KeyCode::Enter => {
                let action = match std::mem::replace(&mut app.mode, AppMode::Browse) {
                    AppMode::AddGroup { input } => Some(Action::add_group(input)),
                    AppMode::AddMember { input } => app
                        .roster
                        .member_target
                        .map(|target| Action::add_member(target, input)),
                    AppMode::Browse => None,
                };
                match action {
                    Some(action) => KeyAction::Submit(action),
                    None => KeyAction::None,
                }
            }
            KeyCode::Backspace => {
                if let AppMode::AddGroup { input } | AppMode::AddMember { input } = &mut app.mode {
                    input.pop();
                }
                KeyAction::None
            }
            KeyCode::Char(ch) => {
                if let AppMode::AddGroup { input } | AppMode::AddMember { input } = &mut app.mode {
                    input.push(ch);
                }
                KeyAction::None
            }
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use sorteo_core::{Group, RosterState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn app_with_groups(count: usize) -> AppState {
        let mut roster = RosterState::new(0);
        for i in 0..count {
            let id = roster.allocate_group_id();
            roster.groups.push(Group::new(id, format!("G{i}")));
        }
        roster.member_target = roster.groups.first().map(|g| g.id);
        AppState::new(roster)
    }

    #[test]
    fn maps_quit_and_navigation() {
        let handler = InputHandler::new();
        let mut app = app_with_groups(2);

        assert!(matches!(
            handler.handle_key(key(KeyCode::Char('q')), &mut app),
            KeyAction::Quit
        ));

        handler.handle_key(key(KeyCode::Down), &mut app);
        assert_eq!(app.cursor, 1);
        handler.handle_key(key(KeyCode::Char('k')), &mut app);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn space_toggles_selection_until_full() {
        let handler = InputHandler::new();
        let mut app = app_with_groups(3);
        let (a, b) = (app.roster.groups[0].id, app.roster.groups[1].id);

        assert!(matches!(
            handler.handle_key(key(KeyCode::Char(' ')), &mut app),
            KeyAction::Submit(Action::ToggleSelection(_))
        ));

        // With two groups selected the third is inert.
        app.roster.selected = vec![a, b];
        app.cursor = 2;
        assert!(matches!(
            handler.handle_key(key(KeyCode::Char(' ')), &mut app),
            KeyAction::None
        ));
    }

    #[test]
    fn add_group_flow_collects_text() {
        let handler = InputHandler::new();
        let mut app = app_with_groups(0);

        handler.handle_key(key(KeyCode::Char('a')), &mut app);
        assert!(matches!(app.mode, AppMode::AddGroup { .. }));

        for ch in "Novias".chars() {
            handler.handle_key(key(KeyCode::Char(ch)), &mut app);
        }
        handler.handle_key(key(KeyCode::Backspace), &mut app);

        let action = handler.handle_key(key(KeyCode::Enter), &mut app);
        match action {
            KeyAction::Submit(Action::AddGroup(add)) => assert_eq!(add.name, "Novia"),
            other => panic!("expected AddGroup submit, got {other:?}"),
        }
        assert_eq!(app.mode, AppMode::Browse);
    }

    #[test]
    fn escape_cancels_text_entry() {
        let handler = InputHandler::new();
        let mut app = app_with_groups(1);

        handler.handle_key(key(KeyCode::Char('m')), &mut app);
        assert!(matches!(app.mode, AppMode::AddMember { .. }));
        handler.handle_key(key(KeyCode::Esc), &mut app);
        assert_eq!(app.mode, AppMode::Browse);
    }

    #[test]
    fn draw_key_is_inert_while_drawing() {
        let handler = InputHandler::new();
        let mut app = app_with_groups(2);
        app.roster.pending = Some(sorteo_core::PendingDraw {
            group1: app.roster.groups[0].id,
            index1: 0,
            group2: app.roster.groups[1].id,
            index2: 0,
        });

        assert!(matches!(
            handler.handle_key(key(KeyCode::Char('d')), &mut app),
            KeyAction::None
        ));
    }
}
