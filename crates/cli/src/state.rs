//! Application state for mode management and UI context.

use sorteo_core::{Group, GroupId, RosterState};

/// Top-level application mode determining input handling and UI layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppMode {
    /// Normal browsing: navigate groups/members, select, draw.
    Browse,
    /// Text entry for a new group name.
    AddGroup { input: String },
    /// Text entry for a new member of the current target group.
    AddMember { input: String },
}

/// Mutable application state tracking mode, cursors, and the latest roster.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Current application mode.
    pub mode: AppMode,
    /// Latest roster copy received from the runtime.
    pub roster: RosterState,
    /// Index of the highlighted group.
    pub cursor: usize,
    /// Index of the highlighted member within the highlighted group.
    pub member_cursor: usize,
    /// Last user-facing notice (draw rejections and the like).
    pub status: Option<String>,
}

impl AppState {
    pub fn new(roster: RosterState) -> Self {
        Self {
            mode: AppMode::Browse,
            roster,
            cursor: 0,
            member_cursor: 0,
            status: None,
        }
    }

    /// Replace the roster copy and clamp cursors to the new shape.
    pub fn set_roster(&mut self, roster: RosterState) {
        self.roster = roster;
        self.clamp_cursors();
    }

    fn clamp_cursors(&mut self) {
        if self.roster.groups.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.roster.groups.len() - 1);
        }
        let members = self.highlighted_group().map_or(0, |g| g.members.len());
        if members == 0 {
            self.member_cursor = 0;
        } else {
            self.member_cursor = self.member_cursor.min(members - 1);
        }
    }

    /// The group the cursor is on, if any.
    pub fn highlighted_group(&self) -> Option<&Group> {
        self.roster.groups.get(self.cursor)
    }

    pub fn highlighted_group_id(&self) -> Option<GroupId> {
        self.highlighted_group().map(|g| g.id)
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.member_cursor = 0;
    }

    pub fn move_cursor_down(&mut self) {
        if !self.roster.groups.is_empty() {
            self.cursor = (self.cursor + 1).min(self.roster.groups.len() - 1);
            self.member_cursor = 0;
        }
    }

    pub fn move_member_cursor_up(&mut self) {
        self.member_cursor = self.member_cursor.saturating_sub(1);
    }

    pub fn move_member_cursor_down(&mut self) {
        let members = self.highlighted_group().map_or(0, |g| g.members.len());
        if members > 0 {
            self.member_cursor = (self.member_cursor + 1).min(members - 1);
        }
    }

    /// True when the highlighted group can still be toggled into the
    /// selection (a third choice is disabled, deselection always allowed).
    pub fn can_toggle_highlighted(&self) -> bool {
        match self.highlighted_group_id() {
            Some(id) => self.roster.is_selected(id) || self.roster.selected.len() < 2,
            None => false,
        }
    }

    /// Status hint mirroring the selection progress.
    pub fn selection_hint(&self) -> &'static str {
        if self.roster.is_drawing() {
            "Drawing..."
        } else {
            match self.roster.selected.len() {
                0 => "Select two groups to draw",
                1 => "Select one more group",
                _ => "Ready to draw!",
            }
        }
    }
}
