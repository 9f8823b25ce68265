//! Action domain: every way the roster can change.
//!
//! Each user gesture maps to one [`Action`] variant backed by a small
//! transition struct. Transitions validate against the state they are about
//! to mutate and apply through [`crate::engine::RosterEngine`], the single
//! mutation path.

mod error;

pub use error::{DrawError, IgnoreReason};

use crate::env::RosterEnv;
use crate::pairing;
use crate::state::{Group, GroupId, PairingResult, PendingDraw, RosterState};

/// Defines how a concrete action variant mutates roster state.
///
/// `pre_validate` runs against the untouched state and is the only place a
/// transition may fail loudly; `apply` performs the mutation. Quiet no-ops
/// are modeled as [`Applied::Ignored`], not as errors.
pub trait ActionTransition {
    type Error;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &RosterState) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the roster state directly.
    fn apply(
        &self,
        state: &mut RosterState,
        env: &RosterEnv<'_>,
    ) -> Result<Applied, Self::Error>;
}

/// What an applied action did to the state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Applied {
    /// State mutated.
    Changed,
    /// Input discarded without touching state.
    Ignored(IgnoreReason),
    /// Draw succeeded; result recorded, member removal deferred.
    DrawStarted(PairingResult),
    /// Deferred member removal applied.
    DrawSettled,
}

impl Applied {
    /// Returns true unless the action was a quiet no-op.
    pub fn changed(&self) -> bool {
        !matches!(self, Applied::Ignored(_))
    }
}

/// Top-level action enum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    AddGroup(AddGroupAction),
    RemoveGroup(RemoveGroupAction),
    AddMember(AddMemberAction),
    SetMemberTarget(SetMemberTargetAction),
    RemoveMember(RemoveMemberAction),
    ToggleSelection(ToggleSelectionAction),
    Draw(DrawAction),
    SettleDraw(SettleDrawAction),
    Reset(ResetAction),
}

impl Action {
    pub fn add_group(name: impl Into<String>) -> Self {
        Self::AddGroup(AddGroupAction { name: name.into() })
    }

    pub fn remove_group(id: GroupId) -> Self {
        Self::RemoveGroup(RemoveGroupAction { id })
    }

    pub fn add_member(group: GroupId, name: impl Into<String>) -> Self {
        Self::AddMember(AddMemberAction {
            group,
            name: name.into(),
        })
    }

    pub fn set_member_target(id: GroupId) -> Self {
        Self::SetMemberTarget(SetMemberTargetAction { id })
    }

    pub fn remove_member(group: GroupId, index: usize) -> Self {
        Self::RemoveMember(RemoveMemberAction { group, index })
    }

    pub fn toggle_selection(id: GroupId) -> Self {
        Self::ToggleSelection(ToggleSelectionAction { id })
    }

    pub fn draw() -> Self {
        Self::Draw(DrawAction)
    }

    pub fn settle_draw() -> Self {
        Self::SettleDraw(SettleDrawAction)
    }

    pub fn reset() -> Self {
        Self::Reset(ResetAction)
    }

    /// Returns the snake_case name of the action, for logging.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::AddGroup(_) => "add_group",
            Action::RemoveGroup(_) => "remove_group",
            Action::AddMember(_) => "add_member",
            Action::SetMemberTarget(_) => "set_member_target",
            Action::RemoveMember(_) => "remove_member",
            Action::ToggleSelection(_) => "toggle_selection",
            Action::Draw(_) => "draw",
            Action::SettleDraw(_) => "settle_draw",
            Action::Reset(_) => "reset",
        }
    }

    /// True for actions that change the persisted group list when applied.
    pub fn touches_roster(&self) -> bool {
        matches!(
            self,
            Action::AddGroup(_)
                | Action::RemoveGroup(_)
                | Action::AddMember(_)
                | Action::RemoveMember(_)
                | Action::SettleDraw(_)
                | Action::Reset(_)
        )
    }
}

/// Create a group from a (trimmed) name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddGroupAction {
    pub name: String,
}

impl ActionTransition for AddGroupAction {
    type Error = std::convert::Infallible;

    fn apply(
        &self,
        state: &mut RosterState,
        _env: &RosterEnv<'_>,
    ) -> Result<Applied, Self::Error> {
        let name = self.name.trim();
        if name.is_empty() {
            return Ok(Applied::Ignored(IgnoreReason::EmptyName));
        }

        let id = state.allocate_group_id();
        state.groups.push(Group::new(id, name));

        // The first group in an empty store becomes the member destination.
        if state.member_target.is_none() {
            state.member_target = Some(id);
        }

        Ok(Applied::Changed)
    }
}

/// Remove a group and every reference to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemoveGroupAction {
    pub id: GroupId,
}

impl ActionTransition for RemoveGroupAction {
    type Error = std::convert::Infallible;

    fn apply(
        &self,
        state: &mut RosterState,
        _env: &RosterEnv<'_>,
    ) -> Result<Applied, Self::Error> {
        let Some(position) = state.groups.iter().position(|g| g.id == self.id) else {
            return Ok(Applied::Ignored(IgnoreReason::UnknownGroup));
        };

        state.groups.remove(position);
        state.selected.retain(|&id| id != self.id);
        if state.member_target == Some(self.id) {
            state.member_target = state.groups.first().map(|g| g.id);
        }

        Ok(Applied::Changed)
    }
}

/// Append a member to the current destination group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddMemberAction {
    pub group: GroupId,
    pub name: String,
}

impl ActionTransition for AddMemberAction {
    type Error = std::convert::Infallible;

    fn apply(
        &self,
        state: &mut RosterState,
        _env: &RosterEnv<'_>,
    ) -> Result<Applied, Self::Error> {
        let name = self.name.trim();
        if name.is_empty() {
            return Ok(Applied::Ignored(IgnoreReason::EmptyName));
        }
        let Some(target) = state.member_target else {
            return Ok(Applied::Ignored(IgnoreReason::NoMemberTarget));
        };
        if target != self.group {
            return Ok(Applied::Ignored(IgnoreReason::NotMemberTarget));
        }
        let Some(group) = state.group_mut(self.group) else {
            return Ok(Applied::Ignored(IgnoreReason::UnknownGroup));
        };

        group.members.push(name.to_string());
        Ok(Applied::Changed)
    }
}

/// Choose the destination group for new members.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetMemberTargetAction {
    pub id: GroupId,
}

impl ActionTransition for SetMemberTargetAction {
    type Error = std::convert::Infallible;

    fn apply(
        &self,
        state: &mut RosterState,
        _env: &RosterEnv<'_>,
    ) -> Result<Applied, Self::Error> {
        if state.group(self.id).is_none() {
            return Ok(Applied::Ignored(IgnoreReason::UnknownGroup));
        }
        state.member_target = Some(self.id);
        Ok(Applied::Changed)
    }
}

/// Remove a member by its current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemoveMemberAction {
    pub group: GroupId,
    pub index: usize,
}

impl ActionTransition for RemoveMemberAction {
    type Error = std::convert::Infallible;

    fn apply(
        &self,
        state: &mut RosterState,
        _env: &RosterEnv<'_>,
    ) -> Result<Applied, Self::Error> {
        let Some(group) = state.group_mut(self.group) else {
            return Ok(Applied::Ignored(IgnoreReason::UnknownGroup));
        };
        if self.index >= group.members.len() {
            return Ok(Applied::Ignored(IgnoreReason::IndexOutOfBounds));
        }

        group.members.remove(self.index);
        Ok(Applied::Changed)
    }
}

/// Select or deselect a group for the draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleSelectionAction {
    pub id: GroupId,
}

impl ActionTransition for ToggleSelectionAction {
    type Error = std::convert::Infallible;

    fn apply(
        &self,
        state: &mut RosterState,
        _env: &RosterEnv<'_>,
    ) -> Result<Applied, Self::Error> {
        if state.group(self.id).is_none() {
            return Ok(Applied::Ignored(IgnoreReason::UnknownGroup));
        }
        if state.is_selected(self.id) {
            state.selected.retain(|&id| id != self.id);
            return Ok(Applied::Changed);
        }
        if state.selected.len() >= 2 {
            return Ok(Applied::Ignored(IgnoreReason::SelectionFull));
        }

        state.selected.push(self.id);
        Ok(Applied::Changed)
    }
}

/// Run the pairing procedure over the two selected groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawAction;

impl ActionTransition for DrawAction {
    type Error = DrawError;

    fn pre_validate(&self, state: &RosterState) -> Result<(), Self::Error> {
        let (group1, group2) =
            state
                .selected_groups()
                .ok_or(DrawError::SelectionIncomplete {
                    selected: state.selected.len(),
                })?;
        if state.is_drawing() {
            return Err(DrawError::DrawInProgress);
        }
        for group in [group1, group2] {
            if group.members.is_empty() {
                return Err(DrawError::EmptyGroup {
                    name: group.name.clone(),
                });
            }
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut RosterState,
        env: &RosterEnv<'_>,
    ) -> Result<Applied, Self::Error> {
        let (group1, group2) =
            state
                .selected_groups()
                .ok_or(DrawError::SelectionIncomplete {
                    selected: state.selected.len(),
                })?;

        let pick = pairing::pick_pair(
            &group1.members,
            &group2.members,
            env.rng(),
            state.seed,
            state.nonce,
        )
        .ok_or_else(|| DrawError::EmptyGroup {
            name: group1.name.clone(),
        })?;

        let result = PairingResult {
            group1_name: group1.name.clone(),
            group2_name: group2.name.clone(),
            member1: group1.members[pick.index1].clone(),
            member2: group2.members[pick.index2].clone(),
        };
        let pending = PendingDraw {
            group1: group1.id,
            index1: pick.index1,
            group2: group2.id,
            index2: pick.index2,
        };

        state.result = Some(result.clone());
        state.pending = Some(pending);

        Ok(Applied::DrawStarted(result))
    }
}

/// Apply the deferred member removal for the pending draw.
///
/// Issued by the runtime's settlement task, never directly by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleDrawAction;

impl ActionTransition for SettleDrawAction {
    type Error = std::convert::Infallible;

    fn apply(
        &self,
        state: &mut RosterState,
        _env: &RosterEnv<'_>,
    ) -> Result<Applied, Self::Error> {
        let Some(pending) = state.pending.take() else {
            return Ok(Applied::Ignored(IgnoreReason::NothingPending));
        };

        // Each side settles independently: a group deleted during the delay
        // simply drops its half of the removal.
        for (id, index) in [
            (pending.group1, pending.index1),
            (pending.group2, pending.index2),
        ] {
            if let Some(group) = state.group_mut(id)
                && index < group.members.len()
            {
                group.members.remove(index);
            }
        }

        Ok(Applied::DrawSettled)
    }
}

/// Wipe the whole store: groups, selection, target, and draw bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetAction;

impl ActionTransition for ResetAction {
    type Error = std::convert::Infallible;

    fn apply(
        &self,
        state: &mut RosterState,
        _env: &RosterEnv<'_>,
    ) -> Result<Applied, Self::Error> {
        *state = RosterState::new(state.seed);
        Ok(Applied::Changed)
    }
}
