//! Authoritative roster state representation.
//!
//! This module owns the group list, the selection tracker, and the transient
//! draw bookkeeping. Consumers clone or query this state but mutate it
//! exclusively through [`crate::engine::RosterEngine`].
mod types;

pub use types::{Group, GroupId, PairingResult, PendingDraw, RosterSnapshot};

/// Canonical state of one raffle session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterState {
    /// RNG seed for deterministic draws.
    ///
    /// Set once at session start and never modified. Combined with `nonce`
    /// to derive a unique seed for each random pick.
    pub seed: u64,

    /// Action sequence number, incremented by the engine after every applied
    /// action.
    pub nonce: u64,

    /// Sequential group id allocator (monotonically increasing, never reused).
    next_group_id: u32,

    /// Ordered list of groups.
    pub groups: Vec<Group>,

    /// Groups chosen for the next draw, in selection order. Never holds more
    /// than two ids; the first is "group1" for the pairing rule.
    pub selected: Vec<GroupId>,

    /// Destination group for new members.
    pub member_target: Option<GroupId>,

    /// Draw whose member removal is still deferred. While set, further draws
    /// are rejected.
    pub pending: Option<PendingDraw>,

    /// Result of the most recent draw.
    pub result: Option<PairingResult>,
}

impl RosterState {
    /// Creates an empty roster with the given RNG seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            nonce: 0,
            next_group_id: 1,
            groups: Vec::new(),
            selected: Vec::new(),
            member_target: None,
            pending: None,
            result: None,
        }
    }

    /// Restores a roster from a persisted snapshot.
    ///
    /// Selections and draw bookkeeping start empty; the member target falls
    /// back to the first restored group, matching the behavior of adding the
    /// first group to an empty store.
    pub fn from_snapshot(seed: u64, snapshot: RosterSnapshot) -> Self {
        let member_target = snapshot.groups.first().map(|g| g.id);
        Self {
            seed,
            nonce: 0,
            next_group_id: snapshot.next_group_id,
            groups: snapshot.groups,
            selected: Vec::new(),
            member_target,
            pending: None,
            result: None,
        }
    }

    /// Captures the persistent portion of the state.
    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot {
            groups: self.groups.clone(),
            next_group_id: self.next_group_id,
        }
    }

    /// Allocates a new unique [`GroupId`].
    pub fn allocate_group_id(&mut self) -> GroupId {
        let id = GroupId(self.next_group_id);
        self.next_group_id = self
            .next_group_id
            .checked_add(1)
            .expect("GroupId overflow");
        id
    }

    /// Looks up a group by id.
    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Looks up a group by id, mutably.
    pub fn group_mut(&mut self, id: GroupId) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.id == id)
    }

    /// Returns true if `id` is currently selected for the draw.
    pub fn is_selected(&self, id: GroupId) -> bool {
        self.selected.contains(&id)
    }

    /// Resolves the two selected groups in selection order, if exactly two
    /// are selected.
    pub fn selected_groups(&self) -> Option<(&Group, &Group)> {
        match self.selected.as_slice() {
            [first, second] => Some((self.group(*first)?, self.group(*second)?)),
            _ => None,
        }
    }

    /// Returns true while a draw is awaiting settlement.
    pub fn is_drawing(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_unique_monotonic_ids() {
        let mut state = RosterState::new(0);
        let a = state.allocate_group_id();
        let b = state.allocate_group_id();
        let c = state.allocate_group_id();
        assert!(a < b && b < c);
    }

    #[test]
    fn snapshot_round_trip_preserves_groups_and_allocator() {
        let mut state = RosterState::new(7);
        let id = state.allocate_group_id();
        let mut group = Group::new(id, "Familia");
        group.members.push("Ana".to_string());
        state.groups.push(group);

        let restored = RosterState::from_snapshot(7, state.snapshot());
        assert_eq!(restored.groups, state.groups);
        // Next allocation must not collide with restored ids.
        let mut restored = restored;
        let fresh = restored.allocate_group_id();
        assert!(restored.groups.iter().all(|g| g.id != fresh));
    }

    #[test]
    fn from_snapshot_targets_first_group() {
        let mut state = RosterState::new(0);
        let first = state.allocate_group_id();
        let second = state.allocate_group_id();
        state.groups.push(Group::new(first, "A"));
        state.groups.push(Group::new(second, "B"));
        state.member_target = Some(second);

        let restored = RosterState::from_snapshot(0, state.snapshot());
        assert_eq!(restored.member_target, Some(first));
        assert!(restored.selected.is_empty());
        assert!(restored.result.is_none());
    }

    #[test]
    fn selected_groups_requires_exactly_two() {
        let mut state = RosterState::new(0);
        let id = state.allocate_group_id();
        state.groups.push(Group::new(id, "A"));
        state.selected.push(id);
        assert!(state.selected_groups().is_none());
    }
}
