//! Core data types for the roster: groups, draw results, snapshots.

/// Unique identifier for a group, allocated by [`super::RosterState`].
///
/// Ids are monotonically increasing within a session and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupId(pub u32);

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "group#{}", self.0)
    }
}

/// A named, ordered collection of member names.
///
/// Member order is insertion order and is significant for display and for
/// index-based removal. Duplicate names are permitted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub members: Vec<String>,
}

impl Group {
    /// Creates a group with no members.
    pub fn new(id: GroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            members: Vec::new(),
        }
    }
}

/// Outcome of one draw: the chosen member from each side, with group names
/// for display. Replaced by the next draw, cleared by a reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairingResult {
    pub group1_name: String,
    pub group2_name: String,
    pub member1: String,
    pub member2: String,
}

/// Marker for a draw whose member removal has not been applied yet.
///
/// The indices are captured at draw time and the settlement removes exactly
/// those positions, without reconsulting member values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingDraw {
    pub group1: GroupId,
    pub index1: usize,
    pub group2: GroupId,
    pub index2: usize,
}

/// Serializable persistence form of the roster.
///
/// Only the group list and the id allocator survive across sessions;
/// selections, pending draws, and results are session-transient.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterSnapshot {
    pub groups: Vec<Group>,
    pub next_group_id: u32,
}
