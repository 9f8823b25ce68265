//! Action outcome classification.
//!
//! Failures fall into two tiers: quiet no-ops ([`IgnoreReason`]) that discard
//! the input without touching state, and reported failures ([`DrawError`])
//! that must surface a user-visible message.

/// Why an action was quietly discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Name was empty after trimming.
    EmptyName,
    /// The referenced group no longer exists.
    UnknownGroup,
    /// No destination group is set for new members.
    NoMemberTarget,
    /// The referenced group is not the current member destination.
    NotMemberTarget,
    /// Member index is past the end of the list.
    IndexOutOfBounds,
    /// Two groups are already selected.
    SelectionFull,
    /// No draw is awaiting settlement.
    NothingPending,
}

/// Errors surfaced to the user when a draw cannot run.
///
/// None of these mutate state; the user corrects the precondition and
/// re-invokes the draw.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    #[error("select two groups before drawing ({selected} selected)")]
    SelectionIncomplete { selected: usize },

    #[error("both groups must have at least one member (\"{name}\" is empty)")]
    EmptyGroup { name: String },

    #[error("a draw is already in progress")]
    DrawInProgress,
}
