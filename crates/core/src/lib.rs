//! Deterministic roster logic and data types shared across the runtime and CLI.
//!
//! `sorteo-core` defines the canonical rules of the raffle: the group roster,
//! the selection tracker, and the pairing procedure. All state mutation flows
//! through [`engine::RosterEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod action;
pub mod engine;
pub mod env;
pub mod pairing;
pub mod state;

pub use action::{
    Action, ActionTransition, AddGroupAction, AddMemberAction, Applied, DrawAction, DrawError,
    IgnoreReason, RemoveGroupAction, RemoveMemberAction, ResetAction, SetMemberTargetAction,
    SettleDrawAction, ToggleSelectionAction,
};
pub use engine::{ExecuteError, ExecutionOutcome, RosterEngine};
pub use env::{PcgRng, RngOracle, RosterEnv, compute_seed};
pub use state::{Group, GroupId, PairingResult, PendingDraw, RosterSnapshot, RosterState};
