//! Action execution pipeline.
//!
//! The [`RosterEngine`] is the authoritative reducer for [`RosterState`].
//! Every mutation, including the runtime-issued draw settlement, flows
//! through the same `execute()` path, which bumps the action nonce and
//! classifies the outcome for callers.

use crate::action::{Action, ActionTransition, Applied, DrawError};
use crate::env::RosterEnv;
use crate::state::RosterState;

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// What the action did.
    pub applied: Applied,
    /// True when the persisted group list changed and a snapshot should be
    /// written.
    pub roster_changed: bool,
}

/// Errors surfaced while executing an action through the engine.
///
/// Only draws fail loudly; every other misuse is absorbed as a quiet no-op
/// and reported through [`Applied::Ignored`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("draw failed: {0}")]
    Draw(#[from] DrawError),
}

impl From<std::convert::Infallible> for ExecuteError {
    fn from(error: std::convert::Infallible) -> Self {
        match error {}
    }
}

/// Reducer that owns a mutable borrow of the roster state for one execution.
pub struct RosterEngine<'a> {
    state: &'a mut RosterState,
}

impl<'a> RosterEngine<'a> {
    pub fn new(state: &'a mut RosterState) -> Self {
        Self { state }
    }

    /// Executes an action through its transition pipeline.
    ///
    /// On `Err` the state is untouched. The nonce advances for every applied
    /// action, so successive draws derive distinct RNG seeds.
    pub fn execute(
        &mut self,
        env: &RosterEnv<'_>,
        action: &Action,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let applied = match action {
            Action::AddGroup(a) => run(a, self.state, env)?,
            Action::RemoveGroup(a) => run(a, self.state, env)?,
            Action::AddMember(a) => run(a, self.state, env)?,
            Action::SetMemberTarget(a) => run(a, self.state, env)?,
            Action::RemoveMember(a) => run(a, self.state, env)?,
            Action::ToggleSelection(a) => run(a, self.state, env)?,
            Action::Draw(a) => run(a, self.state, env)?,
            Action::SettleDraw(a) => run(a, self.state, env)?,
            Action::Reset(a) => run(a, self.state, env)?,
        };

        if applied.changed() {
            self.state.nonce += 1;
        }

        let roster_changed = applied.changed() && action.touches_roster();
        Ok(ExecutionOutcome {
            applied,
            roster_changed,
        })
    }
}

fn run<A>(
    action: &A,
    state: &mut RosterState,
    env: &RosterEnv<'_>,
) -> Result<Applied, ExecuteError>
where
    A: ActionTransition,
    ExecuteError: From<A::Error>,
{
    action.pre_validate(state)?;
    Ok(action.apply(state, env)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::IgnoreReason;
    use crate::env::PcgRng;
    use crate::state::GroupId;

    fn exec(state: &mut RosterState, action: Action) -> Result<ExecutionOutcome, ExecuteError> {
        let env = RosterEnv::new(&PcgRng);
        RosterEngine::new(state).execute(&env, &action)
    }

    fn applied(state: &mut RosterState, action: Action) -> Applied {
        exec(state, action).expect("action should apply").applied
    }

    fn state_with_groups(specs: &[(&str, &[&str])]) -> RosterState {
        let mut state = RosterState::new(99);
        for (name, members) in specs {
            applied(&mut state, Action::add_group(*name));
            let id = state.groups.last().unwrap().id;
            applied(&mut state, Action::set_member_target(id));
            for member in *members {
                applied(&mut state, Action::add_member(id, *member));
            }
        }
        state
    }

    #[test]
    fn add_group_appends_with_unique_id_and_no_members() {
        let mut state = RosterState::new(0);
        applied(&mut state, Action::add_group("Novias"));
        applied(&mut state, Action::add_group("Novios"));

        assert_eq!(state.groups.len(), 2);
        assert_ne!(state.groups[0].id, state.groups[1].id);
        assert!(state.groups.iter().all(|g| g.members.is_empty()));
        // First group became the member destination.
        assert_eq!(state.member_target, Some(state.groups[0].id));
    }

    #[test]
    fn add_group_ignores_blank_names() {
        let mut state = RosterState::new(0);
        assert_eq!(
            applied(&mut state, Action::add_group("")),
            Applied::Ignored(IgnoreReason::EmptyName)
        );
        assert_eq!(
            applied(&mut state, Action::add_group("   ")),
            Applied::Ignored(IgnoreReason::EmptyName)
        );
        assert!(state.groups.is_empty());
        assert_eq!(state.nonce, 0);
    }

    #[test]
    fn add_member_requires_matching_target() {
        let mut state = state_with_groups(&[("A", &[]), ("B", &[])]);
        let a = state.groups[0].id;
        let b = state.groups[1].id;
        applied(&mut state, Action::set_member_target(b));

        assert_eq!(
            applied(&mut state, Action::add_member(a, "Ana")),
            Applied::Ignored(IgnoreReason::NotMemberTarget)
        );
        assert_eq!(
            applied(&mut state, Action::add_member(b, "Ana")),
            Applied::Changed
        );
        assert_eq!(state.groups[1].members, vec!["Ana".to_string()]);
    }

    #[test]
    fn remove_member_by_position() {
        let mut state = state_with_groups(&[("G", &["a", "b", "c"])]);
        let id = state.groups[0].id;

        applied(&mut state, Action::remove_member(id, 1));
        assert_eq!(state.groups[0].members, vec!["a".to_string(), "c".to_string()]);

        assert_eq!(
            applied(&mut state, Action::remove_member(id, 5)),
            Applied::Ignored(IgnoreReason::IndexOutOfBounds)
        );
        assert_eq!(state.groups[0].members.len(), 2);
    }

    #[test]
    fn remove_group_fixes_selection_and_target() {
        let mut state = state_with_groups(&[("A", &[]), ("B", &[]), ("C", &[])]);
        let a = state.groups[0].id;
        let b = state.groups[1].id;
        applied(&mut state, Action::toggle_selection(a));
        applied(&mut state, Action::toggle_selection(b));
        applied(&mut state, Action::set_member_target(a));

        applied(&mut state, Action::remove_group(a));
        assert_eq!(state.selected, vec![b]);
        assert_eq!(state.member_target, Some(b));

        // Unknown id is a quiet no-op.
        assert_eq!(
            applied(&mut state, Action::remove_group(GroupId(999))),
            Applied::Ignored(IgnoreReason::UnknownGroup)
        );
    }

    #[test]
    fn remove_last_group_clears_target() {
        let mut state = state_with_groups(&[("A", &[])]);
        let a = state.groups[0].id;
        applied(&mut state, Action::remove_group(a));
        assert_eq!(state.member_target, None);
    }

    #[test]
    fn selection_never_exceeds_two() {
        let mut state = state_with_groups(&[("A", &[]), ("B", &[]), ("C", &[])]);
        let ids: Vec<GroupId> = state.groups.iter().map(|g| g.id).collect();

        applied(&mut state, Action::toggle_selection(ids[0]));
        applied(&mut state, Action::toggle_selection(ids[1]));
        assert_eq!(
            applied(&mut state, Action::toggle_selection(ids[2])),
            Applied::Ignored(IgnoreReason::SelectionFull)
        );
        assert_eq!(state.selected, vec![ids[0], ids[1]]);

        // Deselecting frees a slot.
        applied(&mut state, Action::toggle_selection(ids[0]));
        applied(&mut state, Action::toggle_selection(ids[2]));
        assert_eq!(state.selected, vec![ids[1], ids[2]]);
    }

    #[test]
    fn draw_requires_two_selected_groups() {
        let mut state = state_with_groups(&[("A", &["a"])]);
        let a = state.groups[0].id;
        applied(&mut state, Action::toggle_selection(a));

        let err = exec(&mut state, Action::draw()).unwrap_err();
        assert_eq!(
            err,
            ExecuteError::Draw(DrawError::SelectionIncomplete { selected: 1 })
        );
    }

    #[test]
    fn draw_rejects_empty_group_without_mutation() {
        let mut state = state_with_groups(&[("A", &["a"]), ("B", &[])]);
        let ids: Vec<GroupId> = state.groups.iter().map(|g| g.id).collect();
        applied(&mut state, Action::toggle_selection(ids[0]));
        applied(&mut state, Action::toggle_selection(ids[1]));

        let before = state.clone();
        let err = exec(&mut state, Action::draw()).unwrap_err();
        assert_eq!(
            err,
            ExecuteError::Draw(DrawError::EmptyGroup {
                name: "B".to_string()
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn draw_defers_removal_until_settlement() {
        let mut state = state_with_groups(&[("A", &["Marcelo"]), ("B", &["Mariana", "Luis"])]);
        let ids: Vec<GroupId> = state.groups.iter().map(|g| g.id).collect();
        applied(&mut state, Action::toggle_selection(ids[0]));
        applied(&mut state, Action::toggle_selection(ids[1]));

        let outcome = exec(&mut state, Action::draw()).unwrap();
        let Applied::DrawStarted(result) = outcome.applied else {
            panic!("expected DrawStarted, got {:?}", outcome.applied);
        };
        assert_eq!(result.member1, "Marcelo");
        assert_eq!(result.member2, "Mariana");
        assert!(!outcome.roster_changed);

        // Members still present until the deferred removal runs.
        assert_eq!(state.groups[0].members.len(), 1);
        assert_eq!(state.groups[1].members.len(), 2);
        assert!(state.is_drawing());

        // A second draw is rejected while one is pending.
        let err = exec(&mut state, Action::draw()).unwrap_err();
        assert_eq!(err, ExecuteError::Draw(DrawError::DrawInProgress));

        let outcome = exec(&mut state, Action::settle_draw()).unwrap();
        assert_eq!(outcome.applied, Applied::DrawSettled);
        assert!(outcome.roster_changed);
        assert!(state.groups[0].members.is_empty());
        assert_eq!(state.groups[1].members, vec!["Luis".to_string()]);
        assert!(!state.is_drawing());
    }

    #[test]
    fn settlement_uses_captured_indices_despite_other_mutations() {
        let mut state = state_with_groups(&[
            ("A", &["Marcelo"]),
            ("B", &["Mariana", "Luis"]),
            ("C", &["Pepe"]),
        ]);
        let ids: Vec<GroupId> = state.groups.iter().map(|g| g.id).collect();
        applied(&mut state, Action::toggle_selection(ids[0]));
        applied(&mut state, Action::toggle_selection(ids[1]));
        exec(&mut state, Action::draw()).unwrap();

        // Mutate an unrelated group during the delay.
        applied(&mut state, Action::remove_group(ids[2]));

        exec(&mut state, Action::settle_draw()).unwrap();
        assert!(state.groups[0].members.is_empty());
        assert_eq!(state.groups[1].members, vec!["Luis".to_string()]);
    }

    #[test]
    fn settle_without_pending_is_quietly_ignored() {
        let mut state = RosterState::new(0);
        assert_eq!(
            applied(&mut state, Action::settle_draw()),
            Applied::Ignored(IgnoreReason::NothingPending)
        );
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = state_with_groups(&[("A", &["Marcelo"]), ("B", &["Mariana"])]);
        let ids: Vec<GroupId> = state.groups.iter().map(|g| g.id).collect();
        applied(&mut state, Action::toggle_selection(ids[0]));
        applied(&mut state, Action::toggle_selection(ids[1]));
        exec(&mut state, Action::draw()).unwrap();

        applied(&mut state, Action::reset());
        assert!(state.groups.is_empty());
        assert!(state.selected.is_empty());
        assert_eq!(state.member_target, None);
        assert!(state.pending.is_none());
        assert!(state.result.is_none());
    }
}
