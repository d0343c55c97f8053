//! History manager: bounded undo/redo over whole-state snapshots.
//!
//! Checkpoints store the state *before* a mutating command, as a
//! history-free [`planner_model::Snapshot`]. Undo and redo move entries
//! between the `past` and `future` stacks; at an empty stack they are
//! documented no-ops, so callers gate on `can_undo`/`can_redo` instead of
//! catching errors.

use planner_model::{ActionDescriptor, HistoryEntry, PlanState};
use tracing::debug;

/// Record the current state as an undo step for the action about to run.
///
/// Trims `past` to the configured limit (oldest entries dropped) and
/// clears `future`: once a new forward move is made, any redo branch is
/// invalidated.
#[must_use]
pub fn record_checkpoint(mut state: PlanState, action: ActionDescriptor) -> PlanState {
    let snapshot = state.to_snapshot();
    debug!(kind = action.kind.as_str(), label = %action.label, "checkpoint");
    state.history.past.push(HistoryEntry { snapshot, action });
    let overflow = state
        .history
        .past
        .len()
        .saturating_sub(state.history.limit);
    if overflow > 0 {
        state.history.past.drain(..overflow);
    }
    state.history.future.clear();
    state
}

/// Step back to the most recent checkpoint. No-op when `past` is empty.
///
/// The displaced current state is stored (history-free) at the front of
/// `future`, paired with the action that produced it, so redo can both
/// restore it and label itself.
#[must_use]
pub fn undo(mut state: PlanState) -> PlanState {
    let Some(entry) = state.history.past.pop() else {
        return state;
    };
    debug!(label = %entry.action.label, "undo");
    let displaced = HistoryEntry {
        snapshot: state.to_snapshot(),
        action: entry.action.clone(),
    };
    state.history.future.insert(0, displaced);
    state.restore_snapshot(entry.snapshot);
    state
}

/// Step forward again after an undo. No-op when `future` is empty.
#[must_use]
pub fn redo(mut state: PlanState) -> PlanState {
    if state.history.future.is_empty() {
        return state;
    }
    let entry = state.history.future.remove(0);
    debug!(label = %entry.action.label, "redo");
    let displaced = HistoryEntry {
        snapshot: state.to_snapshot(),
        action: entry.action.clone(),
    };
    state.history.past.push(displaced);
    let overflow = state
        .history
        .past
        .len()
        .saturating_sub(state.history.limit);
    if overflow > 0 {
        state.history.past.drain(..overflow);
    }
    state.restore_snapshot(entry.snapshot);
    state
}

/// Drop both stacks.
#[must_use]
pub fn clear_history(mut state: PlanState) -> PlanState {
    state.history.past.clear();
    state.history.future.clear();
    state
}
