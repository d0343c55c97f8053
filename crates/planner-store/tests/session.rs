//! Session tests: the single owner threading state through checkpoint,
//! apply, undo, and redo.

use chrono::{TimeZone, Utc};
use planner_model::{ActionKind, Command, Level, PlanState, Subject, SubjectId};
use planner_store::Session;

fn subject(id: &str) -> Subject {
    let now = Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap();
    Subject {
        id: SubjectId::new(id).unwrap(),
        name: format!("Subject {id}"),
        code: id.to_uppercase(),
        required_hours: 4,
        level: Level::Primary,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn dispatch_checkpoints_undoable_commands() {
    let mut session = Session::new(PlanState::default());
    session.dispatch(Command::AddSubject(subject("s1")));

    let state = session.state();
    assert_eq!(state.data.subjects.len(), 1);
    assert!(state.can_undo());
    let entry = &state.history.past[0];
    assert_eq!(entry.action.kind, ActionKind::Create);
    assert_eq!(entry.action.label, "add subject");
    assert_eq!(entry.action.entity_id.as_deref(), Some("s1"));
}

#[test]
fn ui_commands_do_not_pollute_history() {
    let mut session = Session::new(PlanState::default());
    session.dispatch(Command::SetSearchTerm("math".to_string()));
    session.dispatch(Command::ToggleSidebar);
    assert!(!session.state().can_undo());
}

#[test]
fn undo_redo_through_the_session() {
    let mut session = Session::new(PlanState::default());
    session.dispatch(Command::AddSubject(subject("s1")));
    session.dispatch(Command::AddSubject(subject("s2")));
    assert_eq!(session.state().data.subjects.len(), 2);

    assert!(session.undo());
    assert_eq!(session.state().data.subjects.len(), 1);
    assert!(session.redo());
    assert_eq!(session.state().data.subjects.len(), 2);

    // Nothing left to redo; nothing changes and the call reports it.
    assert!(!session.redo());
    assert_eq!(session.state().data.subjects.len(), 2);
}

#[test]
fn empty_session_undo_is_a_no_op() {
    let mut session = Session::new(PlanState::default());
    assert!(!session.undo());
    assert!(!session.redo());
    session.clear_history();
    assert_eq!(session.into_state(), PlanState::default());
}
