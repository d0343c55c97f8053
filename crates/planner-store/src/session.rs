//! The single owner of the current state.
//!
//! There is no global state: a `Session` holds the live [`PlanState`]
//! value and threads it through checkpointing and the transition function.
//! Callers validate candidates first (see `planner-validate`) and only
//! dispatch accepted commands.

use chrono::Utc;
use planner_model::{ActionDescriptor, ActionKind, Command, PlanState};
use tracing::debug;

use crate::apply::apply;
use crate::history::{clear_history, record_checkpoint, redo, undo};

#[derive(Debug, Default)]
pub struct Session {
    state: PlanState,
}

impl Session {
    pub fn new(state: PlanState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &PlanState {
        &self.state
    }

    /// Take ownership of the state back, consuming the session.
    pub fn into_state(self) -> PlanState {
        self.state
    }

    /// Checkpoint (for undoable commands) and apply.
    pub fn dispatch(&mut self, command: Command) {
        debug!(command = command.describe(), "dispatch");
        let mut state = std::mem::take(&mut self.state);
        if let Some(descriptor) = descriptor_for(&command) {
            state = record_checkpoint(state, descriptor);
        }
        self.state = apply(state, &command);
    }

    /// Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.state.can_undo() {
            return false;
        }
        let state = std::mem::take(&mut self.state);
        self.state = undo(state);
        true
    }

    /// Returns false when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.state.can_redo() {
            return false;
        }
        let state = std::mem::take(&mut self.state);
        self.state = redo(state);
        true
    }

    pub fn clear_history(&mut self) {
        let state = std::mem::take(&mut self.state);
        self.state = clear_history(state);
    }
}

/// Build the history descriptor for an undoable command; `None` for
/// commands that are not checkpointed (filters, UI chrome, flags).
fn descriptor_for(command: &Command) -> Option<ActionDescriptor> {
    if !command.is_undoable() {
        return None;
    }
    let kind = match command {
        Command::AddTeacher(_)
        | Command::AddSubject(_)
        | Command::AddClassroom(_)
        | Command::AddAssignment(_) => ActionKind::Create,
        Command::UpdateTeacher(_)
        | Command::UpdateSubject(_)
        | Command::UpdateClassroom(_)
        | Command::UpdateAssignment(_) => ActionKind::Update,
        Command::DeleteTeacher(_)
        | Command::DeleteSubject(_)
        | Command::DeleteClassroom(_)
        | Command::DeleteAssignment(_) => ActionKind::Delete,
        Command::BulkDeleteAssignments(_) => ActionKind::BulkDelete,
        Command::SetTeachers(_)
        | Command::SetSubjects(_)
        | Command::SetClassrooms(_)
        | Command::SetAssignments(_) => ActionKind::Import,
        Command::UpdateSettings(_) => ActionKind::Settings,
        _ => return None,
    };
    let descriptor = ActionDescriptor::new(kind, command.describe(), Utc::now());
    Some(match entity_id_of(command) {
        Some(id) => descriptor.with_entity_id(id),
        None => descriptor,
    })
}

fn entity_id_of(command: &Command) -> Option<String> {
    match command {
        Command::AddTeacher(t) | Command::UpdateTeacher(t) => Some(t.id.as_str().to_string()),
        Command::DeleteTeacher(id) => Some(id.as_str().to_string()),
        Command::AddSubject(s) | Command::UpdateSubject(s) => Some(s.id.as_str().to_string()),
        Command::DeleteSubject(id) => Some(id.as_str().to_string()),
        Command::AddClassroom(c) | Command::UpdateClassroom(c) => Some(c.id.as_str().to_string()),
        Command::DeleteClassroom(id) => Some(id.as_str().to_string()),
        Command::AddAssignment(a) | Command::UpdateAssignment(a) => {
            Some(a.id.as_str().to_string())
        }
        Command::DeleteAssignment(id) => Some(id.as_str().to_string()),
        _ => None,
    }
}
