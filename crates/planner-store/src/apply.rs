//! The state transition function.
//!
//! One pure function covers every mutation. It is total: update or delete
//! commands naming an unknown id leave the state unchanged, and nothing in
//! here panics or performs I/O. Validation happens before dispatch, never
//! in here, which is what keeps the function total.

use planner_model::{Command, PlanState};
use tracing::debug;

/// Apply a command to a state, returning the next state.
///
/// Deterministic: the same `(state, command)` pair always produces the
/// same result. Timestamps on entities arrive pre-stamped inside the
/// command payload.
#[must_use]
pub fn apply(mut state: PlanState, command: &Command) -> PlanState {
    match command {
        // Teachers.
        Command::SetTeachers(teachers) => {
            state.data.teachers = teachers.clone();
        }
        Command::AddTeacher(teacher) => {
            state.data.teachers.push(teacher.clone());
        }
        Command::UpdateTeacher(teacher) => {
            if let Some(slot) = state.data.teachers.iter_mut().find(|t| t.id == teacher.id) {
                *slot = teacher.clone();
            }
        }
        Command::DeleteTeacher(id) => {
            state.data.teachers.retain(|t| t.id != *id);
            let before = state.data.assignments.len();
            state.data.assignments.retain(|a| a.teacher_id != *id);
            debug!(
                teacher = %id,
                cascaded = before - state.data.assignments.len(),
                "deleted teacher"
            );
            prune_ui(&mut state, id.as_str());
        }

        // Subjects.
        Command::SetSubjects(subjects) => {
            state.data.subjects = subjects.clone();
        }
        Command::AddSubject(subject) => {
            state.data.subjects.push(subject.clone());
        }
        Command::UpdateSubject(subject) => {
            if let Some(slot) = state.data.subjects.iter_mut().find(|s| s.id == subject.id) {
                *slot = subject.clone();
            }
        }
        Command::DeleteSubject(id) => {
            state.data.subjects.retain(|s| s.id != *id);
            let before = state.data.assignments.len();
            state.data.assignments.retain(|a| a.subject_id != *id);
            debug!(
                subject = %id,
                cascaded = before - state.data.assignments.len(),
                "deleted subject"
            );
            prune_ui(&mut state, id.as_str());
        }

        // Classrooms.
        Command::SetClassrooms(classrooms) => {
            state.data.classrooms = classrooms.clone();
        }
        Command::AddClassroom(classroom) => {
            state.data.classrooms.push(classroom.clone());
        }
        Command::UpdateClassroom(classroom) => {
            if let Some(slot) = state
                .data
                .classrooms
                .iter_mut()
                .find(|c| c.id == classroom.id)
            {
                *slot = classroom.clone();
            }
        }
        Command::DeleteClassroom(id) => {
            state.data.classrooms.retain(|c| c.id != *id);
            let before = state.data.assignments.len();
            state.data.assignments.retain(|a| a.classroom_id != *id);
            debug!(
                classroom = %id,
                cascaded = before - state.data.assignments.len(),
                "deleted classroom"
            );
            prune_ui(&mut state, id.as_str());
        }

        // Assignments.
        Command::SetAssignments(assignments) => {
            state.data.assignments = assignments.clone();
        }
        Command::AddAssignment(assignment) => {
            state.data.assignments.push(assignment.clone());
        }
        Command::UpdateAssignment(assignment) => {
            if let Some(slot) = state
                .data
                .assignments
                .iter_mut()
                .find(|a| a.id == assignment.id)
            {
                *slot = assignment.clone();
            }
        }
        Command::DeleteAssignment(id) => {
            state.data.assignments.retain(|a| a.id != *id);
            state.ui.selected.remove(id);
            prune_ui(&mut state, id.as_str());
        }
        Command::BulkDeleteAssignments(ids) => {
            state.data.assignments.retain(|a| !ids.contains(&a.id));
            for id in ids {
                state.ui.selected.remove(id);
                prune_ui(&mut state, id.as_str());
            }
            debug!(count = ids.len(), "bulk deleted assignments");
        }

        // Loading and error flags.
        Command::SetLoading { kind, loading } => {
            state.loading.insert(*kind, *loading);
        }
        Command::SetError { kind, message } => match message {
            Some(message) => {
                state.errors.insert(*kind, message.clone());
            }
            None => {
                state.errors.remove(kind);
            }
        },
        Command::ClearErrors => {
            state.errors.clear();
        }

        // Filters.
        Command::SetSearchTerm(term) => {
            state.filters.search = term.clone();
        }
        Command::SetLevelFilter(level) => {
            state.filters.level = *level;
        }
        Command::SetSemesterFilter(semester) => {
            state.filters.semester = *semester;
        }
        Command::SetStatusFilter(status) => {
            state.filters.status = *status;
        }
        Command::SetTeacherFilter(teacher) => {
            state.filters.teacher = teacher.clone();
        }
        Command::SetSubjectFilter(subject) => {
            state.filters.subject = subject.clone();
        }
        Command::SetClassroomFilter(classroom) => {
            state.filters.classroom = classroom.clone();
        }
        Command::ClearFilters => {
            state.filters = Default::default();
        }

        // UI state.
        Command::ToggleSelection(id) => {
            if !state.ui.selected.remove(id) {
                state.ui.selected.insert(id.clone());
            }
        }
        Command::SetSelection(ids) => {
            state.ui.selected = ids.iter().cloned().collect();
        }
        Command::ClearSelection => {
            state.ui.selected.clear();
        }
        Command::SetExpanded(id) => {
            state.ui.expanded = id.clone();
        }
        Command::SetViewMode(mode) => {
            state.ui.view_mode = *mode;
        }
        Command::ToggleSidebar => {
            state.ui.sidebar_open = !state.ui.sidebar_open;
        }
        Command::SetOpenMenu(id) => {
            state.ui.open_menu = id.clone();
        }

        // Settings.
        Command::UpdateSettings(patch) => {
            state.settings.apply_patch(patch);
        }
    }
    state
}

/// Drop UI pointers that referenced a now-deleted entity, and any selected
/// assignment ids that no longer resolve (cascade deletes included).
fn prune_ui(state: &mut PlanState, deleted_id: &str) {
    if state.ui.expanded.as_deref() == Some(deleted_id) {
        state.ui.expanded = None;
    }
    if state.ui.open_menu.as_deref() == Some(deleted_id) {
        state.ui.open_menu = None;
    }
    let assignments = &state.data.assignments;
    state
        .ui
        .selected
        .retain(|id| assignments.iter().any(|a| a.id == *id));
}
