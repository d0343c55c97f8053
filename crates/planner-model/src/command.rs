//! The closed command vocabulary.
//!
//! Commands are the only mutation surface of the planner: the transition
//! function in `planner-store` consumes them with a single exhaustive
//! match. They are serde-tagged so a front end can post them as JSON
//! actions.

use serde::{Deserialize, Serialize};

use crate::entities::{Assignment, Classroom, Subject, Teacher};
use crate::enums::{AssignmentStatus, EntityKind, Level, Semester, ViewMode};
use crate::ids::{AssignmentId, ClassroomId, SubjectId, TeacherId};
use crate::settings::SettingsPatch;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "camelCase")]
pub enum Command {
    // Teacher CRUD.
    SetTeachers(Vec<Teacher>),
    AddTeacher(Teacher),
    UpdateTeacher(Teacher),
    /// Cascades: removes every assignment referencing the teacher.
    DeleteTeacher(TeacherId),

    // Subject CRUD.
    SetSubjects(Vec<Subject>),
    AddSubject(Subject),
    UpdateSubject(Subject),
    /// Cascades: removes every assignment referencing the subject.
    DeleteSubject(SubjectId),

    // Classroom CRUD.
    SetClassrooms(Vec<Classroom>),
    AddClassroom(Classroom),
    UpdateClassroom(Classroom),
    /// Cascades: removes every assignment referencing the classroom.
    DeleteClassroom(ClassroomId),

    // Assignment CRUD.
    SetAssignments(Vec<Assignment>),
    AddAssignment(Assignment),
    UpdateAssignment(Assignment),
    DeleteAssignment(AssignmentId),
    BulkDeleteAssignments(Vec<AssignmentId>),

    // Loading and error flags.
    SetLoading { kind: EntityKind, loading: bool },
    SetError { kind: EntityKind, message: Option<String> },
    ClearErrors,

    // Filters.
    SetSearchTerm(String),
    SetLevelFilter(Option<Level>),
    SetSemesterFilter(Option<Semester>),
    SetStatusFilter(Option<AssignmentStatus>),
    SetTeacherFilter(Option<TeacherId>),
    SetSubjectFilter(Option<SubjectId>),
    SetClassroomFilter(Option<ClassroomId>),
    ClearFilters,

    // UI state.
    ToggleSelection(AssignmentId),
    SetSelection(Vec<AssignmentId>),
    ClearSelection,
    SetExpanded(Option<String>),
    SetViewMode(ViewMode),
    ToggleSidebar,
    SetOpenMenu(Option<String>),

    // Settings.
    UpdateSettings(SettingsPatch),
}

impl Command {
    /// Short human-readable verb for logging and history labels.
    pub fn describe(&self) -> &'static str {
        match self {
            Command::SetTeachers(_) => "set teachers",
            Command::AddTeacher(_) => "add teacher",
            Command::UpdateTeacher(_) => "update teacher",
            Command::DeleteTeacher(_) => "delete teacher",
            Command::SetSubjects(_) => "set subjects",
            Command::AddSubject(_) => "add subject",
            Command::UpdateSubject(_) => "update subject",
            Command::DeleteSubject(_) => "delete subject",
            Command::SetClassrooms(_) => "set classrooms",
            Command::AddClassroom(_) => "add classroom",
            Command::UpdateClassroom(_) => "update classroom",
            Command::DeleteClassroom(_) => "delete classroom",
            Command::SetAssignments(_) => "set assignments",
            Command::AddAssignment(_) => "add assignment",
            Command::UpdateAssignment(_) => "update assignment",
            Command::DeleteAssignment(_) => "delete assignment",
            Command::BulkDeleteAssignments(_) => "bulk delete assignments",
            Command::SetLoading { .. } => "set loading flag",
            Command::SetError { .. } => "set error",
            Command::ClearErrors => "clear errors",
            Command::SetSearchTerm(_) => "set search term",
            Command::SetLevelFilter(_) => "set level filter",
            Command::SetSemesterFilter(_) => "set semester filter",
            Command::SetStatusFilter(_) => "set status filter",
            Command::SetTeacherFilter(_) => "set teacher filter",
            Command::SetSubjectFilter(_) => "set subject filter",
            Command::SetClassroomFilter(_) => "set classroom filter",
            Command::ClearFilters => "clear filters",
            Command::ToggleSelection(_) => "toggle selection",
            Command::SetSelection(_) => "set selection",
            Command::ClearSelection => "clear selection",
            Command::SetExpanded(_) => "set expanded",
            Command::SetViewMode(_) => "set view mode",
            Command::ToggleSidebar => "toggle sidebar",
            Command::SetOpenMenu(_) => "set open menu",
            Command::UpdateSettings(_) => "update settings",
        }
    }

    /// Returns true for commands that change data, settings, or history-
    /// worthy state. Loading flags, errors, filters, and UI chrome are
    /// not checkpointed.
    pub fn is_undoable(&self) -> bool {
        matches!(
            self,
            Command::SetTeachers(_)
                | Command::AddTeacher(_)
                | Command::UpdateTeacher(_)
                | Command::DeleteTeacher(_)
                | Command::SetSubjects(_)
                | Command::AddSubject(_)
                | Command::UpdateSubject(_)
                | Command::DeleteSubject(_)
                | Command::SetClassrooms(_)
                | Command::AddClassroom(_)
                | Command::UpdateClassroom(_)
                | Command::DeleteClassroom(_)
                | Command::SetAssignments(_)
                | Command::AddAssignment(_)
                | Command::UpdateAssignment(_)
                | Command::DeleteAssignment(_)
                | Command::BulkDeleteAssignments(_)
                | Command::UpdateSettings(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_round_trip_as_tagged_json() {
        let command = Command::SetSearchTerm("algebra".to_string());
        let json = serde_json::to_value(&command).expect("serialize command");
        assert_eq!(json["kind"], "setSearchTerm");
        let round: Command = serde_json::from_value(json).expect("deserialize command");
        assert_eq!(round, command);
    }

    #[test]
    fn ui_commands_are_not_undoable() {
        assert!(Command::DeleteTeacher(TeacherId::new("t1").unwrap()).is_undoable());
        assert!(!Command::ToggleSidebar.is_undoable());
        assert!(!Command::ClearFilters.is_undoable());
    }
}
