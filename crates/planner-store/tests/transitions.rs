//! Transition function tests: CRUD, cascades, flags, filters, UI state.

use chrono::{TimeZone, Utc};
use planner_model::{
    Assignment, AssignmentId, AssignmentStatus, Classroom, ClassroomId, Command, EntityKind,
    Level, PlanState, Semester, SettingsPatch, Subject, SubjectId, Teacher, TeacherId, ViewMode,
};
use planner_store::apply;

fn stamp() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap()
}

fn teacher(id: &str) -> Teacher {
    Teacher {
        id: TeacherId::new(id).unwrap(),
        name: format!("Teacher {id}"),
        specialization: "Mathematics".to_string(),
        max_load: 20,
        is_active: true,
        email: None,
        phone: None,
        created_at: stamp(),
        updated_at: stamp(),
    }
}

fn subject(id: &str) -> Subject {
    Subject {
        id: SubjectId::new(id).unwrap(),
        name: format!("Subject {id}"),
        code: id.to_uppercase(),
        required_hours: 4,
        level: Level::Primary,
        is_active: true,
        created_at: stamp(),
        updated_at: stamp(),
    }
}

fn classroom(id: &str) -> Classroom {
    Classroom {
        id: ClassroomId::new(id).unwrap(),
        name: format!("Room {id}"),
        grade: 3,
        section: id.to_uppercase(),
        capacity: 30,
        current_students: 25,
        level: Level::Primary,
        created_at: stamp(),
        updated_at: stamp(),
    }
}

fn assignment(id: &str, teacher: &str, subject: &str, classroom: &str) -> Assignment {
    Assignment {
        id: AssignmentId::new(id).unwrap(),
        teacher_id: TeacherId::new(teacher).unwrap(),
        subject_id: SubjectId::new(subject).unwrap(),
        classroom_id: ClassroomId::new(classroom).unwrap(),
        hours_per_week: 4,
        semester: Semester::First,
        academic_year: "2024-2025".to_string(),
        status: AssignmentStatus::Active,
        assigned_at: stamp(),
        assigned_by: "admin".to_string(),
    }
}

/// Two teachers, two subjects, two classrooms, three assignments.
fn populated() -> PlanState {
    let mut state = PlanState::default();
    state = apply(state, &Command::SetTeachers(vec![teacher("t1"), teacher("t2")]));
    state = apply(state, &Command::SetSubjects(vec![subject("s1"), subject("s2")]));
    state = apply(
        state,
        &Command::SetClassrooms(vec![classroom("c1"), classroom("c2")]),
    );
    state = apply(
        state,
        &Command::SetAssignments(vec![
            assignment("a1", "t1", "s1", "c1"),
            assignment("a2", "t1", "s2", "c2"),
            assignment("a3", "t2", "s1", "c2"),
        ]),
    );
    state
}

#[test]
fn add_and_update_entities() {
    let mut state = apply(PlanState::default(), &Command::AddTeacher(teacher("t1")));
    assert_eq!(state.data.teachers.len(), 1);

    let mut renamed = teacher("t1");
    renamed.name = "Renamed".to_string();
    state = apply(state, &Command::UpdateTeacher(renamed));
    assert_eq!(state.data.teachers[0].name, "Renamed");
}

#[test]
fn update_of_unknown_id_is_a_no_op() {
    let state = populated();
    let next = apply(state.clone(), &Command::UpdateTeacher(teacher("ghost")));
    assert_eq!(next, state);

    let next = apply(
        state.clone(),
        &Command::DeleteAssignment(AssignmentId::new("ghost").unwrap()),
    );
    assert_eq!(next, state);
}

#[test]
fn deleting_a_teacher_cascades_to_exactly_its_assignments() {
    let state = populated();
    let next = apply(
        state,
        &Command::DeleteTeacher(TeacherId::new("t1").unwrap()),
    );
    assert_eq!(next.data.teachers.len(), 1);
    let remaining: Vec<&str> = next
        .data
        .assignments
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(remaining, vec!["a3"]);
}

#[test]
fn deleting_a_subject_cascades() {
    let next = apply(
        populated(),
        &Command::DeleteSubject(SubjectId::new("s1").unwrap()),
    );
    let remaining: Vec<&str> = next
        .data
        .assignments
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(remaining, vec!["a2"]);
}

#[test]
fn deleting_a_classroom_cascades() {
    let next = apply(
        populated(),
        &Command::DeleteClassroom(ClassroomId::new("c2").unwrap()),
    );
    let remaining: Vec<&str> = next
        .data
        .assignments
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(remaining, vec!["a1"]);
}

#[test]
fn cascade_prunes_stale_selection() {
    let mut state = populated();
    state = apply(
        state,
        &Command::SetSelection(vec![
            AssignmentId::new("a1").unwrap(),
            AssignmentId::new("a3").unwrap(),
        ]),
    );
    state = apply(state, &Command::SetExpanded(Some("t1".to_string())));

    let next = apply(
        state,
        &Command::DeleteTeacher(TeacherId::new("t1").unwrap()),
    );
    let selected: Vec<&str> = next.ui.selected.iter().map(|id| id.as_str()).collect();
    assert_eq!(selected, vec!["a3"]);
    assert_eq!(next.ui.expanded, None);
}

#[test]
fn bulk_delete_removes_listed_assignments() {
    let next = apply(
        populated(),
        &Command::BulkDeleteAssignments(vec![
            AssignmentId::new("a1").unwrap(),
            AssignmentId::new("a2").unwrap(),
        ]),
    );
    assert_eq!(next.data.assignments.len(), 1);
    assert_eq!(next.data.assignments[0].id.as_str(), "a3");
}

#[test]
fn loading_and_error_flags() {
    let mut state = apply(
        PlanState::default(),
        &Command::SetLoading {
            kind: EntityKind::Teachers,
            loading: true,
        },
    );
    assert_eq!(state.loading.get(&EntityKind::Teachers), Some(&true));

    state = apply(
        state,
        &Command::SetError {
            kind: EntityKind::Teachers,
            message: Some("fetch failed".to_string()),
        },
    );
    assert_eq!(
        state.errors.get(&EntityKind::Teachers).map(String::as_str),
        Some("fetch failed")
    );

    // Errors are cleared explicitly, not automatically.
    state = apply(
        state,
        &Command::SetError {
            kind: EntityKind::Subjects,
            message: Some("also failed".to_string()),
        },
    );
    state = apply(state, &Command::ClearErrors);
    assert!(state.errors.is_empty());
}

#[test]
fn filters_set_and_clear() {
    let mut state = apply(
        PlanState::default(),
        &Command::SetSearchTerm("math".to_string()),
    );
    state = apply(state, &Command::SetLevelFilter(Some(Level::Primary)));
    state = apply(state, &Command::SetSemesterFilter(Some(Semester::First)));
    assert_eq!(state.filters.active_count(), 3);

    state = apply(state, &Command::ClearFilters);
    assert!(state.filters.is_default());
}

#[test]
fn selection_toggles_and_ui_chrome() {
    let id = AssignmentId::new("a1").unwrap();
    let mut state = apply(populated(), &Command::ToggleSelection(id.clone()));
    assert!(state.ui.selected.contains(&id));
    state = apply(state, &Command::ToggleSelection(id.clone()));
    assert!(!state.ui.selected.contains(&id));

    state = apply(state, &Command::SetViewMode(ViewMode::Cards));
    state = apply(state, &Command::ToggleSidebar);
    state = apply(state, &Command::SetOpenMenu(Some("a2".to_string())));
    assert_eq!(state.ui.view_mode, ViewMode::Cards);
    assert!(state.ui.sidebar_open);
    assert_eq!(state.ui.open_menu.as_deref(), Some("a2"));
}

#[test]
fn settings_patch_applies() {
    let state = apply(
        PlanState::default(),
        &Command::UpdateSettings(SettingsPatch {
            academic_year: Some("2025-2026".to_string()),
            min_teacher_load: Some(12),
            ..Default::default()
        }),
    );
    assert_eq!(state.settings.academic_year, "2025-2026");
    assert_eq!(state.settings.min_teacher_load, 12);
    assert!(state.settings.autosave);
}

#[test]
fn apply_is_deterministic() {
    let state = populated();
    let command = Command::DeleteTeacher(TeacherId::new("t1").unwrap());
    assert_eq!(apply(state.clone(), &command), apply(state, &command));
}
