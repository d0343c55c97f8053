//! Tests for planner-model types.

use chrono::{TimeZone, Utc};
use planner_model::{
    ActionDescriptor, ActionKind, Assignment, AssignmentId, AssignmentStatus, Classroom,
    ClassroomId, History, HistoryEntry, Level, PlanState, Semester, Subject, SubjectId, Teacher,
    TeacherId,
};

fn teacher(id: &str, name: &str) -> Teacher {
    let now = Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap();
    Teacher {
        id: TeacherId::new(id).unwrap(),
        name: name.to_string(),
        specialization: "Mathematics".to_string(),
        max_load: 20,
        is_active: true,
        email: Some("teacher@school.example".to_string()),
        phone: None,
        created_at: now,
        updated_at: now,
    }
}

fn subject(id: &str, code: &str, level: Level) -> Subject {
    let now = Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap();
    Subject {
        id: SubjectId::new(id).unwrap(),
        name: format!("Subject {code}"),
        code: code.to_string(),
        required_hours: 4,
        level,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

fn classroom(id: &str, grade: u32, section: &str, level: Level) -> Classroom {
    let now = Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap();
    Classroom {
        id: ClassroomId::new(id).unwrap(),
        name: format!("{grade}-{section}"),
        grade,
        section: section.to_string(),
        capacity: 30,
        current_students: 25,
        level,
        created_at: now,
        updated_at: now,
    }
}

fn assignment(id: &str) -> Assignment {
    Assignment {
        id: AssignmentId::new(id).unwrap(),
        teacher_id: TeacherId::new("t1").unwrap(),
        subject_id: SubjectId::new("s1").unwrap(),
        classroom_id: ClassroomId::new("c1").unwrap(),
        hours_per_week: 4,
        semester: Semester::First,
        academic_year: "2024-2025".to_string(),
        status: AssignmentStatus::Active,
        assigned_at: Utc.with_ymd_and_hms(2024, 9, 2, 9, 0, 0).unwrap(),
        assigned_by: "admin".to_string(),
    }
}

#[test]
fn whole_state_round_trips_through_json() {
    let mut state = PlanState::default();
    state.data.teachers.push(teacher("t1", "Alice Carter"));
    state.data.subjects.push(subject("s1", "MATH-P", Level::Primary));
    state
        .data
        .classrooms
        .push(classroom("c1", 3, "A", Level::Primary));
    state.data.assignments.push(assignment("a1"));
    state.filters.level = Some(Level::Primary);

    let json = serde_json::to_string(&state).expect("serialize state");
    let round: PlanState = serde_json::from_str(&json).expect("deserialize state");
    assert_eq!(round, state);
}

#[test]
fn stored_snapshots_carry_no_history() {
    let mut state = PlanState::default();
    state.data.teachers.push(teacher("t1", "Alice Carter"));

    let snapshot = state.to_snapshot();
    let json = serde_json::to_value(&snapshot).expect("serialize snapshot");
    assert!(json.get("history").is_none());

    // A history entry embedding that snapshot still has no nested history.
    let entry = HistoryEntry {
        snapshot,
        action: ActionDescriptor::new(
            ActionKind::Create,
            "add teacher Alice Carter",
            Utc.with_ymd_and_hms(2024, 9, 2, 9, 0, 0).unwrap(),
        )
        .with_entity_id("t1"),
    };
    let json = serde_json::to_value(&entry).expect("serialize entry");
    assert!(json["snapshot"].get("history").is_none());
    assert_eq!(json["action"]["entityId"], "t1");
}

#[test]
fn history_defaults_are_bounded() {
    let history = History::default();
    assert_eq!(history.limit, planner_model::DEFAULT_HISTORY_LIMIT);
    let custom = History::with_limit(5);
    assert_eq!(custom.limit, 5);
}
