//! Integration tests for the plan-file commands.

use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use planner_cli::commands::{SummaryOutput, run_check, run_stats, run_summary};
use planner_model::{
    Assignment, AssignmentId, AssignmentStatus, Classroom, ClassroomId, Level, PlanState,
    Semester, Subject, SubjectId, Teacher, TeacherId,
};

fn stamp() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap()
}

fn plan() -> PlanState {
    let mut state = PlanState::default();
    state.data.teachers = vec![Teacher {
        id: TeacherId::new("t1").unwrap(),
        name: "Alice Carter".to_string(),
        specialization: "Mathematics".to_string(),
        max_load: 20,
        is_active: true,
        email: None,
        phone: None,
        created_at: stamp(),
        updated_at: stamp(),
    }];
    state.data.subjects = vec![Subject {
        id: SubjectId::new("s1").unwrap(),
        name: "Mathematics".to_string(),
        code: "MATH-P".to_string(),
        required_hours: 4,
        level: Level::Primary,
        is_active: true,
        created_at: stamp(),
        updated_at: stamp(),
    }];
    state.data.classrooms = vec![Classroom {
        id: ClassroomId::new("c1").unwrap(),
        name: "3-A".to_string(),
        grade: 3,
        section: "A".to_string(),
        capacity: 30,
        current_students: 25,
        level: Level::Primary,
        created_at: stamp(),
        updated_at: stamp(),
    }];
    state.data.assignments = vec![Assignment {
        id: AssignmentId::new("a1").unwrap(),
        teacher_id: TeacherId::new("t1").unwrap(),
        subject_id: SubjectId::new("s1").unwrap(),
        classroom_id: ClassroomId::new("c1").unwrap(),
        hours_per_week: 4,
        semester: Semester::First,
        academic_year: "2024-2025".to_string(),
        status: AssignmentStatus::Active,
        assigned_at: stamp(),
        assigned_by: "admin".to_string(),
    }];
    state
}

fn write_plan(name: &str, state: &PlanState) -> PathBuf {
    let path = std::env::temp_dir().join(format!("{name}-{}.json", std::process::id()));
    std::fs::write(&path, serde_json::to_string_pretty(state).unwrap()).unwrap();
    path
}

#[test]
fn check_accepts_a_consistent_plan() {
    let path = write_plan("planner-check-clean", &plan());
    let result = run_check(&path).unwrap();
    assert!(!result.has_errors);
    assert!(result.findings.is_empty());
    // One teacher at 4/20 with a minimum load of 10 is underloaded.
    assert!(result.completeness.warning_count() > 0);
    std::fs::remove_file(path).ok();
}

#[test]
fn check_flags_an_overloaded_teacher() {
    let mut state = plan();
    state.data.teachers[0].max_load = 3;
    let path = write_plan("planner-check-overload", &state);
    let result = run_check(&path).unwrap();
    assert!(result.has_errors);
    let finding = result
        .findings
        .iter()
        .find(|f| f.id == "a1")
        .expect("assignment finding");
    assert!(
        finding.report.errors.iter().any(|e| e.contains("4/3")),
        "errors: {:?}",
        finding.report.errors
    );
    std::fs::remove_file(path).ok();
}

#[test]
fn stats_and_summaries_read_the_same_plan() {
    let path = write_plan("planner-stats", &plan());

    let stats = run_stats(&path).unwrap();
    assert_eq!(stats.totals.teachers, 1);
    assert_eq!(stats.teacher_load[0].current_load, 4);
    assert_eq!(stats.teacher_load[0].percentage, 20.0);

    match run_summary(&path, None).unwrap() {
        SummaryOutput::Plan(summary) => {
            assert_eq!(summary.totals.assignments, 1);
            assert_eq!(summary.academic_year, "2024-2025");
        }
        SummaryOutput::Teacher(_) => panic!("expected plan summary"),
    }

    match run_summary(&path, Some("t1")).unwrap() {
        SummaryOutput::Teacher(summary) => {
            assert_eq!(summary.total_hours, 4);
            assert_eq!(summary.lines.len(), 1);
            assert_eq!(summary.lines[0].subject, "Mathematics");
        }
        SummaryOutput::Plan(_) => panic!("expected teacher summary"),
    }

    assert!(run_summary(&path, Some("missing")).is_err());
    std::fs::remove_file(path).ok();
}

#[test]
fn unreadable_plan_files_are_reported() {
    let path = std::env::temp_dir().join(format!("planner-bad-{}.json", std::process::id()));
    std::fs::write(&path, "{not json").unwrap();
    let error = run_check(&path).unwrap_err();
    assert!(format!("{error:#}").contains("parse plan file"));
    std::fs::remove_file(path).ok();
}
