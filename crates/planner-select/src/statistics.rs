//! Whole-system statistics, export summaries, and health predicates.

use serde::Serialize;

use planner_model::{Classroom, PlanState, Subject, Teacher};

use crate::lookups::assignments_by_teacher;
use crate::workload::{
    classroom_coverage_percent, round2, subject_assigned_hours, subject_coverage_percent,
    teacher_workload,
};

/// Per-teacher load line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherLoadStat {
    pub teacher_id: String,
    pub name: String,
    pub current_load: u32,
    pub max_load: u32,
    /// `round(current_load / max_load * 100, 2)`.
    pub percentage: f64,
}

/// Per-subject coverage line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectCoverageStat {
    pub subject_id: String,
    pub name: String,
    pub code: String,
    pub assigned_hours: u32,
    pub percentage: f64,
}

/// Per-classroom coverage line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassroomCoverageStat {
    pub classroom_id: String,
    pub name: String,
    pub percentage: f64,
}

/// Entity counts for dashboard headers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub teachers: usize,
    pub subjects: usize,
    pub classrooms: usize,
    pub assignments: usize,
    pub active_assignments: usize,
}

/// Aggregate statistics consumed by dashboards and exporters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub teacher_load: Vec<TeacherLoadStat>,
    pub subject_coverage: Vec<SubjectCoverageStat>,
    pub classroom_coverage: Vec<ClassroomCoverageStat>,
    pub totals: Totals,
}

pub fn statistics(state: &PlanState) -> Statistics {
    let teacher_load = state
        .data
        .teachers
        .iter()
        .map(|t| {
            let current_load = teacher_workload(state, &t.id);
            TeacherLoadStat {
                teacher_id: t.id.as_str().to_string(),
                name: t.name.clone(),
                current_load,
                max_load: t.max_load,
                percentage: round2(f64::from(current_load) / f64::from(t.max_load) * 100.0),
            }
        })
        .collect();

    let subject_coverage = state
        .data
        .subjects
        .iter()
        .map(|s| SubjectCoverageStat {
            subject_id: s.id.as_str().to_string(),
            name: s.name.clone(),
            code: s.code.clone(),
            assigned_hours: subject_assigned_hours(state, &s.id),
            percentage: subject_coverage_percent(state, &s.id),
        })
        .collect();

    let classroom_coverage = state
        .data
        .classrooms
        .iter()
        .map(|c| ClassroomCoverageStat {
            classroom_id: c.id.as_str().to_string(),
            name: c.name.clone(),
            percentage: classroom_coverage_percent(state, &c.id),
        })
        .collect();

    Statistics {
        teacher_load,
        subject_coverage,
        classroom_coverage,
        totals: Totals {
            teachers: state.data.teachers.len(),
            subjects: state.data.subjects.len(),
            classrooms: state.data.classrooms.len(),
            assignments: state.data.assignments.len(),
            active_assignments: state
                .data
                .assignments
                .iter()
                .filter(|a| a.status.counts())
                .count(),
        },
    }
}

/// Active teachers carrying less than the configured minimum load.
pub fn underloaded_teachers(state: &PlanState) -> Vec<&Teacher> {
    state
        .data
        .teachers
        .iter()
        .filter(|t| t.is_active)
        .filter(|t| teacher_workload(state, &t.id) < state.settings.min_teacher_load)
        .collect()
}

/// Teachers whose assignments exceed their own ceiling. A healthy plan
/// never has any; validation should have blocked the overload.
pub fn overloaded_teachers(state: &PlanState) -> Vec<&Teacher> {
    state
        .data
        .teachers
        .iter()
        .filter(|t| teacher_workload(state, &t.id) > t.max_load)
        .collect()
}

/// Active subjects with no non-cancelled assignment.
pub fn unassigned_subjects(state: &PlanState) -> Vec<&Subject> {
    state
        .data
        .subjects
        .iter()
        .filter(|s| s.is_active)
        .filter(|s| {
            !state
                .data
                .assignments
                .iter()
                .any(|a| a.status.counts() && a.subject_id == s.id)
        })
        .collect()
}

/// Classrooms missing at least one subject of their level.
pub fn incomplete_classrooms(state: &PlanState) -> Vec<&Classroom> {
    state
        .data
        .classrooms
        .iter()
        .filter(|c| classroom_coverage_percent(state, &c.id) < 100.0)
        .collect()
}

/// One line of a teacher's assignment summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentLine {
    pub subject: String,
    pub classroom: String,
    pub hours_per_week: u32,
    pub semester: String,
}

/// Per-teacher summary consumed by report and messaging collaborators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherAssignmentSummary {
    pub teacher_id: String,
    pub teacher_name: String,
    pub total_hours: u32,
    pub max_load: u32,
    pub lines: Vec<AssignmentLine>,
}

pub fn teacher_assignment_summary(
    state: &PlanState,
    teacher: &Teacher,
) -> TeacherAssignmentSummary {
    let lines = assignments_by_teacher(state, &teacher.id)
        .iter()
        .map(|a| AssignmentLine {
            subject: state
                .data
                .subject(&a.subject_id)
                .map(|s| s.name.clone())
                .unwrap_or_default(),
            classroom: state
                .data
                .classroom(&a.classroom_id)
                .map(|c| c.name.clone())
                .unwrap_or_default(),
            hours_per_week: a.hours_per_week,
            semester: a.semester.to_string(),
        })
        .collect();
    TeacherAssignmentSummary {
        teacher_id: teacher.id.as_str().to_string(),
        teacher_name: teacher.name.clone(),
        total_hours: teacher_workload(state, &teacher.id),
        max_load: teacher.max_load,
        lines,
    }
}

/// Whole-plan summary consumed by exporters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub academic_year: String,
    pub totals: Totals,
    pub unassigned_subjects: usize,
    pub underloaded_teachers: usize,
    pub incomplete_classrooms: usize,
}

pub fn plan_summary(state: &PlanState) -> PlanSummary {
    let stats = statistics(state);
    PlanSummary {
        academic_year: state.settings.academic_year.clone(),
        totals: stats.totals,
        unassigned_subjects: unassigned_subjects(state).len(),
        underloaded_teachers: underloaded_teachers(state).len(),
        incomplete_classrooms: incomplete_classrooms(state).len(),
    }
}

/// A detected timetable conflict.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConflict {
    pub description: String,
}

/// Time-slot conflict detection.
///
/// Always returns an empty list: the planner has no time-slot model yet,
/// so there is nothing to detect. The selector exists so consumers have a
/// stable shape to build against once scheduling lands.
pub fn conflicts(_state: &PlanState) -> Vec<ScheduleConflict> {
    Vec::new()
}
