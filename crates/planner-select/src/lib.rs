#![deny(unsafe_code)]

//! Selector layer: pure derived-data queries over the planner state.
//!
//! Inputs are plain state values, so callers may layer their own
//! memoization on top; nothing here caches.

pub mod filtering;
pub mod lookups;
pub mod statistics;
pub mod workload;

pub use filtering::{
    active_filter_count, filtered_assignments, filtered_classrooms, filtered_subjects,
    filtered_teachers,
};
pub use lookups::{
    active_subjects, active_teachers, assignment_by_id, assignments_by_classroom,
    assignments_by_subject, assignments_by_teacher, classroom_by_id, classrooms_of_teacher,
    subject_by_id, subjects_of_teacher, teacher_by_id,
};
pub use statistics::{
    AssignmentLine, ClassroomCoverageStat, PlanSummary, ScheduleConflict, Statistics,
    SubjectCoverageStat, TeacherAssignmentSummary, TeacherLoadStat, Totals, conflicts,
    incomplete_classrooms, overloaded_teachers, plan_summary, statistics,
    teacher_assignment_summary, unassigned_subjects, underloaded_teachers,
};
pub use workload::{
    classroom_coverage_percent, round2, subject_assigned_hours, subject_coverage_percent,
    teacher_workload, teacher_workload_for_term,
};
