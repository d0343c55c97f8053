//! Direct lookups and relationship traversals.
//!
//! Every function is `(state, ...args) -> value`, reads only, and is safe
//! to call at any time. Traversals follow assignments; cancelled
//! assignments are excluded throughout so lists agree with workload math.

use planner_model::{
    Assignment, AssignmentId, Classroom, ClassroomId, PlanState, Subject, SubjectId, Teacher,
    TeacherId,
};

pub fn teacher_by_id<'a>(state: &'a PlanState, id: &TeacherId) -> Option<&'a Teacher> {
    state.data.teacher(id)
}

pub fn subject_by_id<'a>(state: &'a PlanState, id: &SubjectId) -> Option<&'a Subject> {
    state.data.subject(id)
}

pub fn classroom_by_id<'a>(state: &'a PlanState, id: &ClassroomId) -> Option<&'a Classroom> {
    state.data.classroom(id)
}

pub fn assignment_by_id<'a>(state: &'a PlanState, id: &AssignmentId) -> Option<&'a Assignment> {
    state.data.assignment(id)
}

pub fn active_teachers(state: &PlanState) -> Vec<&Teacher> {
    state.data.teachers.iter().filter(|t| t.is_active).collect()
}

pub fn active_subjects(state: &PlanState) -> Vec<&Subject> {
    state.data.subjects.iter().filter(|s| s.is_active).collect()
}

/// Non-cancelled assignments for one teacher, in listing order.
pub fn assignments_by_teacher<'a>(state: &'a PlanState, id: &TeacherId) -> Vec<&'a Assignment> {
    state
        .data
        .assignments
        .iter()
        .filter(|a| a.status.counts() && a.teacher_id == *id)
        .collect()
}

/// Non-cancelled assignments for one subject.
pub fn assignments_by_subject<'a>(state: &'a PlanState, id: &SubjectId) -> Vec<&'a Assignment> {
    state
        .data
        .assignments
        .iter()
        .filter(|a| a.status.counts() && a.subject_id == *id)
        .collect()
}

/// Non-cancelled assignments for one classroom.
pub fn assignments_by_classroom<'a>(
    state: &'a PlanState,
    id: &ClassroomId,
) -> Vec<&'a Assignment> {
    state
        .data
        .assignments
        .iter()
        .filter(|a| a.status.counts() && a.classroom_id == *id)
        .collect()
}

/// Distinct subjects a teacher is assigned to, in listing order.
pub fn subjects_of_teacher<'a>(state: &'a PlanState, id: &TeacherId) -> Vec<&'a Subject> {
    state
        .data
        .subjects
        .iter()
        .filter(|s| {
            state
                .data
                .assignments
                .iter()
                .any(|a| a.status.counts() && a.teacher_id == *id && a.subject_id == s.id)
        })
        .collect()
}

/// Distinct classrooms a teacher teaches in, in listing order.
pub fn classrooms_of_teacher<'a>(state: &'a PlanState, id: &TeacherId) -> Vec<&'a Classroom> {
    state
        .data
        .classrooms
        .iter()
        .filter(|c| {
            state
                .data
                .assignments
                .iter()
                .any(|a| a.status.counts() && a.teacher_id == *id && a.classroom_id == c.id)
        })
        .collect()
}
