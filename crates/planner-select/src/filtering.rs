//! Application of the current filter substate to entity lists.
//!
//! Search matches case-insensitively against names, codes, and
//! specializations; the optional filters are exact matches and combine
//! with AND.

use planner_model::{Assignment, Classroom, PlanState, Subject, Teacher};

fn matches_search(haystacks: &[&str], search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystacks
        .iter()
        .any(|h| h.to_lowercase().contains(&needle))
}

pub fn filtered_teachers(state: &PlanState) -> Vec<&Teacher> {
    let filters = &state.filters;
    state
        .data
        .teachers
        .iter()
        .filter(|t| matches_search(&[&t.name, &t.specialization], &filters.search))
        .filter(|t| filters.teacher.as_ref().is_none_or(|id| t.id == *id))
        .collect()
}

pub fn filtered_subjects(state: &PlanState) -> Vec<&Subject> {
    let filters = &state.filters;
    state
        .data
        .subjects
        .iter()
        .filter(|s| matches_search(&[&s.name, &s.code], &filters.search))
        .filter(|s| filters.level.is_none_or(|level| s.level == level))
        .filter(|s| filters.subject.as_ref().is_none_or(|id| s.id == *id))
        .collect()
}

pub fn filtered_classrooms(state: &PlanState) -> Vec<&Classroom> {
    let filters = &state.filters;
    state
        .data
        .classrooms
        .iter()
        .filter(|c| matches_search(&[&c.name, &c.section], &filters.search))
        .filter(|c| filters.level.is_none_or(|level| c.level == level))
        .filter(|c| filters.classroom.as_ref().is_none_or(|id| c.id == *id))
        .collect()
}

/// Assignments matching every active filter. The search term matches the
/// resolved teacher, subject, and classroom names.
pub fn filtered_assignments(state: &PlanState) -> Vec<&Assignment> {
    let filters = &state.filters;
    state
        .data
        .assignments
        .iter()
        .filter(|a| filters.semester.is_none_or(|s| a.semester == s))
        .filter(|a| filters.status.is_none_or(|s| a.status == s))
        .filter(|a| filters.teacher.as_ref().is_none_or(|id| a.teacher_id == *id))
        .filter(|a| filters.subject.as_ref().is_none_or(|id| a.subject_id == *id))
        .filter(|a| {
            filters
                .classroom
                .as_ref()
                .is_none_or(|id| a.classroom_id == *id)
        })
        .filter(|a| {
            filters.level.is_none_or(|level| {
                state
                    .data
                    .subject(&a.subject_id)
                    .is_some_and(|s| s.level == level)
            })
        })
        .filter(|a| {
            let teacher = state
                .data
                .teacher(&a.teacher_id)
                .map(|t| t.name.as_str())
                .unwrap_or_default();
            let subject = state
                .data
                .subject(&a.subject_id)
                .map(|s| s.name.as_str())
                .unwrap_or_default();
            let classroom = state
                .data
                .classroom(&a.classroom_id)
                .map(|c| c.name.as_str())
                .unwrap_or_default();
            matches_search(&[teacher, subject, classroom], &filters.search)
        })
        .collect()
}

/// Number of filters currently narrowing any list.
pub fn active_filter_count(state: &PlanState) -> usize {
    state.filters.active_count()
}
