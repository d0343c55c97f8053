//! Load and coverage aggregations.

use planner_model::{ClassroomId, PlanState, Semester, SubjectId, TeacherId};

use crate::lookups::{assignments_by_classroom, assignments_by_subject, assignments_by_teacher};

/// Round to two decimal places, the precision reports and dashboards use.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Total weekly hours across a teacher's non-cancelled assignments.
pub fn teacher_workload(state: &PlanState, id: &TeacherId) -> u32 {
    assignments_by_teacher(state, id)
        .iter()
        .map(|a| a.hours_per_week)
        .sum()
}

/// Weekly hours a teacher carries in one semester of one academic year.
/// Full-year assignments count toward both semesters.
pub fn teacher_workload_for_term(
    state: &PlanState,
    id: &TeacherId,
    semester: Semester,
    year: &str,
) -> u32 {
    state
        .data
        .assignments
        .iter()
        .filter(|a| a.loads_teacher(id, semester, year))
        .map(|a| a.hours_per_week)
        .sum()
}

/// Total weekly hours assigned to a subject across all classrooms.
pub fn subject_assigned_hours(state: &PlanState, id: &SubjectId) -> u32 {
    assignments_by_subject(state, id)
        .iter()
        .map(|a| a.hours_per_week)
        .sum()
}

/// Assigned hours over total demand for a subject, as a percentage.
///
/// Demand is `required_hours` for each classroom at the subject's level.
/// Returns 0 when there is no demand (no classrooms at that level).
pub fn subject_coverage_percent(state: &PlanState, id: &SubjectId) -> f64 {
    let Some(subject) = state.data.subject(id) else {
        return 0.0;
    };
    let classrooms_at_level = state
        .data
        .classrooms
        .iter()
        .filter(|c| c.level == subject.level)
        .count() as u32;
    let demand = subject.required_hours * classrooms_at_level;
    if demand == 0 {
        return 0.0;
    }
    round2(f64::from(subject_assigned_hours(state, id)) / f64::from(demand) * 100.0)
}

/// Distinct assigned subjects over total subjects at the classroom's
/// level, as a percentage.
pub fn classroom_coverage_percent(state: &PlanState, id: &ClassroomId) -> f64 {
    let Some(classroom) = state.data.classroom(id) else {
        return 0.0;
    };
    let total = state
        .data
        .subjects
        .iter()
        .filter(|s| s.level == classroom.level)
        .count();
    if total == 0 {
        return 0.0;
    }
    let assignments = assignments_by_classroom(state, id);
    let assigned = state
        .data
        .subjects
        .iter()
        .filter(|s| s.level == classroom.level)
        .filter(|s| assignments.iter().any(|a| a.subject_id == s.id))
        .count();
    round2(assigned as f64 / total as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round2(33.333333), 33.33);
        assert_eq!(round2(66.666666), 66.67);
        assert_eq!(round2(100.0), 100.0);
    }
}
