//! Whole-plan health check.
//!
//! Used by dashboards only: everything here is a warning, nothing blocks.

use planner_model::PlanState;

use crate::report::ValidationReport;

pub fn validate_system_completeness(state: &PlanState) -> ValidationReport {
    let mut report = ValidationReport::new();
    let data = &state.data;

    for subject in data.subjects.iter().filter(|s| s.is_active) {
        let assigned = data
            .assignments
            .iter()
            .any(|a| a.status.counts() && a.subject_id == subject.id);
        if !assigned {
            report.warning(format!(
                "Subject {} ({}) has no assignments",
                subject.name, subject.code
            ));
        }
    }

    for teacher in data.teachers.iter().filter(|t| t.is_active) {
        let load: u32 = data
            .assignments
            .iter()
            .filter(|a| a.status.counts() && a.teacher_id == teacher.id)
            .map(|a| a.hours_per_week)
            .sum();
        if load < state.settings.min_teacher_load {
            report.warning(format!(
                "Teacher {} is underloaded: {load}/{} weekly hours",
                teacher.name, state.settings.min_teacher_load
            ));
        } else if load > teacher.max_load {
            report.warning(format!(
                "Teacher {} is overloaded: {load}/{} weekly hours",
                teacher.name, teacher.max_load
            ));
        }
    }

    for classroom in &data.classrooms {
        let assigned = data
            .assignments
            .iter()
            .any(|a| a.status.counts() && a.classroom_id == classroom.id);
        if !assigned {
            report.warning(format!(
                "Classroom {} has no subjects assigned",
                classroom.name
            ));
        }
    }

    report
}
