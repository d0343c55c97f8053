use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info};

use planner_model::{
    AssignmentDraft, ClassroomDraft, EntityKind, PlanState, SubjectDraft, TeacherDraft, TeacherId,
};
use planner_select::{plan_summary, statistics, teacher_assignment_summary};
use planner_select::{PlanSummary, Statistics, TeacherAssignmentSummary};
use planner_validate::{
    ValidationReport, validate_assignment, validate_classroom, validate_subject,
    validate_system_completeness, validate_teacher,
};

use crate::types::{CheckResult, EntityFinding};

/// Load a plan file produced by the persistence API.
///
/// Missing sections fall back to defaults, so a file containing only
/// entity data is accepted.
pub fn load_plan(path: &Path) -> Result<PlanState> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read plan file {}", path.display()))?;
    let state: PlanState = serde_json::from_str(&raw)
        .with_context(|| format!("parse plan file {}", path.display()))?;
    debug!(
        teachers = state.data.teachers.len(),
        subjects = state.data.subjects.len(),
        classrooms = state.data.classrooms.len(),
        assignments = state.data.assignments.len(),
        "loaded plan"
    );
    Ok(state)
}

/// Re-validate every entity in the plan plus the completeness report.
pub fn run_check(path: &Path) -> Result<CheckResult> {
    let state = load_plan(path)?;
    let data = &state.data;
    let mut findings = Vec::new();

    let mut push = |kind: EntityKind, id: String, name: String, report: ValidationReport| {
        if report.error_count() + report.warning_count() > 0 {
            findings.push(EntityFinding {
                kind,
                id,
                name,
                report,
            });
        }
    };

    for teacher in &data.teachers {
        let report = validate_teacher(&TeacherDraft::from(teacher), data);
        push(
            EntityKind::Teachers,
            teacher.id.as_str().to_string(),
            teacher.name.clone(),
            report,
        );
    }
    for subject in &data.subjects {
        let report = validate_subject(&SubjectDraft::from(subject), data);
        push(
            EntityKind::Subjects,
            subject.id.as_str().to_string(),
            subject.name.clone(),
            report,
        );
    }
    for classroom in &data.classrooms {
        let report = validate_classroom(&ClassroomDraft::from(classroom), data);
        push(
            EntityKind::Classrooms,
            classroom.id.as_str().to_string(),
            classroom.name.clone(),
            report,
        );
    }
    for assignment in &data.assignments {
        let report = validate_assignment(&AssignmentDraft::from(assignment), data);
        push(
            EntityKind::Assignments,
            assignment.id.as_str().to_string(),
            format!(
                "{} / {} / {}",
                assignment.teacher_id, assignment.subject_id, assignment.classroom_id
            ),
            report,
        );
    }

    let completeness = validate_system_completeness(&state);
    let has_errors = findings.iter().any(|f| !f.report.is_valid());
    info!(
        findings = findings.len(),
        completeness_warnings = completeness.warning_count(),
        has_errors,
        "plan checked"
    );

    Ok(CheckResult {
        plan_file: path.to_path_buf(),
        findings,
        completeness,
        has_errors,
    })
}

/// Compute whole-plan statistics.
pub fn run_stats(path: &Path) -> Result<Statistics> {
    let state = load_plan(path)?;
    Ok(statistics(&state))
}

/// Either a whole-plan or a per-teacher summary.
#[derive(Debug)]
pub enum SummaryOutput {
    Plan(PlanSummary),
    Teacher(TeacherAssignmentSummary),
}

pub fn run_summary(path: &Path, teacher: Option<&str>) -> Result<SummaryOutput> {
    let state = load_plan(path)?;
    match teacher {
        None => Ok(SummaryOutput::Plan(plan_summary(&state))),
        Some(raw) => {
            let id = TeacherId::new(raw).map_err(|e| anyhow!(e))?;
            let teacher = state
                .data
                .teacher(&id)
                .ok_or_else(|| anyhow!("teacher {id} not found in plan"))?;
            Ok(SummaryOutput::Teacher(teacher_assignment_summary(
                &state, teacher,
            )))
        }
    }
}
