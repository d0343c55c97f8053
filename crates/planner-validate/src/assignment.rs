//! Assignment validation: referential integrity, level compatibility,
//! duplicate tuples, and teacher load ceilings.

use planner_model::{AssignmentDraft, PlanData, Semester, Teacher};

use crate::report::{BatchReport, ValidationReport};

/// Hard cap on a single assignment's weekly hours.
pub const ASSIGNMENT_MAX_HOURS: u32 = 20;

/// Fraction of a teacher's ceiling at which a warning is raised.
const LOAD_WARNING_RATIO: f64 = 0.9;

pub fn validate_assignment(draft: &AssignmentDraft, data: &PlanData) -> ValidationReport {
    let mut report = ValidationReport::new();

    let teacher = match &draft.teacher_id {
        None => {
            report.error("Teacher is required");
            None
        }
        Some(id) => {
            let found = data.teacher(id);
            if found.is_none() {
                report.error(format!("Teacher {id} does not exist"));
            }
            found
        }
    };
    let subject = match &draft.subject_id {
        None => {
            report.error("Subject is required");
            None
        }
        Some(id) => {
            let found = data.subject(id);
            if found.is_none() {
                report.error(format!("Subject {id} does not exist"));
            }
            found
        }
    };
    let classroom = match &draft.classroom_id {
        None => {
            report.error("Classroom is required");
            None
        }
        Some(id) => {
            let found = data.classroom(id);
            if found.is_none() {
                report.error(format!("Classroom {id} does not exist"));
            }
            found
        }
    };

    if let Some(teacher) = teacher
        && !teacher.is_active
    {
        report.warning(format!("Teacher {} is inactive", teacher.name));
    }
    if let Some(subject) = subject
        && !subject.is_active
    {
        report.warning(format!("Subject {} is inactive", subject.name));
    }

    // Level compatibility is a hard error regardless of other fields.
    if let (Some(subject), Some(classroom)) = (subject, classroom)
        && subject.level != classroom.level
    {
        report.error(format!(
            "Subject {} is a {} subject but classroom {} is {}",
            subject.name, subject.level, classroom.name, classroom.level
        ));
    }

    let hours = match draft.hours_per_week {
        None => {
            report.error("Hours per week is required");
            None
        }
        Some(0) => {
            report.error("Hours per week must be greater than zero");
            None
        }
        Some(h) if h > ASSIGNMENT_MAX_HOURS => {
            report.error(format!(
                "Hours per week must not exceed {ASSIGNMENT_MAX_HOURS}"
            ));
            None
        }
        Some(h) => Some(h),
    };

    if let (Some(subject), Some(hours)) = (subject, hours)
        && hours > subject.required_hours
    {
        report.warning(format!(
            "{hours} hours/week exceed the {} required for {}",
            subject.required_hours, subject.name
        ));
    }

    if draft.semester.is_none() {
        report.error("Semester is required");
    }
    let year = draft.academic_year.as_deref().map(str::trim).unwrap_or_default();
    if year.is_empty() {
        report.error("Academic year is required");
    }

    // Duplicate (teacher, subject, classroom, semester, year) tuple among
    // non-cancelled assignments, skipping the one being edited.
    if let (Some(teacher_id), Some(subject_id), Some(classroom_id), Some(semester)) = (
        &draft.teacher_id,
        &draft.subject_id,
        &draft.classroom_id,
        draft.semester,
    ) && !year.is_empty()
    {
        let duplicate = data
            .assignments
            .iter()
            .filter(|a| Some(&a.id) != draft.id.as_ref())
            .filter(|a| a.status.counts())
            .any(|a| {
                a.teacher_id == *teacher_id
                    && a.subject_id == *subject_id
                    && a.classroom_id == *classroom_id
                    && a.semester == semester
                    && a.academic_year == year
            });
        if duplicate {
            report.error(
                "An identical assignment (same teacher, subject, classroom, semester, and year) \
                 already exists",
            );
        }
    }

    if let (Some(teacher), Some(semester), Some(hours)) = (teacher, draft.semester, hours)
        && !year.is_empty()
        && draft.status.is_none_or(|s| s.counts())
    {
        check_teacher_load(&mut report, draft, teacher, semester, year, hours, data);
    }

    report
}

/// Sum the teacher's other competing assignments and reject or warn on the
/// projected total.
fn check_teacher_load(
    report: &mut ValidationReport,
    draft: &AssignmentDraft,
    teacher: &Teacher,
    semester: Semester,
    year: &str,
    hours: u32,
    data: &PlanData,
) {
    let existing: u32 = data
        .assignments
        .iter()
        .filter(|a| Some(&a.id) != draft.id.as_ref())
        .filter(|a| a.loads_teacher(&teacher.id, semester, year))
        .map(|a| a.hours_per_week)
        .sum();
    let projected = existing + hours;

    if projected > teacher.max_load {
        report.error(format!(
            "Teacher {} would be overloaded: {projected}/{} weekly hours in {semester} {year}",
            teacher.name, teacher.max_load
        ));
    } else if f64::from(projected) >= f64::from(teacher.max_load) * LOAD_WARNING_RATIO {
        report.warning(format!(
            "Teacher {} is approaching the load ceiling: {projected}/{} weekly hours",
            teacher.name, teacher.max_load
        ));
    }
}

/// Validate a batch of candidates together.
///
/// Each item is validated individually with earlier batch items counting
/// as existing context for duplicate detection; on top of that, per-teacher
/// hours are aggregated across the whole batch to catch overloads no
/// single-item check would see.
pub fn validate_assignment_batch(drafts: &[AssignmentDraft], data: &PlanData) -> BatchReport {
    let mut batch = BatchReport::default();

    for (index, draft) in drafts.iter().enumerate() {
        let mut report = validate_assignment(draft, data);

        // Duplicates inside the batch itself.
        let duplicate_in_batch = drafts[..index].iter().any(|earlier| {
            earlier.teacher_id == draft.teacher_id
                && earlier.subject_id == draft.subject_id
                && earlier.classroom_id == draft.classroom_id
                && earlier.semester == draft.semester
                && earlier.academic_year == draft.academic_year
                && draft.teacher_id.is_some()
        });
        if duplicate_in_batch {
            report.error("Duplicate of an earlier assignment in this batch");
        }

        batch.items.push(report);
    }

    // Cross-item load aggregation.
    for (index, draft) in drafts.iter().enumerate() {
        let (Some(teacher_id), Some(semester), Some(hours)) =
            (&draft.teacher_id, draft.semester, draft.hours_per_week)
        else {
            continue;
        };
        let Some(teacher) = data.teacher(teacher_id) else {
            continue;
        };
        let year = draft.academic_year.as_deref().unwrap_or_default();

        let existing: u32 = data
            .assignments
            .iter()
            .filter(|a| Some(&a.id) != draft.id.as_ref())
            .filter(|a| a.loads_teacher(teacher_id, semester, year))
            .map(|a| a.hours_per_week)
            .sum();
        let from_batch: u32 = drafts
            .iter()
            .enumerate()
            .filter(|(other_index, _)| *other_index != index)
            .filter_map(|(_, other)| {
                let other_teacher = other.teacher_id.as_ref()?;
                let other_semester = other.semester?;
                let other_hours = other.hours_per_week?;
                let other_year = other.academic_year.as_deref()?;
                (other_teacher == teacher_id
                    && other_year == year
                    && other_semester.overlaps(semester))
                .then_some(other_hours)
            })
            .sum();

        let projected = existing + from_batch + hours;
        if from_batch > 0 && projected > teacher.max_load {
            let message = format!(
                "Batch overloads teacher {}: {projected}/{} weekly hours in {semester} {year}",
                teacher.name, teacher.max_load
            );
            // Every draft of the same (teacher, semester, year) group
            // computes the same projection; report it once even when the
            // group's drafts are interleaved with other teachers'.
            if !batch.overall.errors.contains(&message) {
                batch.overall.error(message);
            }
        }
    }

    batch
}
