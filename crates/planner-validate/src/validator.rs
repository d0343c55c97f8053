//! Per-entity validation rules for teachers, subjects, and classrooms.
//!
//! Each function takes a partial candidate plus the current collections and
//! returns a [`ValidationReport`]. A candidate carrying an `id` is treated
//! as an edit: the entity with that id is excluded from duplicate checks.

use planner_model::{ClassroomDraft, PlanData, SubjectDraft, TeacherDraft};

use crate::report::ValidationReport;
use crate::util::{is_valid_email, is_valid_phone, require_bounded, require_name};

/// Hard cap on any single teacher's weekly hour ceiling.
pub const TEACHER_MAX_LOAD_CAP: u32 = 40;

/// Hard cap on a subject's required weekly hours.
pub const SUBJECT_MAX_HOURS: u32 = 20;

/// Above this, required hours draw an advisory warning.
pub const SUBJECT_RECOMMENDED_HOURS: u32 = 10;

pub const CLASSROOM_MAX_CAPACITY: u32 = 100;
pub const GRADE_MIN: u32 = 1;
pub const GRADE_MAX: u32 = 12;

/// Occupancy ratio at which a classroom draws a near-capacity warning.
const CAPACITY_WARNING_RATIO: f64 = 0.9;

pub fn validate_teacher(draft: &TeacherDraft, data: &PlanData) -> ValidationReport {
    let mut report = ValidationReport::new();

    let name = require_name(&mut report, "Teacher name", draft.name.as_ref());
    require_name(&mut report, "Specialization", draft.specialization.as_ref());
    require_bounded(&mut report, "Max load", draft.max_load, TEACHER_MAX_LOAD_CAP);

    if let Some(email) = draft.email.as_deref().map(str::trim).filter(|e| !e.is_empty())
        && !is_valid_email(email)
    {
        report.error(format!("Invalid email address: {email}"));
    }
    if let Some(phone) = draft.phone.as_deref().map(str::trim).filter(|p| !p.is_empty())
        && !is_valid_phone(phone)
    {
        report.error(format!("Invalid phone number: {phone}"));
    }

    // Duplicates, excluding the teacher being edited.
    let others = data.teachers.iter().filter(|t| Some(&t.id) != draft.id.as_ref());
    for other in others {
        if let Some(name) = &name
            && other.name.eq_ignore_ascii_case(name)
        {
            report.error(format!("A teacher named {} already exists", other.name));
        }
        if let (Some(email), Some(existing)) = (draft.email.as_deref(), other.email.as_deref())
            && !email.trim().is_empty()
            && existing.eq_ignore_ascii_case(email.trim())
        {
            report.error(format!("Email {existing} is already used by {}", other.name));
        }
    }

    report
}

pub fn validate_subject(draft: &SubjectDraft, data: &PlanData) -> ValidationReport {
    let mut report = ValidationReport::new();

    let name = require_name(&mut report, "Subject name", draft.name.as_ref());

    let code = draft.code.as_deref().map(str::trim).unwrap_or_default();
    if code.is_empty() {
        report.error("Subject code is required");
    }

    if let Some(hours) = require_bounded(
        &mut report,
        "Required hours",
        draft.required_hours,
        SUBJECT_MAX_HOURS,
    ) && hours > SUBJECT_RECOMMENDED_HOURS
    {
        report.warning(format!(
            "Required hours {hours} exceed the recommended weekly maximum of \
             {SUBJECT_RECOMMENDED_HOURS}"
        ));
    }

    if draft.level.is_none() {
        report.error("Subject level is required");
    }

    let others = data.subjects.iter().filter(|s| Some(&s.id) != draft.id.as_ref());
    for other in others {
        // Codes are unique across all levels; names only within one level.
        if !code.is_empty() && other.code.eq_ignore_ascii_case(code) {
            report.error(format!("Subject code {} is already in use", other.code));
        }
        if let (Some(name), Some(level)) = (&name, draft.level)
            && other.level == level
            && other.name.eq_ignore_ascii_case(name)
        {
            report.error(format!(
                "A {level} subject named {} already exists",
                other.name
            ));
        }
    }

    report
}

pub fn validate_classroom(draft: &ClassroomDraft, data: &PlanData) -> ValidationReport {
    let mut report = ValidationReport::new();

    require_name(&mut report, "Classroom name", draft.name.as_ref());

    match draft.grade {
        None => report.error("Grade is required"),
        Some(grade) if !(GRADE_MIN..=GRADE_MAX).contains(&grade) => {
            report.error(format!("Grade must be between {GRADE_MIN} and {GRADE_MAX}"));
        }
        Some(_) => {}
    }

    let section = draft.section.as_deref().map(str::trim).unwrap_or_default();
    if section.is_empty() {
        report.error("Section is required");
    }

    if draft.level.is_none() {
        report.error("Classroom level is required");
    }

    let capacity = require_bounded(&mut report, "Capacity", draft.capacity, CLASSROOM_MAX_CAPACITY);
    if let (Some(capacity), Some(students)) = (capacity, draft.current_students) {
        if students > capacity {
            report.error(format!(
                "Current students ({students}) exceed capacity ({capacity})"
            ));
        } else if f64::from(students) >= f64::from(capacity) * CAPACITY_WARNING_RATIO {
            report.warning(format!(
                "Classroom is near capacity ({students}/{capacity})"
            ));
        }
    }

    let others = data.classrooms.iter().filter(|c| Some(&c.id) != draft.id.as_ref());
    for other in others {
        if let (Some(grade), Some(level)) = (draft.grade, draft.level)
            && other.grade == grade
            && other.level == level
            && !section.is_empty()
            && other.section.eq_ignore_ascii_case(section)
        {
            report.error(format!(
                "Classroom {}-{} already exists at the {level} level",
                other.grade, other.section
            ));
        }
    }

    report
}
