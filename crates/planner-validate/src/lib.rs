#![deny(unsafe_code)]

//! Validation engine for the assignment planner.
//!
//! Pure accept/reject functions over candidate entities and the current
//! state. Errors block the caller from dispatching the corresponding
//! command; warnings are advisory and never block.

pub mod assignment;
pub mod completeness;
pub mod report;
pub mod util;
pub mod validator;

pub use assignment::{ASSIGNMENT_MAX_HOURS, validate_assignment, validate_assignment_batch};
pub use completeness::validate_system_completeness;
pub use report::{BatchReport, ValidationReport};
pub use validator::{
    CLASSROOM_MAX_CAPACITY, SUBJECT_MAX_HOURS, SUBJECT_RECOMMENDED_HOURS, TEACHER_MAX_LOAD_CAP,
    validate_classroom, validate_subject, validate_teacher,
};
