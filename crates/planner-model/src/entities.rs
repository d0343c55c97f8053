//! Entity definitions for the assignment planner.
//!
//! These mirror the shapes served by the external persistence API, so all
//! fields use camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{AssignmentStatus, Level, Semester};
use crate::ids::{AssignmentId, ClassroomId, SubjectId, TeacherId};

/// A teacher that can be assigned to subjects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    pub specialization: String,
    /// Weekly hour ceiling. Always positive.
    pub max_load: u32,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Teacher {
    /// Returns a copy with a refreshed `updated_at` stamp.
    ///
    /// Update commands carry already-stamped entities so the transition
    /// function never reads the clock.
    #[must_use]
    pub fn touched(mut self, now: DateTime<Utc>) -> Self {
        self.updated_at = now;
        self
    }
}

/// A subject taught at one school level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    /// Short code, unique across all levels.
    pub code: String,
    /// Target weekly hours per classroom.
    pub required_hours: u32,
    pub level: Level,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subject {
    #[must_use]
    pub fn touched(mut self, now: DateTime<Utc>) -> Self {
        self.updated_at = now;
        self
    }
}

/// A classroom identified by grade, section, and level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classroom {
    pub id: ClassroomId,
    pub name: String,
    pub grade: u32,
    pub section: String,
    pub capacity: u32,
    pub current_students: u32,
    pub level: Level,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Classroom {
    #[must_use]
    pub fn touched(mut self, now: DateTime<Utc>) -> Self {
        self.updated_at = now;
        self
    }
}

/// The binding of one teacher to one subject taught in one classroom for a
/// given semester and academic year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: AssignmentId,
    pub teacher_id: TeacherId,
    pub subject_id: SubjectId,
    pub classroom_id: ClassroomId,
    pub hours_per_week: u32,
    pub semester: Semester,
    /// E.g. "2024-2025".
    pub academic_year: String,
    pub status: AssignmentStatus,
    pub assigned_at: DateTime<Utc>,
    pub assigned_by: String,
}

impl Assignment {
    /// Returns true when both assignments claim the same
    /// (teacher, subject, classroom, semester, year) tuple.
    pub fn same_tuple(&self, other: &Assignment) -> bool {
        self.teacher_id == other.teacher_id
            && self.subject_id == other.subject_id
            && self.classroom_id == other.classroom_id
            && self.semester == other.semester
            && self.academic_year == other.academic_year
    }

    /// Returns true when this assignment competes for the given teacher's
    /// load in the given term. Cancelled assignments never compete.
    pub fn loads_teacher(&self, teacher: &TeacherId, semester: Semester, year: &str) -> bool {
        self.status.counts()
            && self.teacher_id == *teacher
            && self.academic_year == year
            && self.semester.overlaps(semester)
    }
}

/// Partial teacher candidate submitted for validation.
///
/// A populated `id` marks an edit of an existing teacher; that teacher is
/// excluded from duplicate checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeacherDraft {
    pub id: Option<TeacherId>,
    pub name: Option<String>,
    pub specialization: Option<String>,
    pub max_load: Option<u32>,
    pub is_active: Option<bool>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<&Teacher> for TeacherDraft {
    fn from(teacher: &Teacher) -> Self {
        Self {
            id: Some(teacher.id.clone()),
            name: Some(teacher.name.clone()),
            specialization: Some(teacher.specialization.clone()),
            max_load: Some(teacher.max_load),
            is_active: Some(teacher.is_active),
            email: teacher.email.clone(),
            phone: teacher.phone.clone(),
        }
    }
}

/// Partial subject candidate submitted for validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubjectDraft {
    pub id: Option<SubjectId>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub required_hours: Option<u32>,
    pub level: Option<Level>,
    pub is_active: Option<bool>,
}

impl From<&Subject> for SubjectDraft {
    fn from(subject: &Subject) -> Self {
        Self {
            id: Some(subject.id.clone()),
            name: Some(subject.name.clone()),
            code: Some(subject.code.clone()),
            required_hours: Some(subject.required_hours),
            level: Some(subject.level),
            is_active: Some(subject.is_active),
        }
    }
}

/// Partial classroom candidate submitted for validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassroomDraft {
    pub id: Option<ClassroomId>,
    pub name: Option<String>,
    pub grade: Option<u32>,
    pub section: Option<String>,
    pub capacity: Option<u32>,
    pub current_students: Option<u32>,
    pub level: Option<Level>,
}

impl From<&Classroom> for ClassroomDraft {
    fn from(classroom: &Classroom) -> Self {
        Self {
            id: Some(classroom.id.clone()),
            name: Some(classroom.name.clone()),
            grade: Some(classroom.grade),
            section: Some(classroom.section.clone()),
            capacity: Some(classroom.capacity),
            current_students: Some(classroom.current_students),
            level: Some(classroom.level),
        }
    }
}

/// Partial assignment candidate submitted for validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignmentDraft {
    pub id: Option<AssignmentId>,
    pub teacher_id: Option<TeacherId>,
    pub subject_id: Option<SubjectId>,
    pub classroom_id: Option<ClassroomId>,
    pub hours_per_week: Option<u32>,
    pub semester: Option<Semester>,
    pub academic_year: Option<String>,
    pub status: Option<AssignmentStatus>,
}

impl From<&Assignment> for AssignmentDraft {
    fn from(assignment: &Assignment) -> Self {
        Self {
            id: Some(assignment.id.clone()),
            teacher_id: Some(assignment.teacher_id.clone()),
            subject_id: Some(assignment.subject_id.clone()),
            classroom_id: Some(assignment.classroom_id.clone()),
            hours_per_week: Some(assignment.hours_per_week),
            semester: Some(assignment.semester),
            academic_year: Some(assignment.academic_year.clone()),
            status: Some(assignment.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{AssignmentId, ClassroomId, SubjectId, TeacherId};

    fn assignment(id: &str, semester: Semester, status: AssignmentStatus) -> Assignment {
        Assignment {
            id: AssignmentId::new(id).unwrap(),
            teacher_id: TeacherId::new("t1").unwrap(),
            subject_id: SubjectId::new("s1").unwrap(),
            classroom_id: ClassroomId::new("c1").unwrap(),
            hours_per_week: 4,
            semester,
            academic_year: "2024-2025".to_string(),
            status,
            assigned_at: Utc::now(),
            assigned_by: "admin".to_string(),
        }
    }

    #[test]
    fn same_tuple_ignores_id_and_hours() {
        let a = assignment("a1", Semester::First, AssignmentStatus::Active);
        let mut b = assignment("a2", Semester::First, AssignmentStatus::Pending);
        b.hours_per_week = 9;
        assert!(a.same_tuple(&b));

        let c = assignment("a3", Semester::Second, AssignmentStatus::Active);
        assert!(!a.same_tuple(&c));
    }

    #[test]
    fn cancelled_assignment_never_loads() {
        let cancelled = assignment("a1", Semester::First, AssignmentStatus::Cancelled);
        let teacher = TeacherId::new("t1").unwrap();
        assert!(!cancelled.loads_teacher(&teacher, Semester::First, "2024-2025"));

        let full = assignment("a2", Semester::Full, AssignmentStatus::Active);
        assert!(full.loads_teacher(&teacher, Semester::Second, "2024-2025"));
        assert!(!full.loads_teacher(&teacher, Semester::Second, "2025-2026"));
    }

    #[test]
    fn teacher_serializes_camel_case() {
        let teacher = Teacher {
            id: TeacherId::new("t1").unwrap(),
            name: "Alice Carter".to_string(),
            specialization: "Mathematics".to_string(),
            max_load: 20,
            is_active: true,
            email: None,
            phone: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&teacher).expect("serialize teacher");
        assert!(json.get("maxLoad").is_some());
        assert!(json.get("isActive").is_some());
        assert!(json.get("email").is_none());
    }
}
