//! Type-safe enumerations for planner concepts that the external
//! persistence API represents as strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// School level a subject is taught at and a classroom belongs to.
///
/// An assignment is only legal when the subject's level matches the
/// classroom's level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Primary,
    Middle,
    High,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Primary => "primary",
            Level::Middle => "middle",
            Level::High => "high",
        }
    }

    /// All levels in ascending school order.
    pub fn all() -> [Level; 3] {
        [Level::Primary, Level::Middle, Level::High]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "primary" => Ok(Level::Primary),
            "middle" => Ok(Level::Middle),
            "high" => Ok(Level::High),
            _ => Err(format!("Unknown level: {s}")),
        }
    }
}

/// Portion of the academic year an assignment covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Semester {
    First,
    Second,
    /// Spans both semesters; counts toward load in either.
    Full,
}

impl Semester {
    pub fn as_str(&self) -> &'static str {
        match self {
            Semester::First => "first",
            Semester::Second => "second",
            Semester::Full => "full",
        }
    }

    /// Returns true when two assignments occupy overlapping parts of the
    /// year, i.e. their hours compete for the same teacher load.
    pub fn overlaps(&self, other: Semester) -> bool {
        *self == other || *self == Semester::Full || other == Semester::Full
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" => Ok(Semester::First),
            "second" => Ok(Semester::Second),
            "full" => Ok(Semester::Full),
            _ => Err(format!("Unknown semester: {s}")),
        }
    }
}

/// Lifecycle status of an assignment.
///
/// Cancelled assignments stay in the store for auditing but are excluded
/// from load, coverage, and duplicate checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Active,
    Pending,
    Cancelled,
}

impl AssignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Active => "active",
            AssignmentStatus::Pending => "pending",
            AssignmentStatus::Cancelled => "cancelled",
        }
    }

    /// Non-cancelled assignments count toward load and coverage.
    pub fn counts(&self) -> bool {
        !matches!(self, AssignmentStatus::Cancelled)
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssignmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(AssignmentStatus::Active),
            "pending" => Ok(AssignmentStatus::Pending),
            "cancelled" | "canceled" => Ok(AssignmentStatus::Cancelled),
            _ => Err(format!("Unknown assignment status: {s}")),
        }
    }
}

/// Entity collections addressed by loading flags and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Teachers,
    Subjects,
    Classrooms,
    Assignments,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Teachers => "teachers",
            EntityKind::Subjects => "subjects",
            EntityKind::Classrooms => "classrooms",
            EntityKind::Assignments => "assignments",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How entity lists are presented.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Table => "table",
            ViewMode::Cards => "cards",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_round_trips_through_str() {
        for level in Level::all() {
            assert_eq!(level.as_str().parse::<Level>().unwrap(), level);
        }
        assert!("kindergarten".parse::<Level>().is_err());
    }

    #[test]
    fn full_semester_overlaps_both() {
        assert!(Semester::Full.overlaps(Semester::First));
        assert!(Semester::Second.overlaps(Semester::Full));
        assert!(!Semester::First.overlaps(Semester::Second));
    }

    #[test]
    fn cancelled_does_not_count() {
        assert!(AssignmentStatus::Active.counts());
        assert!(AssignmentStatus::Pending.counts());
        assert!(!AssignmentStatus::Cancelled.counts());
    }
}
