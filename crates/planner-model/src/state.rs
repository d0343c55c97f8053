//! The aggregate state tree.
//!
//! Two shapes exist on purpose: [`Snapshot`] is everything except history
//! and is what undo/redo stacks store; [`PlanState`] is the live root that
//! adds [`History`] on top. Conversion between the two is lossless for the
//! non-history fields.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::entities::{Assignment, Classroom, Subject, Teacher};
use crate::enums::{AssignmentStatus, EntityKind, Level, Semester, ViewMode};
use crate::history::History;
use crate::ids::{AssignmentId, ClassroomId, SubjectId, TeacherId};
use crate::settings::Settings;

/// Per-collection loading flags set around external fetches.
pub type LoadingFlags = BTreeMap<EntityKind, bool>;

/// Per-collection error messages, cleared explicitly via a command.
pub type ErrorMap = BTreeMap<EntityKind, String>;

/// The four entity collections.
///
/// Vectors keep stable listing order; lookups scan, which is fine at
/// school scale (hundreds of rows, not millions).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanData {
    pub teachers: Vec<Teacher>,
    pub subjects: Vec<Subject>,
    pub classrooms: Vec<Classroom>,
    pub assignments: Vec<Assignment>,
}

impl PlanData {
    pub fn teacher(&self, id: &TeacherId) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == *id)
    }

    pub fn subject(&self, id: &SubjectId) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == *id)
    }

    pub fn classroom(&self, id: &ClassroomId) -> Option<&Classroom> {
        self.classrooms.iter().find(|c| c.id == *id)
    }

    pub fn assignment(&self, id: &AssignmentId) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == *id)
    }
}

/// Current list filters. All filters combine with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    /// Case-insensitive substring match over names, codes, and
    /// specializations.
    pub search: String,
    pub level: Option<Level>,
    pub semester: Option<Semester>,
    pub status: Option<AssignmentStatus>,
    pub teacher: Option<TeacherId>,
    pub subject: Option<SubjectId>,
    pub classroom: Option<ClassroomId>,
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }

    /// Number of filters currently narrowing results.
    pub fn active_count(&self) -> usize {
        usize::from(!self.search.trim().is_empty())
            + usize::from(self.level.is_some())
            + usize::from(self.semester.is_some())
            + usize::from(self.status.is_some())
            + usize::from(self.teacher.is_some())
            + usize::from(self.subject.is_some())
            + usize::from(self.classroom.is_some())
    }
}

/// Transient UI state carried alongside the data so undo also restores
/// what the user was looking at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiState {
    /// Multi-select set for bulk assignment operations.
    pub selected: BTreeSet<AssignmentId>,
    /// Entity whose detail panel is expanded, if any.
    pub expanded: Option<String>,
    pub view_mode: ViewMode,
    pub sidebar_open: bool,
    /// Row context menu currently open, if any.
    pub open_menu: Option<String>,
}

/// Everything except history. This is the shape stored in undo/redo
/// stacks and the shape external exporters consume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub data: PlanData,
    pub ui: UiState,
    pub filters: FilterState,
    pub loading: LoadingFlags,
    pub errors: ErrorMap,
    pub settings: Settings,
}

/// The live aggregate root: a snapshot's worth of fields plus history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanState {
    pub data: PlanData,
    pub ui: UiState,
    pub filters: FilterState,
    pub loading: LoadingFlags,
    pub errors: ErrorMap,
    pub settings: Settings,
    pub history: History,
}

impl PlanState {
    /// Copy the non-history fields into a history-free snapshot.
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            data: self.data.clone(),
            ui: self.ui.clone(),
            filters: self.filters.clone(),
            loading: self.loading.clone(),
            errors: self.errors.clone(),
            settings: self.settings.clone(),
        }
    }

    /// Rebuild a live state from a snapshot plus an existing history.
    pub fn from_snapshot(snapshot: Snapshot, history: History) -> Self {
        Self {
            data: snapshot.data,
            ui: snapshot.ui,
            filters: snapshot.filters,
            loading: snapshot.loading,
            errors: snapshot.errors,
            settings: snapshot.settings,
            history,
        }
    }

    /// Replace the non-history fields in place, keeping history as is.
    pub fn restore_snapshot(&mut self, snapshot: Snapshot) {
        self.data = snapshot.data;
        self.ui = snapshot.ui;
        self.filters = snapshot.filters;
        self.loading = snapshot.loading;
        self.errors = snapshot.errors;
        self.settings = snapshot.settings;
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}
