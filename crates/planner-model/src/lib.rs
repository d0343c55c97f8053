#![deny(unsafe_code)]

//! Core data model for the assignment planner.
//!
//! Pure types only: entities, drafts, commands, settings, and the
//! state/snapshot/history containers. No IO and no clock access; callers
//! stamp timestamps and own persistence.

pub mod command;
pub mod entities;
pub mod enums;
pub mod error;
pub mod history;
pub mod ids;
pub mod settings;
pub mod state;

pub use command::Command;
pub use entities::{
    Assignment, AssignmentDraft, Classroom, ClassroomDraft, Subject, SubjectDraft, Teacher,
    TeacherDraft,
};
pub use enums::{AssignmentStatus, EntityKind, Level, Semester, ViewMode};
pub use error::{ModelError, Result};
pub use history::{
    ActionDescriptor, ActionKind, DEFAULT_HISTORY_LIMIT, History, HistoryEntry,
};
pub use ids::{AssignmentId, ClassroomId, SubjectId, TeacherId};
pub use settings::{Settings, SettingsPatch};
pub use state::{ErrorMap, FilterState, LoadingFlags, PlanData, PlanState, Snapshot, UiState};
