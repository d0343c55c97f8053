//! Undo/redo history types.
//!
//! History entries hold [`Snapshot`] values, never the live
//! [`crate::state::PlanState`], so a stored state can never carry its own
//! history. That rules out nested history growth by construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::Snapshot;

/// Default maximum number of undo steps retained.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Broad category of a recorded action, used for labels and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Create,
    Update,
    Delete,
    BulkDelete,
    Import,
    Settings,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Create => "create",
            ActionKind::Update => "update",
            ActionKind::Delete => "delete",
            ActionKind::BulkDelete => "bulk-delete",
            ActionKind::Import => "import",
            ActionKind::Settings => "settings",
        }
    }
}

/// Human-facing description of the action a checkpoint precedes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDescriptor {
    pub kind: ActionKind,
    pub label: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
}

impl ActionDescriptor {
    pub fn new(kind: ActionKind, label: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind,
            label: label.into(),
            timestamp,
            entity_id: None,
        }
    }

    /// Attach the id of the entity the action touches.
    #[must_use]
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }
}

/// One undo or redo step: the state before the action, plus what the
/// action was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub snapshot: Snapshot,
    pub action: ActionDescriptor,
}

/// Bounded undo/redo stacks.
///
/// `past` is most-recent-last, `future` most-recent-first. `can_undo` /
/// `can_redo` are derived from stack emptiness rather than stored, so they
/// can never drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct History {
    pub past: Vec<HistoryEntry>,
    pub future: Vec<HistoryEntry>,
    pub limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl History {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Default::default()
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_follow_stack_emptiness() {
        let history = History::default();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.limit, DEFAULT_HISTORY_LIMIT);
    }
}
