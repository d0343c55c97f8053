//! Planner-wide settings and partial updates.

use serde::{Deserialize, Serialize};

use crate::enums::Semester;

/// Global planner settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub academic_year: String,
    pub default_semester: Semester,
    /// Teachers below this weekly total are flagged as underloaded.
    pub min_teacher_load: u32,
    /// Advisory global ceiling; each teacher still carries its own
    /// `max_load`.
    pub max_teacher_load: u32,
    pub autosave: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            academic_year: "2024-2025".to_string(),
            default_semester: Semester::First,
            min_teacher_load: 10,
            max_teacher_load: 30,
            autosave: true,
        }
    }
}

impl Settings {
    /// Apply a partial update, leaving unset fields untouched.
    pub fn apply_patch(&mut self, patch: &SettingsPatch) {
        if let Some(year) = &patch.academic_year {
            self.academic_year = year.clone();
        }
        if let Some(semester) = patch.default_semester {
            self.default_semester = semester;
        }
        if let Some(min) = patch.min_teacher_load {
            self.min_teacher_load = min;
        }
        if let Some(max) = patch.max_teacher_load {
            self.max_teacher_load = max;
        }
        if let Some(autosave) = patch.autosave {
            self.autosave = autosave;
        }
    }
}

/// Partial settings update carried by the settings command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    pub academic_year: Option<String>,
    pub default_semester: Option<Semester>,
    pub min_teacher_load: Option<u32>,
    pub max_teacher_load: Option<u32>,
    pub autosave: Option<bool>,
}
