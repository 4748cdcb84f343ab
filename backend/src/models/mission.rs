use serde::{Deserialize, Serialize};

use super::cell;
use crate::db::models::Record;
use crate::define_cell_enum;

define_cell_enum!(
    /// Mission priority as written in the `priority` column.
    Priority {
        Urgent => "Urgent",
    }
);

/// A row of the missions sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    #[serde(default, deserialize_with = "cell::text")]
    pub project_id: String,
    #[serde(default, deserialize_with = "cell::text")]
    pub location: String,
    #[serde(default, deserialize_with = "cell::text")]
    pub required_skills: String,
    #[serde(default, deserialize_with = "cell::text")]
    pub required_certs: String,
    #[serde(default)]
    pub priority: Priority,
    /// Weak reference to a roster name; an empty cell means unassigned.
    #[serde(default, deserialize_with = "cell::optional_text")]
    pub assigned_pilot: Option<String>,
    #[serde(flatten)]
    pub extra: Record,
}

impl Mission {
    pub fn new(
        project_id: impl Into<String>,
        location: impl Into<String>,
        required_skills: impl Into<String>,
        required_certs: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            location: location.into(),
            required_skills: required_skills.into(),
            required_certs: required_certs.into(),
            priority,
            assigned_pilot: None,
            extra: Record::new(),
        }
    }

    pub fn assigned_to(mut self, pilot: impl Into<String>) -> Self {
        self.assigned_pilot = Some(pilot.into());
        self
    }

    pub fn is_urgent(&self) -> bool {
        self.priority == Priority::Urgent
    }
}
