use serde::{Deserialize, Serialize};

use crate::api::Notice;
use crate::db::repository::RepositoryError;

/// A mismatch between a mission's requirements and its assigned pilot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Conflict {
    PilotNotFound {
        project_id: String,
        pilot: String,
    },
    LocationMismatch {
        project_id: String,
        pilot: String,
        pilot_location: String,
        mission_location: String,
    },
    SkillMismatch {
        project_id: String,
        pilot: String,
        required_skill: String,
    },
    CertificationMismatch {
        project_id: String,
        pilot: String,
        required_cert: String,
    },
}

impl Conflict {
    pub fn project_id(&self) -> &str {
        match self {
            Conflict::PilotNotFound { project_id, .. }
            | Conflict::LocationMismatch { project_id, .. }
            | Conflict::SkillMismatch { project_id, .. }
            | Conflict::CertificationMismatch { project_id, .. } => project_id,
        }
    }

    pub fn notice(&self) -> Notice {
        match self {
            Conflict::PilotNotFound { project_id, pilot } => Notice::error(format!(
                "Pilot '{}' not found for mission {}",
                pilot, project_id
            )),
            Conflict::LocationMismatch {
                project_id,
                pilot,
                pilot_location,
                mission_location,
            } => Notice::warning(format!(
                "Location mismatch: Pilot {} is in {} but mission {} is in {}",
                pilot, pilot_location, project_id, mission_location
            )),
            Conflict::SkillMismatch {
                project_id,
                pilot,
                required_skill,
            } => Notice::warning(format!(
                "Skill mismatch: Pilot {} lacks '{}' for mission {}",
                pilot, required_skill, project_id
            )),
            Conflict::CertificationMismatch {
                project_id,
                pilot,
                required_cert,
            } => Notice::warning(format!(
                "Certification mismatch: Pilot {} lacks '{}' for mission {}",
                pilot, required_cert, project_id
            )),
        }
    }
}

/// Result of the assignment conflict check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictReport {
    pub conflicts: Vec<Conflict>,
    pub notices: Vec<Notice>,
}

impl ConflictReport {
    pub fn new(conflicts: Vec<Conflict>) -> Self {
        let notices = if conflicts.is_empty() {
            vec![Notice::success(
                "No conflicts detected. All assignments look good.",
            )]
        } else {
            conflicts.iter().map(Conflict::notice).collect()
        };
        Self { conflicts, notices }
    }

    /// Report for a check that could not load its tables.
    pub fn load_failed(error: &RepositoryError) -> Self {
        Self {
            conflicts: Vec::new(),
            notices: vec![Notice::error(format!(
                "Could not load tables for conflict check: {}",
                error
            ))],
        }
    }

    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

pub const POST_CHECK_CONFLICTS: &str = "/conflicts/check";
