use serde::{Deserialize, Serialize};

use crate::api::Notice;
use crate::db::repository::RepositoryError;
use crate::models::Pilot;

/// A reason the assigned pilot cannot fly an urgent mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessIssue {
    NotAvailable,
    LocationMismatch,
    MissingSkill,
    MissingCertification,
}

impl FitnessIssue {
    pub fn message(self) -> &'static str {
        match self {
            FitnessIssue::NotAvailable => "Pilot not available",
            FitnessIssue::LocationMismatch => "Pilot location mismatch",
            FitnessIssue::MissingSkill => "Pilot lacks required skill",
            FitnessIssue::MissingCertification => "Pilot lacks required certification",
        }
    }
}

/// The columns shown for a suggested alternative pilot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PilotSummary {
    pub name: String,
    pub skills: String,
    pub certifications: String,
    pub location: String,
}

impl From<&Pilot> for PilotSummary {
    fn from(pilot: &Pilot) -> Self {
        Self {
            name: pilot.name.clone(),
            skills: pilot.skills.clone(),
            certifications: pilot.certifications.clone(),
            location: pilot.location.clone(),
        }
    }
}

/// How an urgent mission's assignment was judged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReviewOutcome {
    NoPilotAssigned,
    PilotNotFound {
        pilot: String,
    },
    Suitable {
        pilot: String,
    },
    Reassign {
        pilot: String,
        issues: Vec<FitnessIssue>,
        alternatives: Vec<PilotSummary>,
    },
}

impl ReviewOutcome {
    pub fn notices(&self) -> Vec<Notice> {
        match self {
            ReviewOutcome::NoPilotAssigned => vec![Notice::warning("No pilot assigned yet.")],
            ReviewOutcome::PilotNotFound { pilot } => {
                vec![Notice::error(format!("Assigned pilot {} not found.", pilot))]
            }
            ReviewOutcome::Suitable { .. } => vec![Notice::success(
                "Assigned pilot is suitable. No reassignment needed.",
            )],
            ReviewOutcome::Reassign {
                issues,
                alternatives,
                ..
            } => {
                let mut notices: Vec<Notice> = issues
                    .iter()
                    .map(|issue| Notice::warning(issue.message()))
                    .collect();
                if alternatives.is_empty() {
                    notices.push(Notice::error("No suitable alternative pilot found."));
                } else {
                    notices.push(Notice::success("Suggested Alternative Pilot(s)"));
                }
                notices
            }
        }
    }
}

/// Review of a single urgent mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionReview {
    pub project_id: String,
    pub outcome: ReviewOutcome,
    pub notices: Vec<Notice>,
}

impl MissionReview {
    pub fn new(project_id: impl Into<String>, outcome: ReviewOutcome) -> Self {
        let notices = outcome.notices();
        Self {
            project_id: project_id.into(),
            outcome,
            notices,
        }
    }
}

/// Result of the urgent reassignment pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReassignmentReport {
    pub reviews: Vec<MissionReview>,
    pub notices: Vec<Notice>,
}

impl ReassignmentReport {
    pub fn new(reviews: Vec<MissionReview>) -> Self {
        let notices = if reviews.is_empty() {
            vec![Notice::info("No urgent missions found.")]
        } else {
            Vec::new()
        };
        Self { reviews, notices }
    }

    /// Report for a pass that could not load its tables.
    pub fn load_failed(error: &RepositoryError) -> Self {
        Self {
            reviews: Vec::new(),
            notices: vec![Notice::error(format!(
                "Could not load tables for urgent reassignment: {}",
                error
            ))],
        }
    }
}

pub const POST_URGENT_REASSIGNMENT: &str = "/reassignments/urgent";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::NoticeLevel;

    #[test]
    fn test_reassign_notices_end_with_alternatives_verdict() {
        let outcome = ReviewOutcome::Reassign {
            pilot: "Neha".to_string(),
            issues: vec![FitnessIssue::NotAvailable, FitnessIssue::MissingSkill],
            alternatives: vec![],
        };
        let notices = outcome.notices();
        assert_eq!(notices.len(), 3);
        assert_eq!(notices[0].message, "Pilot not available");
        assert_eq!(notices[1].message, "Pilot lacks required skill");
        assert_eq!(notices[2].level, NoticeLevel::Error);
        assert_eq!(notices[2].message, "No suitable alternative pilot found.");
    }

    #[test]
    fn test_empty_report_has_info_notice() {
        let report = ReassignmentReport::new(vec![]);
        assert_eq!(report.notices, vec![Notice::info("No urgent missions found.")]);
    }

    #[test]
    fn test_outcome_serialization_is_tagged() {
        let review = MissionReview::new("PRJ003", ReviewOutcome::NoPilotAssigned);
        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["outcome"]["outcome"], "no_pilot_assigned");
        assert_eq!(json["notices"][0]["level"], "warning");
    }
}
