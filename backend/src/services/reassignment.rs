//! Urgent reassignment advisor.

use log::debug;

use crate::db::repository::{FullRepository, RepositoryResult};
use crate::db::services;
use crate::models::{Mission, Pilot};
use crate::routes::reassignment::{MissionReview, PilotSummary, ReassignmentReport, ReviewOutcome};
use crate::services::matching::{alternatives, assess, find_pilot};

/// Judge one mission's assignment and, if the pilot is unfit, search the
/// roster for replacements.
pub fn review_mission(pilots: &[Pilot], mission: &Mission) -> MissionReview {
    let outcome = match mission.assigned_pilot.as_deref() {
        None => ReviewOutcome::NoPilotAssigned,
        Some(name) => match find_pilot(pilots, name) {
            None => ReviewOutcome::PilotNotFound {
                pilot: name.to_string(),
            },
            Some(pilot) => {
                let issues = assess(pilot, mission);
                if issues.is_empty() {
                    ReviewOutcome::Suitable {
                        pilot: pilot.name.clone(),
                    }
                } else {
                    ReviewOutcome::Reassign {
                        pilot: pilot.name.clone(),
                        issues,
                        alternatives: alternatives(pilots, mission)
                            .into_iter()
                            .map(PilotSummary::from)
                            .collect(),
                    }
                }
            }
        },
    };
    MissionReview::new(mission.project_id.clone(), outcome)
}

/// Review every urgent mission, in mission order. Other priorities are
/// never evaluated.
pub fn review_urgent_missions(pilots: &[Pilot], missions: &[Mission]) -> ReassignmentReport {
    let reviews = missions
        .iter()
        .filter(|m| m.is_urgent())
        .map(|m| review_mission(pilots, m))
        .collect();
    ReassignmentReport::new(reviews)
}

/// Load the roster and missions and review urgent assignments.
pub async fn suggest_reassignments<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<ReassignmentReport> {
    let pilots = services::load_pilots(repo).await?;
    let missions = services::load_missions(repo).await?;
    let report = review_urgent_missions(&pilots, &missions);
    debug!("Reviewed {} urgent missions", report.reviews.len());
    Ok(report)
}
