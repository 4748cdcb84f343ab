//! Assignment conflict checker.

use log::debug;

use crate::db::repository::{FullRepository, RepositoryResult};
use crate::db::services;
use crate::models::{Mission, Pilot};
use crate::routes::conflicts::{Conflict, ConflictReport};
use crate::routes::reassignment::FitnessIssue;
use crate::services::matching::{find_pilot, requirement_issues};

/// Conflicts for every assigned mission, in mission order.
///
/// Unassigned missions are skipped. An unresolved pilot name is a single
/// conflict and stops further checks for that mission.
pub fn find_conflicts(pilots: &[Pilot], missions: &[Mission]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    for mission in missions {
        let Some(name) = mission.assigned_pilot.as_deref() else {
            continue;
        };
        let project_id = mission.project_id.clone();

        let Some(pilot) = find_pilot(pilots, name) else {
            conflicts.push(Conflict::PilotNotFound {
                project_id,
                pilot: name.to_string(),
            });
            continue;
        };

        for issue in requirement_issues(pilot, mission) {
            let conflict = match issue {
                FitnessIssue::LocationMismatch => Conflict::LocationMismatch {
                    project_id: project_id.clone(),
                    pilot: pilot.name.clone(),
                    pilot_location: pilot.location.clone(),
                    mission_location: mission.location.clone(),
                },
                FitnessIssue::MissingSkill => Conflict::SkillMismatch {
                    project_id: project_id.clone(),
                    pilot: pilot.name.clone(),
                    required_skill: mission.required_skills.clone(),
                },
                FitnessIssue::MissingCertification => Conflict::CertificationMismatch {
                    project_id: project_id.clone(),
                    pilot: pilot.name.clone(),
                    required_cert: mission.required_certs.clone(),
                },
                // Availability is not an assignment conflict.
                FitnessIssue::NotAvailable => continue,
            };
            conflicts.push(conflict);
        }
    }
    conflicts
}

/// Load the roster and missions and check every assignment.
pub async fn check_conflicts<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<ConflictReport> {
    let pilots = services::load_pilots(repo).await?;
    let missions = services::load_missions(repo).await?;
    let conflicts = find_conflicts(&pilots, &missions);
    debug!(
        "Conflict check over {} missions found {} conflicts",
        missions.len(),
        conflicts.len()
    );
    Ok(ConflictReport::new(conflicts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PilotStatus, Priority};

    fn pilots() -> Vec<Pilot> {
        vec![
            Pilot::new("Arjun", PilotStatus::Available, "Bangalore", "Mapping", "DGCA"),
            Pilot::new("Neha", PilotStatus::OnLeave, "Mumbai", "Thermal", "DGCA, Night Ops"),
        ]
    }

    #[test]
    fn test_skill_mismatch_only() {
        let missions =
            vec![Mission::new("PRJ001", "Bangalore", "Thermal", "DGCA", Priority::Urgent).assigned_to("Arjun")];
        let conflicts = find_conflicts(&pilots(), &missions);
        assert_eq!(
            conflicts,
            vec![Conflict::SkillMismatch {
                project_id: "PRJ001".to_string(),
                pilot: "Arjun".to_string(),
                required_skill: "Thermal".to_string(),
            }]
        );
    }

    #[test]
    fn test_multiple_conflicts_per_mission_in_order() {
        let missions = vec![
            Mission::new("PRJ002", "Pune", "Survey", "RPAS", Priority::from("High")).assigned_to("Arjun"),
        ];
        let kinds: Vec<_> = find_conflicts(&pilots(), &missions)
            .into_iter()
            .map(|c| match c {
                Conflict::LocationMismatch { .. } => "location",
                Conflict::SkillMismatch { .. } => "skill",
                Conflict::CertificationMismatch { .. } => "cert",
                Conflict::PilotNotFound { .. } => "missing",
            })
            .collect();
        assert_eq!(kinds, vec!["location", "skill", "cert"]);
    }

    #[test]
    fn test_missing_pilot_stops_checks() {
        let missions =
            vec![Mission::new("PRJ003", "Pune", "Survey", "RPAS", Priority::Urgent).assigned_to("Ghost")];
        let conflicts = find_conflicts(&pilots(), &missions);
        assert_eq!(conflicts.len(), 1);
        assert!(matches!(conflicts[0], Conflict::PilotNotFound { .. }));
    }

    #[test]
    fn test_unassigned_and_unavailable_are_not_conflicts() {
        let missions = vec![
            Mission::new("PRJ004", "Pune", "Survey", "RPAS", Priority::Urgent),
            Mission::new("PRJ005", "Mumbai", "Thermal", "Night Ops", Priority::Urgent).assigned_to("Neha"),
        ];
        let report = ConflictReport::new(find_conflicts(&pilots(), &missions));
        assert!(!report.has_conflicts());
        assert_eq!(
            report.notices[0].message,
            "No conflicts detected. All assignments look good."
        );
    }
}
