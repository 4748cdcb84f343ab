//! Pilot/mission predicates shared by the conflict checker, the reassignment
//! advisor and the availability query.

use crate::models::{Mission, Pilot};
use crate::routes::reassignment::FitnessIssue;

/// First pilot whose name equals `name` exactly.
pub fn find_pilot<'a>(pilots: &'a [Pilot], name: &str) -> Option<&'a Pilot> {
    pilots.iter().find(|p| p.name == name)
}

/// Location, skill and certification checks, in that order.
pub fn requirement_issues(pilot: &Pilot, mission: &Mission) -> Vec<FitnessIssue> {
    let mut issues = Vec::new();
    if pilot.location != mission.location {
        issues.push(FitnessIssue::LocationMismatch);
    }
    if !pilot.has_skill(&mission.required_skills) {
        issues.push(FitnessIssue::MissingSkill);
    }
    if !pilot.has_certification(&mission.required_certs) {
        issues.push(FitnessIssue::MissingCertification);
    }
    issues
}

/// Every reason `pilot` cannot fly `mission`: availability first, then the
/// requirement checks.
pub fn assess(pilot: &Pilot, mission: &Mission) -> Vec<FitnessIssue> {
    let mut issues = Vec::new();
    if !pilot.is_available() {
        issues.push(FitnessIssue::NotAvailable);
    }
    issues.extend(requirement_issues(pilot, mission));
    issues
}

pub fn is_fit(pilot: &Pilot, mission: &Mission) -> bool {
    assess(pilot, mission).is_empty()
}

/// Roster pilots passing every check for `mission`, in roster order.
pub fn alternatives<'a>(pilots: &'a [Pilot], mission: &Mission) -> Vec<&'a Pilot> {
    pilots.iter().filter(|p| is_fit(p, mission)).collect()
}

/// Available pilots whose location equals `location` exactly, in roster order.
pub fn available_in<'a>(pilots: &'a [Pilot], location: &str) -> Vec<&'a Pilot> {
    pilots
        .iter()
        .filter(|p| p.is_available() && p.location == location)
        .collect()
}
