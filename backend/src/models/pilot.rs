use serde::{Deserialize, Serialize};

use super::cell;
use crate::db::models::Record;
use crate::define_cell_enum;

define_cell_enum!(
    /// Pilot availability as written in the roster's `status` column.
    PilotStatus {
        Available => "Available",
        OnLeave => "On Leave",
    }
);

/// A row of the pilot roster.
///
/// Columns other than the five the dashboard reasons about are kept in
/// `extra` so the roster table renders exactly as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pilot {
    #[serde(default, deserialize_with = "cell::text")]
    pub name: String,
    #[serde(default)]
    pub status: PilotStatus,
    #[serde(default, deserialize_with = "cell::text")]
    pub location: String,
    #[serde(default, deserialize_with = "cell::text")]
    pub skills: String,
    #[serde(default, deserialize_with = "cell::text")]
    pub certifications: String,
    #[serde(flatten)]
    pub extra: Record,
}

impl Pilot {
    pub fn new(
        name: impl Into<String>,
        status: PilotStatus,
        location: impl Into<String>,
        skills: impl Into<String>,
        certifications: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            status,
            location: location.into(),
            skills: skills.into(),
            certifications: certifications.into(),
            extra: Record::new(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == PilotStatus::Available
    }

    /// Substring containment against the free-text skills column.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.contains(skill)
    }

    /// Substring containment against the free-text certifications column.
    pub fn has_certification(&self, certification: &str) -> bool {
        self.certifications.contains(certification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_from_cell_text() {
        assert_eq!(PilotStatus::from("Available"), PilotStatus::Available);
        assert_eq!(PilotStatus::from("On Leave"), PilotStatus::OnLeave);
        assert_eq!(
            PilotStatus::from("available"),
            PilotStatus::Other("available".to_string())
        );
        assert_eq!(PilotStatus::OnLeave.to_string(), "On Leave");
    }

    #[test]
    fn test_decode_roster_row() {
        let pilot: Pilot = serde_json::from_value(json!({
            "pilot_id": "P001",
            "name": "Arjun",
            "status": "Available",
            "location": "Bangalore",
            "skills": "Mapping, Thermal",
            "certifications": "DGCA, Night Ops",
            "experience_years": 6
        }))
        .unwrap();

        assert_eq!(pilot.name, "Arjun");
        assert!(pilot.is_available());
        assert!(pilot.has_skill("Thermal"));
        assert!(!pilot.has_skill("thermal"));
        assert!(pilot.has_certification("Night Ops"));
        assert_eq!(pilot.extra["pilot_id"], json!("P001"));
        assert_eq!(pilot.extra["experience_years"], json!(6));
    }

    #[test]
    fn test_decode_missing_columns_default_to_empty() {
        let pilot: Pilot = serde_json::from_value(json!({"name": "Neha"})).unwrap();
        assert_eq!(pilot.location, "");
        assert_eq!(pilot.status, PilotStatus::Other(String::new()));
        assert!(!pilot.is_available());
        // An empty requirement is contained in every string.
        assert!(pilot.has_skill(""));
    }

    #[test]
    fn test_serialize_keeps_extra_columns() {
        let mut pilot = Pilot::new("Arjun", PilotStatus::OnLeave, "Bangalore", "Thermal", "RPAS");
        pilot.extra.insert("pilot_id".to_string(), json!("P001"));
        let value = serde_json::to_value(&pilot).unwrap();
        assert_eq!(value["status"], json!("On Leave"));
        assert_eq!(value["pilot_id"], json!("P001"));
    }
}
