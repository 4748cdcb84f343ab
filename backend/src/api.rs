//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::db::models::{CellRef, Sheet, Table};
pub use crate::models::{Drone, Mission, Pilot, PilotStatus, Priority};
pub use crate::routes::commands::CommandReport;
pub use crate::routes::conflicts::{Conflict, ConflictReport};
pub use crate::routes::dashboard::DashboardData;
pub use crate::routes::reassignment::{
    FitnessIssue, MissionReview, PilotSummary, ReassignmentReport, ReviewOutcome,
};

use serde::{Deserialize, Serialize};

/// Category of a user-facing notice.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A categorized message for the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_serialization() {
        let json = serde_json::to_value(Notice::warning("Pilot location mismatch")).unwrap();
        assert_eq!(json["level"], "warning");
        assert_eq!(json["message"], "Pilot location mismatch");
    }

    #[test]
    fn test_notice_constructors() {
        assert_eq!(Notice::info("x").level, NoticeLevel::Info);
        assert_eq!(Notice::success("x").level, NoticeLevel::Success);
        assert!(Notice::error("x").is_error());
        assert!(!Notice::warning("x").is_error());
    }
}
