//! Data Transfer Objects for the HTTP API.
//!
//! Report types are re-exported from the routes module since they already
//! derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Commands
    CommandReport,
    // Conflicts
    Conflict, ConflictReport,
    // Dashboard
    DashboardData, Drone, Mission, Notice, NoticeLevel, Pilot,
    // Reassignment
    FitnessIssue, MissionReview, PilotSummary, ReassignmentReport, ReviewOutcome,
};

/// Request body for submitting an operator command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandRequest {
    /// Free-text command, e.g. "show available pilots in Bangalore"
    pub command: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Repository connectivity: "connected", "disconnected" or "error: ..."
    pub repository: String,
}

/// Response for the pilot roster listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PilotListResponse {
    pub pilots: Vec<Pilot>,
    pub total: usize,
}

impl From<Vec<Pilot>> for PilotListResponse {
    fn from(pilots: Vec<Pilot>) -> Self {
        let total = pilots.len();
        Self { pilots, total }
    }
}

/// Response for the drone fleet listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroneListResponse {
    pub drones: Vec<Drone>,
    pub total: usize,
}

impl From<Vec<Drone>> for DroneListResponse {
    fn from(drones: Vec<Drone>) -> Self {
        let total = drones.len();
        Self { drones, total }
    }
}

/// Response for the mission listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionListResponse {
    pub missions: Vec<Mission>,
    pub total: usize,
}

impl From<Vec<Mission>> for MissionListResponse {
    fn from(missions: Vec<Mission>) -> Self {
        let total = missions.len();
        Self { missions, total }
    }
}
