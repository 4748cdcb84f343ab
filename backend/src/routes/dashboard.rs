use serde::{Deserialize, Serialize};

use crate::models::{Drone, Mission, Pilot};

/// One fresh read of all three tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardData {
    pub pilots: Vec<Pilot>,
    pub drones: Vec<Drone>,
    pub missions: Vec<Mission>,
}

pub const GET_DASHBOARD: &str = "/dashboard";
pub const GET_PILOTS: &str = "/pilots";
pub const GET_DRONES: &str = "/drones";
pub const GET_MISSIONS: &str = "/missions";
