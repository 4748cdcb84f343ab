//! Route-specific data types.
//!
//! Each module holds the DTOs one dashboard panel renders, together with the
//! path it is served under (relative to `/v1`).

pub mod commands;
pub mod conflicts;
pub mod dashboard;
pub mod reassignment;

#[cfg(test)]
mod tests {
    #[test]
    fn test_route_paths() {
        assert_eq!(super::dashboard::GET_DASHBOARD, "/dashboard");
        assert_eq!(super::dashboard::GET_PILOTS, "/pilots");
        assert_eq!(super::dashboard::GET_DRONES, "/drones");
        assert_eq!(super::dashboard::GET_MISSIONS, "/missions");
        assert_eq!(super::commands::POST_COMMAND, "/commands");
        assert_eq!(super::conflicts::POST_CHECK_CONFLICTS, "/conflicts/check");
        assert_eq!(
            super::reassignment::POST_URGENT_REASSIGNMENT,
            "/reassignments/urgent"
        );
    }
}
