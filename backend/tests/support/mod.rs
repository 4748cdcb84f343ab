#![allow(dead_code)]

use skylark_ops::db::models::Sheet;
use skylark_ops::db::repositories::LocalRepository;
use std::collections::HashSet;
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

pub const ROSTER_HEADER: [&str; 6] = [
    "pilot_id",
    "name",
    "skills",
    "certifications",
    "location",
    "status",
];

pub const MISSION_HEADER: [&str; 7] = [
    "project_id",
    "client",
    "location",
    "required_skills",
    "required_certs",
    "priority",
    "assigned_pilot",
];

/// A roster sheet with one row per pilot: (id, name, skills, certs, location, status).
pub fn roster(rows: &[[&str; 6]]) -> Sheet {
    rows.iter()
        .fold(Sheet::new(ROSTER_HEADER), |sheet, row| sheet.with_row(*row))
}

/// A missions sheet: (id, client, location, skill, cert, priority, pilot).
pub fn missions(rows: &[[&str; 7]]) -> Sheet {
    rows.iter()
        .fold(Sheet::new(MISSION_HEADER), |sheet, row| sheet.with_row(*row))
}

pub fn fleet() -> Sheet {
    Sheet::new(["drone_id", "model", "status", "location"])
        .with_row(["D001", "DJI M300", "Available", "Bangalore"])
        .with_row(["D002", "DJI Mavic 3T", "Maintenance", "Mumbai"])
}

/// The in-memory repository most scenarios start from.
pub fn operations_repository() -> LocalRepository {
    LocalRepository::with_sheets(
        roster(&[
            ["P001", "Arjun", "Mapping", "DGCA", "Bangalore", "Available"],
            ["P002", "Neha", "Thermal, Inspection", "DGCA, Night Ops", "Bangalore", "Available"],
            ["P003", "Rohit", "Thermal", "DGCA", "Mumbai", "On Leave"],
            ["P004", "Sneha", "Survey", "RPAS", "Pune", "Available"],
        ]),
        fleet(),
        missions(&[
            ["PRJ001", "Client A", "Bangalore", "Thermal", "DGCA", "Urgent", "Arjun"],
            ["PRJ002", "Client B", "Mumbai", "Thermal", "DGCA", "High", "Rohit"],
            ["PRJ003", "Client C", "Pune", "Survey", "RPAS", "Urgent", "Sneha"],
            ["PRJ004", "Client D", "Chennai", "Mapping", "DGCA", "Urgent", ""],
        ]),
    )
}
