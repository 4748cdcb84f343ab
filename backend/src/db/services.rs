//! Service layer for table access.
//!
//! These functions sit between the repository traits and the business rules.
//! They load fresh typed snapshots and perform the single roster write the
//! dashboard supports. Everything here works with any [`FullRepository`].

use log::{debug, info};
use serde::de::DeserializeOwned;

use super::models::{CellRef, Table};
use super::repository::{FullRepository, RepositoryResult};
use crate::models::{decode_records, Drone, Mission, Pilot, PilotStatus};
use crate::routes::dashboard::DashboardData;

/// Column holding the roster's name key.
pub const NAME_COLUMN: &str = "name";
/// Column holding the roster's availability.
pub const STATUS_COLUMN: &str = "status";

/// Check if the repository is healthy and reachable.
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

async fn load_table<R, T>(repo: &R, table: Table) -> RepositoryResult<Vec<T>>
where
    R: FullRepository + ?Sized,
    T: DeserializeOwned,
{
    let records = repo.fetch_records(table).await?;
    debug!("Loaded {} rows from {}", records.len(), table);
    Ok(decode_records(table.label(), records)?)
}

/// Load the pilot roster in sheet order.
pub async fn load_pilots<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<Pilot>> {
    load_table(repo, Table::Roster).await
}

/// Load the drone fleet in sheet order.
pub async fn load_drones<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<Drone>> {
    load_table(repo, Table::Fleet).await
}

/// Load the missions in sheet order.
pub async fn load_missions<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<Mission>> {
    load_table(repo, Table::Missions).await
}

/// Load all three tables.
pub async fn load_dashboard<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<DashboardData> {
    Ok(DashboardData {
        pilots: load_pilots(repo).await?,
        drones: load_drones(repo).await?,
        missions: load_missions(repo).await?,
    })
}

/// Locate a pilot's row in the roster sheet.
///
/// Only the `name` column is searched: an exact match first, then a
/// case-insensitive one.
pub async fn locate_pilot<R: FullRepository + ?Sized>(
    repo: &R,
    name: &str,
) -> RepositoryResult<Option<CellRef>> {
    if let Some(cell) = repo.find_cell(Table::Roster, NAME_COLUMN, name).await? {
        return Ok(Some(cell));
    }
    let roster = repo.fetch_sheet(Table::Roster).await?;
    Ok(roster.find_in_column_ignore_case(NAME_COLUMN, name))
}

/// 1-based position of the roster's `status` column, if it has one.
pub async fn status_column<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<Option<usize>> {
    let roster = repo.fetch_sheet(Table::Roster).await?;
    Ok(roster.column_position(STATUS_COLUMN))
}

/// Overwrite a roster status cell.
pub async fn set_pilot_status<R: FullRepository + ?Sized>(
    repo: &R,
    cell: CellRef,
    status: &PilotStatus,
) -> RepositoryResult<()> {
    repo.update_cell(Table::Roster, cell, status.as_str()).await?;
    info!("Set roster cell {} to '{}'", cell, status);
    Ok(())
}
