//! In-memory local repository implementation.
//!
//! This module provides a local implementation of all repository traits
//! suitable for unit testing and local development. Sheets live in a
//! `HashMap` behind a lock, providing fast, deterministic, and isolated
//! execution.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::db::models::{CellRef, Sheet, Table};
use crate::db::repository::*;

/// In-memory local repository.
///
/// # Example
/// ```
/// use skylark_ops::db::models::{Sheet, Table};
/// use skylark_ops::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::new();
/// repo.load_sheet(
///     Table::Roster,
///     Sheet::new(["name", "status", "location"]).with_row(["Arjun", "Available", "Bangalore"]),
/// );
/// assert_eq!(repo.sheet_count(), 1);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    sheets: HashMap<Table, Sheet>,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            sheets: HashMap::new(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Create a repository pre-populated with the three dashboard sheets.
    pub fn with_sheets(roster: Sheet, fleet: Sheet, missions: Sheet) -> Self {
        let repo = Self::new();
        repo.load_sheet(Table::Roster, roster);
        repo.load_sheet(Table::Fleet, fleet);
        repo.load_sheet(Table::Missions, missions);
        repo
    }

    /// Insert or replace a sheet.
    pub fn load_sheet(&self, table: Table, sheet: Sheet) {
        self.data.write().sheets.insert(table, sheet);
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Get the number of sheets stored.
    pub fn sheet_count(&self) -> usize {
        self.data.read().sheets.len()
    }

    /// Snapshot of a stored sheet, bypassing the health check.
    pub fn sheet(&self, table: Table) -> Option<Sheet> {
        self.data.read().sheets.get(&table).cloned()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self, operation: &str) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection("Local store is not healthy")
                .with_operation(operation));
        }
        Ok(())
    }

    fn missing_sheet(table: Table, operation: &str) -> RepositoryError {
        RepositoryError::not_found_with_context(
            format!("Sheet '{}' not found", table),
            ErrorContext::new(operation).with_sheet(table.default_sheet_name()),
        )
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TableRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn fetch_sheet(&self, table: Table) -> RepositoryResult<Sheet> {
        self.check_health("fetch_sheet")?;
        self.data
            .read()
            .sheets
            .get(&table)
            .cloned()
            .ok_or_else(|| Self::missing_sheet(table, "fetch_sheet"))
    }
}

#[async_trait]
impl CellRepository for LocalRepository {
    async fn find_cell(
        &self,
        table: Table,
        column: &str,
        value: &str,
    ) -> RepositoryResult<Option<CellRef>> {
        self.check_health("find_cell")?;
        let data = self.data.read();
        let sheet = data
            .sheets
            .get(&table)
            .ok_or_else(|| Self::missing_sheet(table, "find_cell"))?;
        Ok(sheet.find_in_column(column, value))
    }

    async fn update_cell(&self, table: Table, cell: CellRef, value: &str) -> RepositoryResult<()> {
        self.check_health("update_cell")?;
        let mut data = self.data.write();
        let sheet = data
            .sheets
            .get_mut(&table)
            .ok_or_else(|| Self::missing_sheet(table, "update_cell"))?;
        sheet.set(
            cell,
            Value::String(value.to_string()),
            table.default_sheet_name(),
        )
    }
}
