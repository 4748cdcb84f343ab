//! Directory-of-sheets workbook repository.
//!
//! Each table is stored as `<directory>/<sheet_name>.json`:
//!
//! ```json
//! { "header": ["name", "status", "location"], "rows": [["Arjun", "Available", "Bangalore"]] }
//! ```
//!
//! Sheets are re-read on every call and a cell update rewrites the whole file
//! through a temporary sibling followed by a rename.

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;
use std::path::{Path, PathBuf};

use crate::db::models::{CellRef, Sheet, Table};
use crate::db::repository::*;

/// Sheet names for the three tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetNames {
    pub roster: String,
    pub fleet: String,
    pub missions: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        Self {
            roster: Table::Roster.default_sheet_name().to_string(),
            fleet: Table::Fleet.default_sheet_name().to_string(),
            missions: Table::Missions.default_sheet_name().to_string(),
        }
    }
}

impl SheetNames {
    pub fn get(&self, table: Table) -> &str {
        match table {
            Table::Roster => &self.roster,
            Table::Fleet => &self.fleet,
            Table::Missions => &self.missions,
        }
    }
}

/// Workbook location and sheet naming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbookConfig {
    pub directory: PathBuf,
    pub sheet_names: SheetNames,
}

impl WorkbookConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            sheet_names: SheetNames::default(),
        }
    }

    /// Load the workbook location from environment variables.
    ///
    /// # Environment Variables
    /// - `WORKBOOK_DIR` (required): directory holding the sheet files
    /// - `ROSTER_SHEET` (optional, default: `pilot_roster`)
    /// - `FLEET_SHEET` (optional, default: `drone_fleet`)
    /// - `MISSIONS_SHEET` (optional, default: `missions`)
    pub fn from_env() -> Result<Self, String> {
        let directory = env::var("WORKBOOK_DIR")
            .map_err(|_| "WORKBOOK_DIR environment variable not set".to_string())?;
        let defaults = SheetNames::default();
        Ok(Self {
            directory: PathBuf::from(directory),
            sheet_names: SheetNames {
                roster: env::var("ROSTER_SHEET").unwrap_or(defaults.roster),
                fleet: env::var("FLEET_SHEET").unwrap_or(defaults.fleet),
                missions: env::var("MISSIONS_SHEET").unwrap_or(defaults.missions),
            },
        })
    }
}

/// Repository backed by a directory of JSON sheet files.
#[derive(Debug, Clone)]
pub struct WorkbookRepository {
    config: WorkbookConfig,
}

impl WorkbookRepository {
    /// Open a workbook directory. The directory must already exist.
    pub fn open(config: WorkbookConfig) -> RepositoryResult<Self> {
        if !config.directory.is_dir() {
            return Err(RepositoryError::configuration(format!(
                "Workbook directory '{}' does not exist",
                config.directory.display()
            )));
        }
        Ok(Self { config })
    }

    pub fn directory(&self) -> &Path {
        &self.config.directory
    }

    fn sheet_name(&self, table: Table) -> &str {
        self.config.sheet_names.get(table)
    }

    fn sheet_path(&self, table: Table) -> PathBuf {
        self.config
            .directory
            .join(format!("{}.json", self.sheet_name(table)))
    }

    fn context(&self, operation: &str, table: Table) -> ErrorContext {
        ErrorContext::new(operation).with_sheet(self.sheet_name(table))
    }

    async fn read_sheet(&self, table: Table, operation: &str) -> RepositoryResult<Sheet> {
        let path = self.sheet_path(table);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RepositoryError::not_found_with_context(
                    format!("Sheet '{}' not found", self.sheet_name(table)),
                    self.context(operation, table)
                        .with_details(path.display().to_string()),
                ));
            }
            Err(e) => {
                return Err(RepositoryError::io_with_context(
                    e.to_string(),
                    self.context(operation, table),
                ));
            }
        };

        let sheet: Sheet = serde_json::from_str(&content).map_err(|e| {
            RepositoryError::SerializationError {
                message: format!("Malformed sheet file: {}", e),
                context: self.context(operation, table),
            }
        })?;
        debug!(
            "Read sheet '{}' ({} rows) from {}",
            self.sheet_name(table),
            sheet.len(),
            path.display()
        );
        Ok(sheet)
    }

    /// Write a complete sheet, replacing the stored file.
    pub async fn store_sheet(&self, table: Table, sheet: &Sheet) -> RepositoryResult<()> {
        let path = self.sheet_path(table);
        let tmp = path.with_extension("json.tmp");
        let body = serde_json::to_string_pretty(sheet)?;

        tokio::fs::write(&tmp, body).await.map_err(|e| {
            RepositoryError::io_with_context(e.to_string(), self.context("store_sheet", table))
        })?;
        tokio::fs::rename(&tmp, &path).await.map_err(|e| {
            RepositoryError::io_with_context(e.to_string(), self.context("store_sheet", table))
        })?;
        debug!("Wrote sheet '{}' to {}", self.sheet_name(table), path.display());
        Ok(())
    }
}

#[async_trait]
impl TableRepository for WorkbookRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(tokio::fs::metadata(&self.config.directory)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false))
    }

    async fn fetch_sheet(&self, table: Table) -> RepositoryResult<Sheet> {
        self.read_sheet(table, "fetch_sheet").await
    }
}

#[async_trait]
impl CellRepository for WorkbookRepository {
    async fn find_cell(
        &self,
        table: Table,
        column: &str,
        value: &str,
    ) -> RepositoryResult<Option<CellRef>> {
        Ok(self
            .read_sheet(table, "find_cell")
            .await?
            .find_in_column(column, value))
    }

    async fn update_cell(&self, table: Table, cell: CellRef, value: &str) -> RepositoryResult<()> {
        let mut sheet = self.read_sheet(table, "update_cell").await?;
        sheet.set(
            cell,
            Value::String(value.to_string()),
            self.sheet_name(table),
        )?;
        self.store_sheet(table, &sheet).await
    }
}
