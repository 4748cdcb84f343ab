//! Repository configuration file support.
//!
//! This module provides utilities for reading repository configuration from
//! TOML configuration files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::RepositoryType;
use super::models::Table;
use super::repositories::{SheetNames, WorkbookConfig};
use super::repository::RepositoryError;

/// Repository configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub workbook: WorkbookSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// Workbook location and sheet names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkbookSettings {
    #[serde(default)]
    pub directory: String,
    #[serde(default = "default_roster_sheet")]
    pub roster_sheet: String,
    #[serde(default = "default_fleet_sheet")]
    pub fleet_sheet: String,
    #[serde(default = "default_missions_sheet")]
    pub missions_sheet: String,
}

impl Default for WorkbookSettings {
    fn default() -> Self {
        Self {
            directory: String::new(),
            roster_sheet: default_roster_sheet(),
            fleet_sheet: default_fleet_sheet(),
            missions_sheet: default_missions_sheet(),
        }
    }
}

fn default_roster_sheet() -> String {
    Table::Roster.default_sheet_name().to_string()
}

fn default_fleet_sheet() -> String {
    Table::Fleet.default_sheet_name().to_string()
}

fn default_missions_sheet() -> String {
    Table::Missions.default_sheet_name().to_string()
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    ///
    /// A relative `workbook.directory` is resolved against the directory
    /// containing the configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let mut config: RepositoryConfig = toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        if !config.workbook.directory.is_empty() && Path::new(&config.workbook.directory).is_relative()
        {
            if let Some(parent) = path.parent() {
                config.workbook.directory = parent
                    .join(&config.workbook.directory)
                    .to_string_lossy()
                    .into_owned();
            }
        }

        Ok(config)
    }

    /// Load repository configuration from the default location.
    ///
    /// Searches for `repository.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        let search_paths = vec![
            PathBuf::from("repository.toml"),
            PathBuf::from("backend/repository.toml"),
            PathBuf::from("../repository.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(RepositoryError::configuration(
            "No repository.toml found in standard locations",
        ))
    }

    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repository.repo_type)
    }

    /// Convert to WorkbookConfig if this is a workbook configuration.
    pub fn to_workbook_config(&self) -> Result<Option<WorkbookConfig>, RepositoryError> {
        let repo_type = self.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        if repo_type != RepositoryType::Workbook {
            return Ok(None);
        }

        if self.workbook.directory.is_empty() {
            return Err(RepositoryError::configuration(
                "Workbook repository requires 'workbook.directory' setting",
            ));
        }

        Ok(Some(WorkbookConfig {
            directory: PathBuf::from(&self.workbook.directory),
            sheet_names: SheetNames {
                roster: self.workbook.roster_sheet.clone(),
                fleet: self.workbook.fleet_sheet.clone(),
                missions: self.workbook.missions_sheet.clone(),
            },
        }))
    }
}
