//! Repository factory for dependency injection.
//!
//! This module provides utilities for creating and configuring repository instances
//! based on runtime configuration.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use log::info;

use super::repo_config::RepositoryConfig;
use super::repositories::{LocalRepository, WorkbookConfig, WorkbookRepository};
use super::repository::{FullRepository, RepositoryError, RepositoryResult};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// Directory of sheet files
    Workbook,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("workbook", "local")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "workbook" | "sheets" | "spreadsheet" => Ok(Self::Workbook),
            "local" | "memory" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment variable.
    ///
    /// Reads `REPOSITORY_TYPE`. Defaults to Workbook if `WORKBOOK_DIR` is
    /// present, otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("REPOSITORY_TYPE") {
            return val.parse().unwrap_or(Self::Local);
        }

        if std::env::var("WORKBOOK_DIR").is_ok() {
            Self::Workbook
        } else {
            Self::Local
        }
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```no_run
/// use skylark_ops::db::{RepositoryFactory, RepositoryType, WorkbookConfig};
///
/// let config = WorkbookConfig::new("data");
/// let repo = RepositoryFactory::create(RepositoryType::Workbook, Some(&config))?;
/// let local = RepositoryFactory::create_local();
/// # Ok::<(), skylark_ops::db::RepositoryError>(())
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// # Arguments
    /// * `repo_type` - Type of repository to create
    /// * `workbook_config` - Workbook location (required for Workbook)
    pub fn create(
        repo_type: RepositoryType,
        workbook_config: Option<&WorkbookConfig>,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        match repo_type {
            RepositoryType::Workbook => {
                let config = workbook_config.ok_or_else(|| {
                    RepositoryError::configuration(
                        "Workbook repository requires a workbook directory",
                    )
                })?;
                let repo = Self::create_workbook(config)?;
                Ok(repo as Arc<dyn FullRepository>)
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Open a workbook repository.
    pub fn create_workbook(config: &WorkbookConfig) -> RepositoryResult<Arc<WorkbookRepository>> {
        let repo = WorkbookRepository::open(config.clone())?;
        info!("Opened workbook at {}", repo.directory().display());
        Ok(Arc::new(repo))
    }

    /// Create an empty in-memory local repository.
    pub fn create_local() -> Arc<dyn FullRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create repository from environment configuration.
    ///
    /// Reads `REPOSITORY_TYPE` to determine which repository to create and
    /// `WORKBOOK_DIR` for the workbook location.
    pub fn from_env() -> RepositoryResult<Arc<dyn FullRepository>> {
        match RepositoryType::from_env() {
            RepositoryType::Workbook => {
                let config = WorkbookConfig::from_env().map_err(RepositoryError::configuration)?;
                let repo = Self::create_workbook(&config)?;
                Ok(repo as Arc<dyn FullRepository>)
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create repository from a TOML configuration file.
    pub fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        let config = RepositoryConfig::from_file(config_path)?;
        Self::from_repository_config(&config)
    }

    /// Create repository from the default configuration file location.
    ///
    /// Searches for `repository.toml` in standard locations.
    pub fn from_default_config() -> RepositoryResult<Arc<dyn FullRepository>> {
        let config = RepositoryConfig::from_default_location()?;
        Self::from_repository_config(&config)
    }

    /// Create repository from a RepositoryConfig instance.
    pub fn from_repository_config(
        config: &RepositoryConfig,
    ) -> RepositoryResult<Arc<dyn FullRepository>> {
        let repo_type = config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;
        let workbook = config.to_workbook_config()?;
        Self::create(repo_type, workbook.as_ref())
    }
}

/// Builder for configuring repository creation.
///
/// # Example
/// ```no_run
/// use skylark_ops::db::{RepositoryBuilder, RepositoryType, WorkbookConfig};
///
/// let repo = RepositoryBuilder::new()
///     .repository_type(RepositoryType::Workbook)
///     .workbook_config(WorkbookConfig::new("data"))
///     .build()?;
/// # Ok::<(), skylark_ops::db::RepositoryError>(())
/// ```
pub struct RepositoryBuilder {
    repo_type: RepositoryType,
    workbook_config: Option<WorkbookConfig>,
}

impl RepositoryBuilder {
    /// Create a new repository builder with default settings.
    ///
    /// Defaults to Workbook if `WORKBOOK_DIR` is set, otherwise Local.
    pub fn new() -> Self {
        Self {
            repo_type: RepositoryType::from_env(),
            workbook_config: None,
        }
    }

    /// Set the repository type.
    pub fn repository_type(mut self, repo_type: RepositoryType) -> Self {
        self.repo_type = repo_type;
        self
    }

    /// Set the workbook configuration.
    pub fn workbook_config(mut self, config: WorkbookConfig) -> Self {
        self.workbook_config = Some(config);
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, RepositoryError> {
        self.repo_type = RepositoryType::from_env();

        if self.repo_type == RepositoryType::Workbook {
            let config = WorkbookConfig::from_env().map_err(RepositoryError::configuration)?;
            self.workbook_config = Some(config);
        }

        Ok(self)
    }

    /// Load configuration from a TOML file.
    pub fn from_config_file<P: AsRef<Path>>(
        mut self,
        config_path: P,
    ) -> Result<Self, RepositoryError> {
        let repo_config = RepositoryConfig::from_file(config_path)?;

        self.repo_type = repo_config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;
        self.workbook_config = repo_config.to_workbook_config()?;

        Ok(self)
    }

    /// Build the repository instance.
    pub fn build(self) -> RepositoryResult<Arc<dyn FullRepository>> {
        RepositoryFactory::create(self.repo_type, self.workbook_config.as_ref())
    }
}

impl Default for RepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
