//! Data access for the three dashboard tables.
//!
//! This module provides abstractions for spreadsheet access via the Repository
//! pattern, allowing different storage backends to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (business rules, REST API)           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                            │
//! │  - Typed table snapshots                                │
//! │  - Roster lookups and the status write                  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴───────────────┐
//!     │                               │
//! ┌───▼───────────────┐   ┌───────────▼───────────┐
//! │ Local Repository  │   │ Workbook Repository   │
//! │   (in-memory)     │   │ (directory of sheets) │
//! └───────────────────┘   └───────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! ```no_run
//! use skylark_ops::db::{services, RepositoryFactory};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = RepositoryFactory::from_default_config()?;
//!     let pilots = services::load_pilots(repo.as_ref()).await?;
//!     println!("{} pilots on the roster", pilots.len());
//!     Ok(())
//! }
//! ```
//!
//! There is no process-wide repository: callers create one through the
//! factory and pass it down explicitly.

pub mod factory;
pub mod models;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;

// ==================== Service Layer ====================

pub use services::{
    health_check, load_dashboard, load_drones, load_missions, load_pilots, locate_pilot,
    set_pilot_status, status_column,
};

// ==================== Repository Pattern Exports ====================

pub use repo_config::RepositoryConfig;

pub use factory::{RepositoryBuilder, RepositoryFactory, RepositoryType};
pub use repositories::{LocalRepository, SheetNames, WorkbookConfig, WorkbookRepository};
pub use repository::{
    CellRepository, ErrorContext, FullRepository, RepositoryError, RepositoryResult,
    TableRepository,
};
