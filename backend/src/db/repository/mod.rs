//! Repository trait definitions for the spreadsheet-backed tables.
//!
//! The dashboard reads three tables and writes a single cell. Those two
//! concerns are split across focused traits so that read-only consumers do not
//! have to know about writes.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`tables`]: Whole-sheet reads (roster, fleet, missions)
//! - [`cells`]: Cell lookup and point updates
//!
//! # Convenience Trait Bound
//!
//! For functions that need both capabilities, use the [`FullRepository`] trait bound:
//!
//! ```ignore
//! async fn my_service<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<()> {
//!     let roster = repo.fetch_sheet(Table::Roster).await?;
//!     if let Some(cell) = repo.find_cell(Table::Roster, "name", "Arjun").await? {
//!         repo.update_cell(Table::Roster, cell, "Arjun").await?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod cells;
pub mod error;
pub mod tables;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

pub use cells::CellRepository;
pub use tables::TableRepository;

/// Composite trait bound for a complete repository implementation.
///
/// Automatically implemented for any type that implements both
/// [`TableRepository`] and [`CellRepository`].
pub trait FullRepository: TableRepository + CellRepository {}

impl<T> FullRepository for T where T: TableRepository + CellRepository {}
