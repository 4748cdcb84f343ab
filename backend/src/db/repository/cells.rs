//! Cell lookup and point updates.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::db::models::{CellRef, Table};

/// Repository trait for locating and overwriting single cells.
#[async_trait]
pub trait CellRepository: Send + Sync {
    /// Locate the first data cell in `column` whose text equals `value` exactly.
    ///
    /// # Returns
    /// * `Ok(Some(CellRef))` - Coordinate of the match (header is row 1)
    /// * `Ok(None)` - If no cell matches or the column does not exist
    /// * `Err(RepositoryError)` - If the sheet cannot be read
    async fn find_cell(
        &self,
        table: Table,
        column: &str,
        value: &str,
    ) -> RepositoryResult<Option<CellRef>>;

    /// Overwrite one cell with a text value.
    ///
    /// The write is a single cell; there is no transaction and no rollback.
    ///
    /// # Returns
    /// * `Ok(())` - The cell was written
    /// * `Err(RepositoryError::InvalidCell)` - If the coordinate is outside the sheet
    /// * `Err(RepositoryError)` - If the write fails
    async fn update_cell(&self, table: Table, cell: CellRef, value: &str) -> RepositoryResult<()>;
}
