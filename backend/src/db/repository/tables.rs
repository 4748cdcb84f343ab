//! Whole-sheet read operations.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::db::models::{Record, Sheet, Table};

/// Repository trait for reading the roster, fleet and missions sheets.
///
/// Every call goes to the backing store; implementations must not cache, since
/// the store is the single source of truth re-read on each interaction.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait TableRepository: Send + Sync {
    /// Check if the backing store is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if the store is healthy
    /// - `Ok(false)` if the store is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Fetch a complete sheet, header included.
    ///
    /// # Returns
    /// * `Ok(Sheet)` - The sheet as currently stored
    /// * `Err(RepositoryError::NotFound)` - If the sheet doesn't exist
    async fn fetch_sheet(&self, table: Table) -> RepositoryResult<Sheet>;

    /// Fetch the data rows of a sheet as header-keyed records, in sheet order.
    async fn fetch_records(&self, table: Table) -> RepositoryResult<Vec<Record>> {
        Ok(self.fetch_sheet(table).await?.records())
    }
}
