//! Typed records decoded from the three dashboard sheets.

pub mod cell;
pub mod drone;
pub mod macros;
pub mod mission;
pub mod pilot;

pub use drone::Drone;
pub use mission::{Mission, Priority};
pub use pilot::{Pilot, PilotStatus};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::db::models::Record;

/// Error raised when a sheet row cannot be decoded into a typed record.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("row {row} of sheet '{sheet}' could not be decoded: {source}")]
    Decode {
        sheet: String,
        row: usize,
        source: serde_json::Error,
    },
}

impl ModelError {
    pub fn sheet(&self) -> &str {
        match self {
            ModelError::Decode { sheet, .. } => sheet,
        }
    }
}

/// Decode header-keyed records in sheet order. Row numbers in errors are
/// sheet rows, so the first record is row 2.
pub fn decode_records<T: DeserializeOwned>(
    sheet: &str,
    records: Vec<Record>,
) -> Result<Vec<T>, ModelError> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            serde_json::from_value(Value::Object(record)).map_err(|source| ModelError::Decode {
                sheet: sheet.to_string(),
                row: i + 2,
                source,
            })
        })
        .collect()
}
