use serde::{Deserialize, Serialize};

use super::cell::cell_text;
use crate::db::models::Record;

/// A row of the drone fleet sheet. Display only: every column is kept as stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    #[serde(flatten)]
    pub attributes: Record,
}

impl Drone {
    /// The `drone_id` column, if present.
    pub fn drone_id(&self) -> Option<String> {
        self.attributes.get("drone_id").map(cell_text)
    }
}
