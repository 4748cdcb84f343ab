use serde::{Deserialize, Serialize};

use crate::api::Notice;
use crate::models::Pilot;

/// What the operator sees after submitting a text command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandReport {
    /// The command as typed.
    pub command: String,
    pub notices: Vec<Notice>,
    /// Pilot table for queries that return one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pilots: Option<Vec<Pilot>>,
}

impl CommandReport {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            notices: Vec::new(),
            pilots: None,
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notices.push(notice);
        self
    }

    pub fn with_pilots(mut self, pilots: Vec<Pilot>) -> Self {
        self.pilots = Some(pilots);
        self
    }
}

pub const POST_COMMAND: &str = "/commands";
