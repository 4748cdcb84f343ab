//! Service layer for the dashboard's business rules.
//!
//! Each rule has a pure form working on loaded rows and an async form that
//! loads a fresh snapshot from any repository first.

pub mod command;
pub mod conflicts;
pub mod matching;
pub mod reassignment;

pub use command::{interpret, parse_command, Command, CommandError, CommandOutcome};
pub use conflicts::{check_conflicts, find_conflicts};
pub use reassignment::{review_urgent_missions, suggest_reassignments};
