//! Free-text command interpreter.
//!
//! Two intents are recognized, checked in order:
//!
//! - `... available pilots ... in <location>` lists available pilots at a location
//! - `<name> on leave` sets a pilot's roster status to "On Leave"
//!
//! Keywords are matched case-insensitively. Parsing and execution are separate
//! steps so that each failure maps to exactly one notice.

use log::{info, warn};

use crate::api::Notice;
use crate::db::models::CellRef;
use crate::db::repository::{FullRepository, RepositoryError};
use crate::db::services;
use crate::models::{Pilot, PilotStatus};
use crate::routes::commands::CommandReport;
use crate::services::matching::available_in;

const AVAILABLE_PILOTS: &str = "available pilots";
const ON_LEAVE: &str = "on leave";

/// A recognized operator command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AvailablePilots { location: String },
    MarkOnLeave { name: String },
}

/// Why a command produced no result.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("command not recognized")]
    NotRecognized,

    #[error("no location given")]
    EmptyLocation,

    #[error("roster could not be loaded: {0}")]
    RosterUnavailable(#[source] RepositoryError),

    #[error("no pilot name given")]
    EmptyName,

    #[error("pilot '{0}' not found in roster")]
    PilotNotFound(String),

    #[error("roster has no status column")]
    StatusColumnMissing,

    #[error("status of '{name}' could not be updated: {source}")]
    StatusUpdate {
        name: String,
        #[source]
        source: RepositoryError,
    },
}

impl CommandError {
    /// The notice shown to the operator for this failure.
    pub fn notice(&self) -> Notice {
        match self {
            CommandError::NotRecognized => {
                Notice::info("Command not recognized. Try another instruction.")
            }
            CommandError::EmptyLocation | CommandError::RosterUnavailable(_) => {
                Notice::error("Could not process location query")
            }
            CommandError::EmptyName | CommandError::PilotNotFound(_) => {
                Notice::error("Pilot name not found. Check spelling.")
            }
            CommandError::StatusColumnMissing => {
                Notice::error("Roster has no status column. Status not updated.")
            }
            CommandError::StatusUpdate { name, .. } => {
                Notice::error(format!("Could not update status for {}", name))
            }
        }
    }
}

/// Result of a successfully executed command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    AvailablePilots { location: String, pilots: Vec<Pilot> },
    MarkedOnLeave { name: String, cell: CellRef },
}

impl CommandOutcome {
    fn into_report(self, report: CommandReport) -> CommandReport {
        match self {
            CommandOutcome::AvailablePilots { location, pilots } if pilots.is_empty() => report
                .with_notice(Notice::warning(format!(
                    "No available pilots found in {}",
                    location
                ))),
            CommandOutcome::AvailablePilots { location, pilots } => report
                .with_notice(Notice::success(format!("Available Pilots in {}", location)))
                .with_pilots(pilots),
            CommandOutcome::MarkedOnLeave { name, .. } => report.with_notice(Notice::success(
                format!("{} marked as On Leave (updated in the roster sheet)", name),
            )),
        }
    }
}

/// Byte offsets where `word` occurs as a whole word, ignoring ASCII case.
fn word_starts(text: &str, word: &str) -> Vec<usize> {
    let bytes = text.as_bytes();
    let len = word.len();
    if len == 0 || bytes.len() < len {
        return Vec::new();
    }
    // A match on ASCII bytes always starts and ends on a char boundary.
    (0..=bytes.len() - len)
        .filter(|&i| bytes[i..i + len].eq_ignore_ascii_case(word.as_bytes()))
        .filter(|&i| !text[..i].chars().next_back().is_some_and(char::is_alphanumeric))
        .filter(|&i| !text[i + len..].chars().next().is_some_and(char::is_alphanumeric))
        .collect()
}

/// Upper-case the first letter of every alphabetic run and lower-case the rest.
///
/// `"new delhi"` becomes `"New Delhi"`, `"o'neil"` becomes `"O'Neil"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if in_word {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        in_word = c.is_alphabetic();
    }
    out
}

/// Recognize a command in free text.
pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    // ASCII folding keeps byte offsets aligned with `input`.
    let folded = input.to_ascii_lowercase();

    if let Some(pos) = folded.find(AVAILABLE_PILOTS) {
        let raw = match word_starts(&folded, "in").last() {
            Some(&i) => &folded[i + 2..],
            None => &folded[pos + AVAILABLE_PILOTS.len()..],
        };
        let location = title_case(raw.trim());
        if location.is_empty() {
            return Err(CommandError::EmptyLocation);
        }
        return Ok(Command::AvailablePilots { location });
    }

    if let Some(&end) = word_starts(&folded, ON_LEAVE).first() {
        let name = input[..end].trim();
        if name.is_empty() {
            return Err(CommandError::EmptyName);
        }
        return Ok(Command::MarkOnLeave {
            name: name.to_string(),
        });
    }

    Err(CommandError::NotRecognized)
}

/// Run a parsed command against a fresh snapshot of the roster.
pub async fn execute<R: FullRepository + ?Sized>(
    repo: &R,
    command: Command,
) -> Result<CommandOutcome, CommandError> {
    match command {
        Command::AvailablePilots { location } => {
            let roster = services::load_pilots(repo)
                .await
                .map_err(CommandError::RosterUnavailable)?;
            let pilots = available_in(&roster, &location)
                .into_iter()
                .cloned()
                .collect();
            Ok(CommandOutcome::AvailablePilots { location, pilots })
        }
        Command::MarkOnLeave { name } => {
            let update_failed = |source| CommandError::StatusUpdate {
                name: name.clone(),
                source,
            };
            let found = services::locate_pilot(repo, &name)
                .await
                .map_err(update_failed)?;
            let row = found
                .ok_or_else(|| CommandError::PilotNotFound(name.clone()))?
                .row;
            let col = services::status_column(repo)
                .await
                .map_err(update_failed)?
                .ok_or(CommandError::StatusColumnMissing)?;

            let cell = CellRef::new(row, col);
            services::set_pilot_status(repo, cell, &PilotStatus::OnLeave)
                .await
                .map_err(update_failed)?;
            info!("Pilot '{}' marked as On Leave", name);
            Ok(CommandOutcome::MarkedOnLeave { name, cell })
        }
    }
}

/// Parse and execute `input`, rendering the result as notices.
///
/// Blank input is not a command and yields an empty report.
pub async fn interpret<R: FullRepository + ?Sized>(repo: &R, input: &str) -> CommandReport {
    let report = CommandReport::new(input);
    if input.trim().is_empty() {
        return report;
    }

    let result = match parse_command(input) {
        Ok(command) => execute(repo, command).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(outcome) => outcome.into_report(report),
        Err(e) => {
            if !matches!(e, CommandError::NotRecognized) {
                warn!("Command '{}' failed: {}", input, e);
            }
            report.with_notice(e.notice())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(input: &str) -> String {
        match parse_command(input).unwrap() {
            Command::AvailablePilots { location } => location,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    fn name(input: &str) -> String {
        match parse_command(input).unwrap() {
            Command::MarkOnLeave { name } => name,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_location_after_last_in() {
        assert_eq!(location("show available pilots in Bangalore"), "Bangalore");
        assert_eq!(location("SHOW AVAILABLE PILOTS IN new delhi "), "New Delhi");
        assert_eq!(
            location("available pilots in a hurry in mumbai"),
            "Mumbai"
        );
    }

    #[test]
    fn test_in_inside_words_is_ignored() {
        assert_eq!(location("find available pilots in Chennai"), "Chennai");
        assert_eq!(location("available pilots in pinjore"), "Pinjore");
    }

    #[test]
    fn test_location_without_in_uses_remainder() {
        assert_eq!(location("available pilots pune"), "Pune");
    }

    #[test]
    fn test_empty_location() {
        assert!(matches!(
            parse_command("show available pilots in   "),
            Err(CommandError::EmptyLocation)
        ));
        assert!(matches!(
            parse_command("available pilots"),
            Err(CommandError::EmptyLocation)
        ));
    }

    #[test]
    fn test_name_keeps_original_case() {
        assert_eq!(name("Arjun on leave"), "Arjun");
        assert_eq!(name("  Neha Sharma ON LEAVE"), "Neha Sharma");
        assert_eq!(name("Ron on leave"), "Ron");
    }

    #[test]
    fn test_on_leave_needs_whole_words() {
        assert!(matches!(
            parse_command("Aaron leave"),
            Err(CommandError::NotRecognized)
        ));
        assert!(matches!(
            parse_command("Ron leaves"),
            Err(CommandError::NotRecognized)
        ));
        assert_eq!(name("Aaron on leave"), "Aaron");
        assert_eq!(name("Ron on leave on leave"), "Ron");
    }

    #[test]
    fn test_empty_name() {
        assert!(matches!(
            parse_command("on leave"),
            Err(CommandError::EmptyName)
        ));
    }

    #[test]
    fn test_available_pilots_checked_first() {
        assert!(matches!(
            parse_command("available pilots in Pune on leave"),
            Ok(Command::AvailablePilots { .. })
        ));
    }

    #[test]
    fn test_unrecognized() {
        let err = parse_command("launch drone D001").unwrap_err();
        assert!(matches!(err, CommandError::NotRecognized));
        assert_eq!(
            err.notice(),
            Notice::info("Command not recognized. Try another instruction.")
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("bangalore"), "Bangalore");
        assert_eq!(title_case("new delhi"), "New Delhi");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("sector-7g"), "Sector-7G");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_word_starts() {
        assert_eq!(word_starts("pilots in pinjore in", "in"), vec![7, 18]);
        assert!(word_starts("inside", "in").is_empty());
        assert_eq!(word_starts("Zoë on leave", "on"), vec![5]);
    }

    #[test]
    fn test_each_error_maps_to_one_notice() {
        let errors = vec![
            CommandError::NotRecognized,
            CommandError::EmptyLocation,
            CommandError::RosterUnavailable(RepositoryError::connection("down")),
            CommandError::EmptyName,
            CommandError::PilotNotFound("Ghost".to_string()),
            CommandError::StatusColumnMissing,
            CommandError::StatusUpdate {
                name: "Arjun".to_string(),
                source: RepositoryError::connection("down"),
            },
        ];
        for error in errors {
            let notice = error.notice();
            assert!(!notice.message.is_empty());
        }
    }
}
