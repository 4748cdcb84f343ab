//! Sheet-level data models shared by every repository backend.
//!
//! A sheet is a header row followed by data rows of JSON scalars. Coordinates
//! are 1-based and the header occupies row 1, so the first data row is row 2.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::repository::{ErrorContext, RepositoryError, RepositoryResult};
use crate::models::cell::cell_text;

/// A data row keyed by header name.
pub type Record = serde_json::Map<String, Value>;

/// The three tables the dashboard works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Roster,
    Fleet,
    Missions,
}

impl Table {
    /// Stable lowercase label, independent of configured sheet names.
    pub fn label(self) -> &'static str {
        match self {
            Table::Roster => "roster",
            Table::Fleet => "fleet",
            Table::Missions => "missions",
        }
    }

    /// Name of the sheet backing this table unless configured otherwise.
    pub fn default_sheet_name(self) -> &'static str {
        match self {
            Table::Roster => "pilot_roster",
            Table::Fleet => "drone_fleet",
            Table::Missions => "missions",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_sheet_name())
    }
}

/// A 1-based row/column coordinate. Row 1 is the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row, self.col)
    }
}

/// A spreadsheet table: header plus data rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub header: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<Value>>,
}

impl Sheet {
    /// Create an empty sheet with the given column names.
    pub fn new<S: Into<String>>(header: impl IntoIterator<Item = S>) -> Self {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row of text cells.
    pub fn with_row<S: Into<String>>(mut self, cells: impl IntoIterator<Item = S>) -> Self {
        self.rows
            .push(cells.into_iter().map(|c| Value::String(c.into())).collect());
        self
    }

    /// Append a row of raw cell values.
    pub fn push_row(&mut self, cells: Vec<Value>) {
        self.rows.push(cells);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Data rows zipped with the header. Missing trailing cells become `""`.
    pub fn records(&self) -> Vec<Record> {
        self.rows
            .iter()
            .map(|row| {
                self.header
                    .iter()
                    .enumerate()
                    .map(|(i, key)| {
                        let value = row
                            .get(i)
                            .cloned()
                            .unwrap_or_else(|| Value::String(String::new()));
                        (key.clone(), value)
                    })
                    .collect()
            })
            .collect()
    }

    /// 1-based position of a header column (exact match).
    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name).map(|i| i + 1)
    }

    /// Value at a coordinate. Row 1 yields the header cell.
    pub fn cell(&self, cell: CellRef) -> Option<Value> {
        if cell.col == 0 {
            return None;
        }
        match cell.row {
            0 => None,
            1 => self
                .header
                .get(cell.col - 1)
                .map(|h| Value::String(h.clone())),
            row => self
                .rows
                .get(row - 2)
                .and_then(|r| r.get(cell.col - 1).cloned()),
        }
    }

    /// First data cell within `column` whose displayed text equals `value`.
    pub fn find_in_column(&self, column: &str, value: &str) -> Option<CellRef> {
        self.find_in_column_by(column, |text| text == value)
    }

    /// First data cell within `column` whose text equals `value`, ignoring case.
    pub fn find_in_column_ignore_case(&self, column: &str, value: &str) -> Option<CellRef> {
        let needle = value.to_lowercase();
        self.find_in_column_by(column, |text| text.to_lowercase() == needle)
    }

    fn find_in_column_by(&self, column: &str, matches: impl Fn(&str) -> bool) -> Option<CellRef> {
        let col = self.column_position(column)?;
        self.rows.iter().enumerate().find_map(|(i, row)| {
            row.get(col - 1)
                .filter(|v| matches(&cell_text(v)))
                .map(|_| CellRef::new(i + 2, col))
        })
    }

    /// Overwrite a single cell. Short rows are padded with empty cells.
    pub fn set(&mut self, cell: CellRef, value: Value, sheet_name: &str) -> RepositoryResult<()> {
        let context = || {
            ErrorContext::new("update_cell")
                .with_sheet(sheet_name)
                .with_cell(cell)
        };

        if cell.col == 0 || cell.col > self.header.len() {
            return Err(RepositoryError::invalid_cell(
                format!(
                    "column {} is outside the sheet ({} columns)",
                    cell.col,
                    self.header.len()
                ),
                context(),
            ));
        }

        match cell.row {
            0 => Err(RepositoryError::invalid_cell("row 0 does not exist", context())),
            1 => {
                self.header[cell.col - 1] = cell_text(&value);
                Ok(())
            }
            row => {
                let data_rows = self.rows.len();
                let target = self.rows.get_mut(row - 2).ok_or_else(|| {
                    RepositoryError::invalid_cell(
                        format!("row {} is outside the sheet ({} data rows)", row, data_rows),
                        context(),
                    )
                })?;
                if target.len() < cell.col {
                    target.resize(cell.col, Value::String(String::new()));
                }
                target[cell.col - 1] = value;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn roster() -> Sheet {
        Sheet::new(["name", "status", "location"])
            .with_row(["Arjun", "Available", "Bangalore"])
            .with_row(["Neha", "Assigned", "Mumbai"])
    }

    #[test]
    fn test_records_zip_header() {
        let records = roster().records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["name"], json!("Arjun"));
        assert_eq!(records[1]["location"], json!("Mumbai"));
    }

    #[test]
    fn test_records_pad_short_rows() {
        let mut sheet = Sheet::new(["name", "status"]);
        sheet.push_row(vec![json!("Rohit")]);
        let records = sheet.records();
        assert_eq!(records[0]["status"], json!(""));
    }

    #[test]
    fn test_find_counts_header_as_row_one() {
        let sheet = roster();
        assert_eq!(sheet.find_in_column("name", "Neha"), Some(CellRef::new(3, 1)));
        assert_eq!(sheet.find_in_column("location", "Mumbai"), Some(CellRef::new(3, 3)));
        assert_eq!(sheet.find_in_column("name", "name"), None);
        assert_eq!(sheet.find_in_column("name", "neha"), None);
    }

    #[test]
    fn test_find_in_column_ignores_other_columns() {
        let sheet = roster();
        assert_eq!(sheet.find_in_column("name", "Mumbai"), None);
        assert_eq!(sheet.find_in_column("name", "Available"), None);
        assert_eq!(sheet.find_in_column_ignore_case("name", "mumbai"), None);
        assert_eq!(sheet.find_in_column("missing", "Neha"), None);
    }

    #[test]
    fn test_find_matches_numeric_cells_as_text() {
        let mut sheet = Sheet::new(["project_id"]);
        sheet.push_row(vec![json!(42)]);
        assert_eq!(sheet.find_in_column("project_id", "42"), Some(CellRef::new(2, 1)));
    }

    #[test]
    fn test_find_in_column_ignore_case() {
        let sheet = roster();
        assert_eq!(
            sheet.find_in_column_ignore_case("name", "arjun"),
            Some(CellRef::new(2, 1))
        );
        assert_eq!(sheet.find_in_column_ignore_case("missing", "arjun"), None);
    }

    #[test]
    fn test_table_label_is_lowercase_kind() {
        assert_eq!(Table::Roster.label(), "roster");
        assert_eq!(Table::Fleet.label(), "fleet");
        assert_eq!(Table::Missions.label(), "missions");
    }

    #[test]
    fn test_column_position_is_one_based() {
        let sheet = roster();
        assert_eq!(sheet.column_position("name"), Some(1));
        assert_eq!(sheet.column_position("status"), Some(2));
        assert_eq!(sheet.column_position("Status"), None);
    }

    #[test]
    fn test_set_overwrites_cell() {
        let mut sheet = roster();
        sheet
            .set(CellRef::new(2, 2), json!("On Leave"), "pilot_roster")
            .unwrap();
        assert_eq!(sheet.cell(CellRef::new(2, 2)), Some(json!("On Leave")));
        assert_eq!(sheet.cell(CellRef::new(3, 2)), Some(json!("Assigned")));
    }

    #[test]
    fn test_set_pads_short_row() {
        let mut sheet = Sheet::new(["name", "status", "location"]);
        sheet.push_row(vec![json!("Rohit")]);
        sheet
            .set(CellRef::new(2, 3), json!("Pune"), "pilot_roster")
            .unwrap();
        assert_eq!(sheet.rows[0].len(), 3);
        assert_eq!(sheet.cell(CellRef::new(2, 2)), Some(json!("")));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut sheet = roster();
        assert!(sheet
            .set(CellRef::new(9, 1), json!("x"), "pilot_roster")
            .is_err());
        assert!(sheet
            .set(CellRef::new(2, 4), json!("x"), "pilot_roster")
            .is_err());
        assert!(sheet
            .set(CellRef::new(0, 1), json!("x"), "pilot_roster")
            .is_err());
    }

    #[test]
    fn test_cell_ref_display() {
        assert_eq!(CellRef::new(2, 3).to_string(), "R2C3");
    }

    #[test]
    fn test_sheet_json_shape() {
        let sheet: Sheet =
            serde_json::from_value(json!({"header": ["name"], "rows": [["Arjun"]]})).unwrap();
        assert_eq!(sheet.len(), 1);
        let empty: Sheet = serde_json::from_value(json!({"header": ["name"]})).unwrap();
        assert!(empty.is_empty());
    }
}
