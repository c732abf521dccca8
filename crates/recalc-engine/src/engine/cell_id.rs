//! Cell identifier validation and formatting.
//!
//! Cells are named in spreadsheet-style A1 notation: one or more uppercase
//! letters followed by a row number with no leading zero (e.g. `A1`, `AB23`).
//! A [`CellId`] can only be constructed from a name that matches this shape,
//! so holding one is proof of validity.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// A validated cell identifier in A1 notation.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellId(String);

impl CellId {
    /// Validate a cell name. Returns None if the name is empty or does not
    /// match the `A1` shape.
    pub fn new(name: &str) -> Option<CellId> {
        if cell_id_re().is_match(name) {
            Some(CellId(name.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn cell_id_re() -> &'static Regex {
    static CELL_ID_RE: OnceLock<Regex> = OnceLock::new();
    CELL_ID_RE
        .get_or_init(|| Regex::new(r"^[A-Z]+[1-9][0-9]*$").expect("cell id regex must compile"))
}

impl std::str::FromStr for CellId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or_else(|| format!("Invalid cell identifier: {}", s))
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
