//! Cell content and value types.
//!
//! A cell holds exactly one [`CellContent`] at a time: a number, free text,
//! or formula source. Reads produce a [`CellValue`] — formulas are evaluated
//! on demand and never returned raw.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw content held by a cell.
///
/// `Formula` keeps its source text including the leading `=`; the expression
/// body is everything after it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellContent {
    Number(f64),
    Text(String),
    Formula(String),
}

impl CellContent {
    /// Classify textual input: `=`-prefixed strings are formulas, everything
    /// else is opaque text. Strings are never coerced to numbers.
    pub fn from_input(input: &str) -> CellContent {
        if input.starts_with('=') {
            CellContent::Formula(input.to_string())
        } else {
            CellContent::Text(input.to_string())
        }
    }

    pub fn is_formula(&self) -> bool {
        matches!(self, CellContent::Formula(_))
    }

    /// Formula body with the leading `=` stripped, if this is a formula.
    pub fn formula_body(&self) -> Option<&str> {
        match self {
            CellContent::Formula(raw) => Some(raw.strip_prefix('=').unwrap_or(raw)),
            _ => None,
        }
    }
}

impl From<f64> for CellContent {
    fn from(n: f64) -> Self {
        CellContent::Number(n)
    }
}

impl From<i64> for CellContent {
    fn from(n: i64) -> Self {
        CellContent::Number(n as f64)
    }
}

impl From<&str> for CellContent {
    fn from(s: &str) -> Self {
        CellContent::from_input(s)
    }
}

impl From<String> for CellContent {
    fn from(s: String) -> Self {
        CellContent::from_input(&s)
    }
}

/// The observable value of a cell: what a read returns.
///
/// Formula cells always read as `Number` (NaN for undefined arithmetic such
/// as division by zero); literal cells read back unchanged.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }

    /// True for the NaN sentinel produced by undefined arithmetic.
    pub fn is_nan(&self) -> bool {
        matches!(self, CellValue::Number(n) if n.is_nan())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}
