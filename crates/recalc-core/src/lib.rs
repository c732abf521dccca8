//! recalc-core - in-memory reactive cell store.
//!
//! Cells hold numbers, text, or arithmetic formulas referencing other cells.
//! Formulas are evaluated on demand; the dependency graph stays acyclic and
//! every mutation is undoable.

pub mod error;
pub mod sheet;

pub use error::{Result, SpreadsheetError};
pub use sheet::Spreadsheet;

pub use recalc_engine::engine::{CellContent, CellId, CellValue};
