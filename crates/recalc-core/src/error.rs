//! Error types for the recalc cell store.

use recalc_engine::engine::CellId;
use thiserror::Error;

/// Errors surfaced by spreadsheet operations.
///
/// Writes that fail leave the store, dependency graph, and history in their
/// pre-call state; reads never mutate.
#[derive(Error, Debug)]
pub enum SpreadsheetError {
    #[error("invalid cell identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("cell {0} does not exist")]
    CellNotFound(String),

    /// Internal consistency guard: a formula cell with no recorded formula
    /// text. Unreachable when the store's bookkeeping is intact.
    #[error("formula record missing for cell {0}")]
    FormulaMissing(CellId),

    #[error("circular reference detected at cell {0}")]
    CircularReference(CellId),

    #[error("invalid syntax in formula: {0}")]
    InvalidSyntax(String),

    #[error("error evaluating expression: {0}")]
    Evaluation(String),

    /// Read-path wrapper naming the cell whose formula failed.
    #[error("invalid formula in cell {cell}: {source}")]
    Formula {
        cell: CellId,
        #[source]
        source: Box<SpreadsheetError>,
    },
}

pub type Result<T> = std::result::Result<T, SpreadsheetError>;
