//! Spreadsheet state: cell store, dependency graph, and history stacks.

use recalc_engine::engine::{CellContent, CellId, DependencyGraph, Engine, create_engine};
use std::collections::HashMap;

/// One history record: a cell and the content it held before a mutation
/// (`None` when the cell had never been set).
#[derive(Clone)]
pub(crate) struct HistoryEntry {
    pub cell: CellId,
    pub content: Option<CellContent>,
}

/// In-memory reactive cell store with linear undo/redo.
///
/// Every mutation keeps three structures in step: the raw cell contents,
/// the formula dependency graph, and the history log. The dependency graph
/// is acyclic at all times; a write that would break that is rejected
/// before anything is committed.
///
/// Single-threaded by design: operations are call-and-return with no
/// interior locking. A multi-threaded host must treat each public operation
/// as one critical section.
pub struct Spreadsheet {
    /// Raw content per cell.
    pub(crate) cells: HashMap<CellId, CellContent>,
    /// Formula source text; an entry exists iff the cell holds a formula.
    pub(crate) formulas: HashMap<CellId, String>,
    /// Formula cell -> cells its formula references.
    pub(crate) dependencies: DependencyGraph,
    /// Undo log, most recent mutation last. Unbounded.
    pub(crate) undo_stack: Vec<HistoryEntry>,
    /// Redo log, most recently undone mutation last.
    pub(crate) redo_stack: Vec<HistoryEntry>,
    /// Engine used to evaluate substituted formula expressions.
    pub(crate) engine: Engine,
}

impl Spreadsheet {
    /// Create an empty store. Side-effect free.
    pub fn new() -> Self {
        Spreadsheet {
            cells: HashMap::new(),
            formulas: HashMap::new(),
            dependencies: DependencyGraph::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            engine: create_engine(),
        }
    }

    /// Number of cells currently set.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Default for Spreadsheet {
    fn default() -> Self {
        Self::new()
    }
}
