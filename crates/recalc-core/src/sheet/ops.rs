//! Write path: set, undo, redo.

use super::state::{HistoryEntry, Spreadsheet};
use crate::error::{Result, SpreadsheetError};
use recalc_engine::engine::{CellContent, CellId, creates_cycle, extract_references};

impl Spreadsheet {
    /// Set a cell to a number, text, or `=`-prefixed formula.
    ///
    /// On success exactly one history entry is recorded (even when the new
    /// content equals the old) and the redo log is cleared. A formula that
    /// would introduce a circular reference is rejected with no state change
    /// at all.
    pub fn set_cell_value<V: Into<CellContent>>(&mut self, id: &str, value: V) -> Result<()> {
        let id = Self::validate_id(id)?;
        let content = value.into();

        if let CellContent::Formula(raw) = &content {
            self.install_dependencies(&id, raw)?;
        } else if self.formulas.remove(&id).is_some() {
            self.dependencies.remove(&id);
        }

        let prior = self.cells.get(&id).cloned();
        self.record(id.clone(), prior);

        if let CellContent::Formula(raw) = &content {
            self.formulas.insert(id.clone(), raw.clone());
        }
        self.cells.insert(id, content);
        Ok(())
    }

    /// Revert the most recent mutation. No-op when the undo log is empty.
    ///
    /// Restoring a cell that had never been set removes it entirely, so a
    /// subsequent read fails as if the cell was never created.
    pub fn undo(&mut self) {
        let Some(entry) = self.undo_stack.pop() else {
            return;
        };
        let current = self.cells.get(&entry.cell).cloned();
        self.redo_stack.push(HistoryEntry {
            cell: entry.cell.clone(),
            content: current,
        });
        self.remove_cell(&entry.cell);
        if let Some(content) = entry.content {
            self.restore(entry.cell, content);
        }
    }

    /// Replay the most recently undone mutation. No-op when the redo log is
    /// empty. The mirror of [`Spreadsheet::undo`]: the pre-redo content goes
    /// back onto the undo log. History entries were validated when first
    /// written, so no cycle check is re-run here.
    pub fn redo(&mut self) {
        let Some(entry) = self.redo_stack.pop() else {
            return;
        };
        let current = self.cells.get(&entry.cell).cloned();
        self.undo_stack.push(HistoryEntry {
            cell: entry.cell.clone(),
            content: current,
        });
        self.remove_cell(&entry.cell);
        if let Some(content) = entry.content {
            self.restore(entry.cell, content);
        }
    }

    pub(crate) fn validate_id(id: &str) -> Result<CellId> {
        CellId::new(id).ok_or_else(|| SpreadsheetError::InvalidIdentifier(id.to_string()))
    }

    /// Tentatively install `id`'s new reference set and verify the graph
    /// stays acyclic. On rejection the previous reference set is restored,
    /// so a failed write leaves no trace.
    fn install_dependencies(&mut self, id: &CellId, raw: &str) -> Result<()> {
        let body = raw.strip_prefix('=').unwrap_or(raw);
        let references = extract_references(body);
        let previous = self.dependencies.insert(id.clone(), references);

        if creates_cycle(id, &self.dependencies) {
            match previous {
                Some(previous) => {
                    self.dependencies.insert(id.clone(), previous);
                }
                None => {
                    self.dependencies.remove(id);
                }
            }
            return Err(SpreadsheetError::CircularReference(id.clone()));
        }
        Ok(())
    }

    /// Push one undo entry and clear the redo log.
    fn record(&mut self, cell: CellId, content: Option<CellContent>) {
        self.redo_stack.clear();
        self.undo_stack.push(HistoryEntry { cell, content });
    }

    /// Remove a cell along with any formula bookkeeping it carried.
    fn remove_cell(&mut self, id: &CellId) {
        self.cells.remove(id);
        if self.formulas.remove(id).is_some() {
            self.dependencies.remove(id);
        }
    }

    /// Reinstate content recorded in history, rebuilding formula bookkeeping
    /// when the content is a formula.
    fn restore(&mut self, id: CellId, content: CellContent) {
        if let CellContent::Formula(raw) = &content {
            let body = raw.strip_prefix('=').unwrap_or(raw);
            self.dependencies.insert(id.clone(), extract_references(body));
            self.formulas.insert(id.clone(), raw.clone());
        }
        self.cells.insert(id, content);
    }
}
