//! Read path: reference substitution and formula evaluation.

use super::state::Spreadsheet;
use crate::error::{Result, SpreadsheetError};
use recalc_engine::engine::{
    CellContent, CellId, CellValue, EvalError, evaluate, format_number, reference_tokens,
    validate_syntax, widen_int_literals,
};

impl Spreadsheet {
    /// Current value of a cell.
    ///
    /// Literals come back unchanged; formulas are evaluated on demand by
    /// substituting referenced cells with their own evaluated values. Reads
    /// never mutate state, so a formula always reflects the latest contents
    /// of the cells it references.
    pub fn get_cell_value(&self, id: &str) -> Result<CellValue> {
        // A malformed name can never have been set, so reads report it the
        // same way as any other missing cell.
        let id = CellId::new(id).ok_or_else(|| SpreadsheetError::CellNotFound(id.to_string()))?;
        self.value_of(&id)
    }

    /// Raw content of a cell — formula text is returned unevaluated.
    pub fn get_raw(&self, id: &str) -> Result<&CellContent> {
        let cell = CellId::new(id).ok_or_else(|| SpreadsheetError::CellNotFound(id.to_string()))?;
        self.cells
            .get(&cell)
            .ok_or_else(|| SpreadsheetError::CellNotFound(id.to_string()))
    }

    pub(crate) fn value_of(&self, id: &CellId) -> Result<CellValue> {
        let content = self
            .cells
            .get(id)
            .ok_or_else(|| SpreadsheetError::CellNotFound(id.to_string()))?;

        match content {
            CellContent::Number(n) => Ok(CellValue::Number(*n)),
            CellContent::Text(s) => Ok(CellValue::Text(s.clone())),
            CellContent::Formula(_) => {
                let raw = self
                    .formulas
                    .get(id)
                    .ok_or_else(|| SpreadsheetError::FormulaMissing(id.clone()))?;
                let body = raw.strip_prefix('=').unwrap_or(raw);
                self.evaluate_formula(id, body)
                    .map_err(|e| SpreadsheetError::Formula {
                        cell: id.clone(),
                        source: Box::new(e),
                    })
            }
        }
    }

    /// Substitute references, then validate and evaluate the arithmetic.
    fn evaluate_formula(&self, id: &CellId, body: &str) -> Result<CellValue> {
        let substituted = self.substitute(body, id)?;
        let expr = widen_int_literals(&substituted);
        validate_syntax(&self.engine, &expr)
            .map_err(|e| SpreadsheetError::InvalidSyntax(e.to_string()))?;
        match evaluate(&self.engine, &expr) {
            Ok(n) => Ok(CellValue::Number(n)),
            Err(EvalError::Syntax(e)) => Err(SpreadsheetError::InvalidSyntax(e.to_string())),
            Err(e) => Err(SpreadsheetError::Evaluation(e.to_string())),
        }
    }

    /// Replace every known cell reference in `body` with its evaluated value.
    ///
    /// Replacement is whole-token: identifier tokens are located by the
    /// tokenizer, never by substring search. Before resolving a reference,
    /// the read is rejected if that cell's own dependency set points back at
    /// `current` — a read-time guard independent of the write-time cycle
    /// check.
    fn substitute(&self, body: &str, current: &CellId) -> Result<String> {
        let mut out = String::with_capacity(body.len());
        let mut last = 0;

        for (range, reference) in reference_tokens(body) {
            out.push_str(&body[last..range.start]);
            last = range.end;

            if !self.cells.contains_key(&reference) {
                // Unknown cells are left in place; evaluation reports them.
                out.push_str(reference.as_str());
                continue;
            }
            if let Some(references) = self.dependencies.get(&reference) {
                if references.contains(current) {
                    return Err(SpreadsheetError::CircularReference(current.clone()));
                }
            }
            match self.value_of(&reference)? {
                CellValue::Number(n) => out.push_str(&format_number(n)),
                CellValue::Text(s) => out.push_str(&s),
            }
        }
        out.push_str(&body[last..]);
        Ok(out)
    }
}
