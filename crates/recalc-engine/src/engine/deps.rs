//! Reference extraction from formula text.
//!
//! Scans the expression body for identifier tokens that name cells. Matching
//! is whole-token (`\b`-anchored), so `A1` inside `AA12` never counts as a
//! reference, and numeric literals are never mistaken for cells.

use regex::Regex;
use std::collections::HashSet;
use std::ops::Range;
use std::sync::OnceLock;

use super::cell_id::CellId;

/// Extract the set of cell references appearing in a formula body.
/// Duplicates collapse.
pub fn extract_references(body: &str) -> HashSet<CellId> {
    reference_tokens(body).map(|(_, id)| id).collect()
}

/// Iterate over reference tokens in order, with their byte ranges.
///
/// Used by substitution, which needs to splice replacement text back into
/// the surrounding expression.
pub fn reference_tokens(body: &str) -> impl Iterator<Item = (Range<usize>, CellId)> + '_ {
    reference_re()
        .find_iter(body)
        .filter_map(|m| CellId::new(m.as_str()).map(|id| (m.range(), id)))
}

fn reference_re() -> &'static Regex {
    static REFERENCE_RE: OnceLock<Regex> = OnceLock::new();
    REFERENCE_RE.get_or_init(|| {
        Regex::new(r"\b[A-Z]+[1-9][0-9]*\b").expect("cell reference regex must compile")
    })
}
