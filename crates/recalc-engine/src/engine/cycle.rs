//! Circular reference detection for formula cells.
//!
//! When a formula is entered, we must verify it doesn't create a cycle
//! (e.g. A1 references B1, B1 references C1, C1 references A1). This module
//! runs a depth-first search over the dependency graph before the write is
//! committed, so evaluation can never loop forever.

use std::collections::{HashMap, HashSet};

use super::cell_id::CellId;

/// Dependency graph: formula cell -> cells its formula references.
pub type DependencyGraph = HashMap<CellId, HashSet<CellId>>;

/// Check whether `start` can reach itself by following dependency edges.
///
/// Call this after tentatively installing `start`'s new reference set: the
/// new edges are what can close a cycle back to `start`.
pub fn creates_cycle(start: &CellId, graph: &DependencyGraph) -> bool {
    let mut visited = HashSet::new();
    let mut stack = vec![start.clone()];

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        let Some(references) = graph.get(&current) else {
            continue;
        };
        for reference in references {
            if reference == start {
                return true;
            }
            if !visited.contains(reference) {
                stack.push(reference.clone());
            }
        }
    }
    false
}
