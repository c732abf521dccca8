//! recalc_engine - cell identifiers, dependency graph, and arithmetic evaluation.

pub mod engine;
