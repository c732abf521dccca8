//! Spreadsheet orchestration: cell store + dependency graph + history,
//! mutated together as one unit.

mod eval;
mod ops;
mod state;

pub use state::Spreadsheet;
