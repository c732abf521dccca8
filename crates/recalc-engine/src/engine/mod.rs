//! Cell store engine API.
//!
//! This module provides the leaf pieces of the reactive cell store:
//!
//! - [`CellId`] - Validated A1-style cell identifiers
//! - [`CellContent`], [`CellValue`] - Raw cell contents and observed values
//! - [`extract_references`] - Parse formula dependencies
//! - [`creates_cycle`] - Circular reference detection
//! - [`widen_int_literals`], [`format_number`] - Expression preprocessing
//! - [`create_engine`], [`validate_syntax`], [`evaluate`] - Arithmetic evaluation

mod cell_id;
mod content;
mod cycle;
mod deps;
mod eval;
mod format;
mod preprocess;

pub use cell_id::CellId;
pub use content::{CellContent, CellValue};
pub use cycle::{DependencyGraph, creates_cycle};
pub use deps::{extract_references, reference_tokens};
pub use eval::{EvalError, create_engine, evaluate, validate_syntax};
pub use format::format_number;
pub use preprocess::widen_int_literals;

pub use rhai::Engine;
