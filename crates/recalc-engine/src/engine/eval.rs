//! Arithmetic evaluation via the Rhai engine.
//!
//! By the time an expression reaches this module every cell reference has
//! been substituted away; what remains is pure arithmetic over float
//! literals. Rhai handles parsing, operator precedence, and parentheses.
//! Division by zero is reported as the NaN sentinel rather than an error.

use rhai::{Dynamic, Engine, EvalAltResult};
use thiserror::Error;

/// Errors from expression validation and evaluation.
#[derive(Error, Debug)]
pub enum EvalError {
    #[error("invalid syntax: {0}")]
    Syntax(#[from] rhai::ParseError),

    #[error("expression did not produce a number")]
    NonNumeric,

    #[error("evaluation failed: {0}")]
    Eval(#[from] Box<EvalAltResult>),
}

/// Create an engine configured for plain arithmetic evaluation.
/// No built-in functions are registered; formulas are expressions only.
pub fn create_engine() -> Engine {
    Engine::new()
}

/// Check that `expr` parses as a single well-formed expression without
/// running it.
pub fn validate_syntax(engine: &Engine, expr: &str) -> Result<(), EvalError> {
    engine.compile_expression(expr)?;
    Ok(())
}

/// Evaluate a fully substituted, syntax-valid expression to a 64-bit float.
///
/// Arithmetic failures (division by zero) and non-finite results both yield
/// NaN; any other failure is surfaced as an error.
pub fn evaluate(engine: &Engine, expr: &str) -> Result<f64, EvalError> {
    let value = match engine.eval_expression::<Dynamic>(expr) {
        Ok(value) => value,
        Err(err) if matches!(err.as_ref(), EvalAltResult::ErrorArithmetic(..)) => {
            return Ok(f64::NAN);
        }
        Err(err) => return Err(EvalError::Eval(err)),
    };

    let n = if let Ok(f) = value.as_float() {
        f
    } else if let Ok(i) = value.as_int() {
        i as f64
    } else {
        return Err(EvalError::NonNumeric);
    };

    Ok(if n.is_finite() { n } else { f64::NAN })
}
