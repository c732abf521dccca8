//! Expression preprocessing before evaluation.
//!
//! Rhai distinguishes integer from float arithmetic, and `10/4` would
//! truncate to `2`. Formulas use floating-point semantics throughout, so
//! every bare integer literal is widened to a float literal (`10` -> `10.0`)
//! before the expression reaches the engine. Identifier tokens are matched
//! first so the digits inside a cell reference are never touched.

use regex::Regex;
use std::sync::OnceLock;

/// Rewrite bare integer literals as float literals.
pub fn widen_int_literals(expr: &str) -> String {
    token_re()
        .replace_all(expr, |caps: &regex::Captures| {
            let token = &caps[0];
            if token.chars().all(|c| c.is_ascii_digit()) {
                format!("{token}.0")
            } else {
                token.to_string()
            }
        })
        .to_string()
}

fn token_re() -> &'static Regex {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    // Identifiers first, then full float literals, then bare integers.
    TOKEN_RE.get_or_init(|| {
        Regex::new(r"[A-Za-z_][A-Za-z0-9_]*|[0-9]+\.[0-9]+|[0-9]+")
            .expect("literal token regex must compile")
    })
}
