//! Numeric formatting for substitution back into expression text.

/// Render a number so that it reads back as a float literal.
///
/// Integral values keep one decimal place (`13` -> `"13.0"`) so the engine
/// never falls into integer arithmetic. NaN has no literal form in the
/// expression language, so it is spelled as an expression that produces it.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "(0.0/0.0)".to_string()
    } else if n.is_finite() && n == n.trunc() {
        format!("{:.1}", n)
    } else {
        format!("{}", n)
    }
}
