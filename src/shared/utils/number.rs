use regex::Regex;
use std::sync::OnceLock;

fn float_prefix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[+-]?(Infinity|(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?)")
            .expect("float prefix pattern is valid")
    })
}

/// Lenient decimal parsing for user-typed numbers.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"12.5 USD"` reads as `12.5`. Text without a numeric prefix yields `NaN`.
pub fn parse_float_lenient(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let Some(found) = float_prefix().find(trimmed) else {
        return f64::NAN;
    };

    let literal = found.as_str();
    match literal.trim_start_matches(['+', '-']) {
        "Infinity" if literal.starts_with('-') => f64::NEG_INFINITY,
        "Infinity" => f64::INFINITY,
        _ => literal.parse().unwrap_or(f64::NAN),
    }
}
