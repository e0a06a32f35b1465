//! Value parsers for CLI arguments

use namesake_core::config::StrategyKind;

/// Parse an extraction strategy name
pub fn parse_strategy(s: &str) -> Result<StrategyKind, String> {
    s.parse::<StrategyKind>().map_err(|e| e.to_string())
}

/// Parse a Dice threshold in `[0, 1]`
pub fn parse_unit_interval(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("not a number: {s}"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("expected a value between 0.0 and 1.0, got {value}"))
    }
}

/// Parse an n-gram size (at least 1)
pub fn parse_ngram_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("n-gram size must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("not a positive integer: {s}")),
    }
}

/// Parse an inline catalog entry written as `NAME=REFERENCE`
///
/// Splits at the first `=`, so references may contain `=`.
pub fn parse_catalog_entry(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, reference)) if !name.trim().is_empty() && !reference.trim().is_empty() => {
            Ok((name.trim().to_string(), reference.trim().to_string()))
        }
        _ => Err(format!("expected NAME=REFERENCE, got {s:?}")),
    }
}
