//! Lenient numeric parsing for launch spreadsheets.
//!
//! Cost and mass columns arrive as free text: thousands separators, stray
//! whitespace and placeholders such as `"N/A"` or `"?"` all occur. Anything
//! that does not parse becomes `None` instead of failing the load.

use serde::{Deserialize, Deserializer};
use tracing::debug;

/// Parses a numeric cell, accepting `,` thousands separators.
///
/// Returns `None` for empty cells, placeholders and non-finite values.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            debug!(raw, "Unparseable numeric cell treated as missing");
            None
        }
    }
}

/// Serde adapter for [`parse_amount`], used on every numeric CSV column.
pub fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_decimal() {
        assert_eq!(parse_amount("42"), Some(42.0));
        assert_eq!(parse_amount(" 3.5 "), Some(3.5));
    }

    #[test]
    fn test_parse_thousands_separator() {
        assert_eq!(parse_amount("1,500"), Some(1500.0));
        assert_eq!(parse_amount("12,000,000"), Some(12_000_000.0));
    }

    #[test]
    fn test_parse_placeholder_is_missing() {
        assert_eq!(parse_amount("N/A"), None);
        assert_eq!(parse_amount("?"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
    }
}
