//! # Shared Utility Functions
//!
//! Display helpers used by both the console and the web front-end when rendering
//! lead and client tables.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{or_dash, id_or_dash};
//!
//! assert_eq!(or_dash(Some("555-0100")), "555-0100");
//! assert_eq!(or_dash(None), "-");
//! assert_eq!(id_or_dash(Some(7)), "7");
//! ```

/// Placeholder shown in table cells for missing optional values.
pub const EMPTY_CELL: &str = "-";

/// Render an optional text cell, using [`EMPTY_CELL`] for `None` or blank values.
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => EMPTY_CELL.to_string(),
    }
}

/// Render an optional identifier cell.
pub fn id_or_dash(value: Option<i64>) -> String {
    value.map_or_else(|| EMPTY_CELL.to_string(), |id| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(Some("+1 555")), "+1 555");
        assert_eq!(or_dash(Some("   ")), "-");
        assert_eq!(or_dash(None), "-");
    }

    #[test]
    fn test_id_or_dash() {
        assert_eq!(id_or_dash(Some(42)), "42");
        assert_eq!(id_or_dash(None), "-");
    }
}
