//! Numeric formatting for G-code words
//!
//! Two renderings are used, both shortest round-trip decimal and never in
//! exponent notation:
//! - coordinates (`X`, `Y`) always carry at least one fractional digit
//! - scalars (`Z`, `P`, the diameter in file names) drop a zero fraction
//!
//! Negative zero renders as zero in both.

/// Render an X/Y coordinate, e.g. `10.0`, `-5.0`, `3.5`
pub fn format_coordinate(value: f64) -> String {
    let text = format_scalar(value);
    if value.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}

/// Render a scalar setting, e.g. `25`, `2`, `0.8`
pub fn format_scalar(value: f64) -> String {
    if value == 0.0 {
        // folds -0.0
        return "0".to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_keep_fraction() {
        assert_eq!(format_coordinate(10.0), "10.0");
        assert_eq!(format_coordinate(-5.0), "-5.0");
        assert_eq!(format_coordinate(3.5), "3.5");
        assert_eq!(format_coordinate(-133.313), "-133.313");
        assert_eq!(format_coordinate(0.0), "0.0");
        assert_eq!(format_coordinate(-0.0), "0.0");
    }

    #[test]
    fn test_scalars_drop_zero_fraction() {
        assert_eq!(format_scalar(25.0), "25");
        assert_eq!(format_scalar(2.0), "2");
        assert_eq!(format_scalar(0.8), "0.8");
        assert_eq!(format_scalar(-0.0), "0");
    }

    #[test]
    fn test_no_exponent_notation() {
        assert_eq!(format_coordinate(1e-7), "0.0000001");
        assert_eq!(format_scalar(1e16), "10000000000000000");
        assert_eq!(format_coordinate(1e16), "10000000000000000.0");
    }

    #[test]
    fn test_shortest_round_trip() {
        assert_eq!(format_coordinate(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_scalar(2.54), "2.54");
    }
}
