//! Human-readable byte sizes.

const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count with 1024-based units and two decimals.
///
/// Negative counts keep their sign, so a file that grew reads as
/// `-1.50 KB`.
///
/// # Examples
/// ```
/// use optipngp::utils::format::format_bytes;
/// assert_eq!(format_bytes(512), "512.00 B");
/// assert_eq!(format_bytes(1536), "1.50 KB");
/// ```
pub fn format_bytes(bytes: i64) -> String {
    let mut value = bytes as f64;
    for unit in &UNITS[..UNITS.len() - 1] {
        if value.abs() < 1024.0 {
            return format!("{:.2} {}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.2} {}", value, UNITS[UNITS.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        assert_eq!(format_bytes(0), "0.00 B");
        assert_eq!(format_bytes(1023), "1023.00 B");
    }

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1024 * 1024), "1.00 MB");
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024), "5.00 GB");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_bytes(-1536), "-1.50 KB");
        assert_eq!(format_bytes(-10), "-10.00 B");
    }

    #[test]
    fn test_largest_unit_caps_at_exabytes_for_i64() {
        assert_eq!(format_bytes(i64::MAX), "8.00 EB");
    }
}
