//! Human-readable byte formatting.
//!
//! Every size shown anywhere on the site (file rows, stats strip, progress
//! header) goes through [`format_size`] so the rendering stays uniform:
//! base 1024, at most two decimals, trailing zeros trimmed.

/// Display units, base 1024. Anything at or above 1024 GB clamps to GB.
const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count for display.
///
/// ```
/// use pdfsmith::format_size;
///
/// assert_eq!(format_size(0), "0 Bytes");
/// assert_eq!(format_size(1536), "1.5 KB");
/// assert_eq!(format_size(2 * 1024 * 1024), "2 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{} {}", trim_decimals(size), UNITS[unit])
}

/// Render with two decimals, then drop trailing zeros and a dangling dot
/// ("2.00" becomes "2", "2.50" becomes "2.5").
fn trim_decimals(value: f64) -> String {
    let rendered = format!("{:.2}", value);
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(format_size(0), "0 Bytes");
    }

    #[test]
    fn test_sub_kilobyte_stays_in_bytes() {
        assert_eq!(format_size(500), "500 Bytes");
        assert_eq!(format_size(1023), "1023 Bytes");
    }

    #[test]
    fn test_round_values_trim_decimals() {
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(2 * 1024 * 1024), "2 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_fractional_values_keep_significant_decimals() {
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(2_621_440), "2.5 MB");
        assert_eq!(format_size(2_000_000), "1.91 MB");
    }

    #[test]
    fn test_huge_values_clamp_to_gb() {
        // 2 TB still renders in GB rather than running off the unit table.
        assert_eq!(format_size(2 * 1024 * 1024 * 1024 * 1024), "2048 GB");
    }
}
