//! Number formatting helpers shared by narrative text and the PDF renderer.

/// Format an integer with thousands separators: `12500` -> `"12,500"`.
pub fn format_count(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a signed delta: `42` -> `"+42"`, `-7` -> `"-7"`.
pub fn format_signed(value: i64) -> String {
    if value >= 0 {
        format!("+{}", format_count(value))
    } else {
        format_count(value)
    }
}

/// Format an optional ratio as a whole percentage, `"n/a"` when absent.
pub fn format_percent(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{}%", (r * 100.0).round() as i64),
        None => "n/a".to_string(),
    }
}

/// Format an optional ratio as a signed whole percentage.
pub fn format_signed_percent(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => {
            let pct = (r * 100.0).round() as i64;
            if pct >= 0 {
                format!("+{pct}%")
            } else {
                format!("{pct}%")
            }
        }
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(12500), "12,500");
        assert_eq!(format_count(2_000_000), "2,000,000");
        assert_eq!(format_count(-1234), "-1,234");
    }

    #[test]
    fn test_format_signed() {
        assert_eq!(format_signed(42), "+42");
        assert_eq!(format_signed(-1300), "-1,300");
        assert_eq!(format_signed(0), "+0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(0.4)), "40%");
        assert_eq!(format_percent(None), "n/a");
        assert_eq!(format_signed_percent(Some(0.1)), "+10%");
        assert_eq!(format_signed_percent(Some(-0.25)), "-25%");
    }
}
