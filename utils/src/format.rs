//! Number formatting for widget labels.
//!
//! Grouping uses `,` every three digits and `.` as the decimal point.

/// Inserts a `,` every three digits, counting from the right.
///
/// Leading zeros are kept, so `"0000"` becomes `"0,000"`.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Zero-pads `num` to `pad_to` digits, then groups by thousands.
///
/// # Example
/// ```
/// assert_eq!(utils::format_decimals(42, 16), "0,000,000,000,000,042");
/// assert_eq!(utils::format_decimals(7, 2), "07");
/// ```
pub fn format_decimals(num: u64, pad_to: usize) -> String {
    group_thousands(&format!("{:0>width$}", num, width = pad_to))
}

pub fn format_one_decimal(value: f64) -> String {
    format_fixed(value, 1)
}

pub fn format_zero_decimals(value: f64) -> String {
    format_fixed(value, 0)
}

/// Formats a fraction (`0.25`) as a whole percentage (`"25%"`).
pub fn format_percent_no_decimals(fraction: f64) -> String {
    format!("{}%", format_zero_decimals(fraction * 100.0))
}

/// Rounds towards negative infinity at one decimal.
pub fn floor_one_digit(value: f64) -> f64 {
    (value * 10.0).floor() / 10.0
}

fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Half away from zero, like the dashboard's number formatter.
    let scale = 10f64.powi(decimals as i32);
    let mut rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        rounded = 0.0;
    }

    let fixed = format!("{:.prec$}", rounded.abs(), prec = decimals);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::new();
    if rounded < 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(""), "");
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("119144277"), "119,144,277");
        assert_eq!(group_thousands("0000000000000000"), "0,000,000,000,000,000");
    }

    #[test]
    fn test_format_decimals() {
        assert_eq!(format_decimals(0, 2), "00");
        assert_eq!(format_decimals(85, 2), "85");
        assert_eq!(format_decimals(0, 16), "0,000,000,000,000,000");
        assert_eq!(
            format_decimals(8_326_743_920_488_300, 16),
            "8,326,743,920,488,300"
        );
        assert_eq!(format_decimals(1_234, 16), "0,000,000,000,001,234");
        // Wider than the pad width is left alone.
        assert_eq!(format_decimals(123_456, 2), "123,456");
    }

    #[test]
    fn test_format_one_decimal() {
        assert_eq!(format_one_decimal(0.0), "0.0");
        assert_eq!(format_one_decimal(1.25), "1.3");
        assert_eq!(format_one_decimal(1234.56), "1,234.6");
        assert_eq!(format_one_decimal(-1234.56), "-1,234.6");
        assert_eq!(format_one_decimal(-0.04), "0.0");
    }

    #[test]
    fn test_format_zero_decimals() {
        assert_eq!(format_zero_decimals(0.5), "1");
        assert_eq!(format_zero_decimals(2.5), "3");
        assert_eq!(format_zero_decimals(1_234_567.4), "1,234,567");
        assert_eq!(format_zero_decimals(f64::INFINITY), "inf");
    }

    #[test]
    fn test_format_percent_no_decimals() {
        assert_eq!(format_percent_no_decimals(0.25), "25%");
        assert_eq!(format_percent_no_decimals(0.084), "8%");
        assert_eq!(format_percent_no_decimals(1.0), "100%");
    }

    #[test]
    fn test_floor_one_digit() {
        assert_eq!(floor_one_digit(3.99), 3.9);
        assert_eq!(floor_one_digit(12.0), 12.0);
    }
}
