//! Display helpers shared by the text digests

/// Round to whole units and group thousands with commas (`1234567.8` → `1,234,568`)
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Decimal rate to percent, dropping binary noise (`0.07` → `7`, not `7.000000000000001`)
pub fn rate_to_percent(rate: f64) -> f64 {
    if !rate.is_finite() {
        return rate * 100.0;
    }
    (rate * 100.0 * 1e10).round() / 1e10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.4), "999");
        assert_eq!(format_amount(1000.0), "1,000");
        assert_eq!(format_amount(1_234_567.8), "1,234,568");
        assert_eq!(format_amount(-440_000.0), "-440,000");
    }

    #[test]
    fn test_small_negative_rounds_to_zero() {
        assert_eq!(format_amount(-0.4), "0");
    }

    #[test]
    fn test_rate_to_percent_is_clean() {
        assert_eq!(rate_to_percent(0.07), 7.0);
        assert_eq!(rate_to_percent(0.05), 5.0);
        assert_eq!(rate_to_percent(0.035), 3.5);
        assert_eq!(rate_to_percent(-1.0), -100.0);
        assert_eq!(rate_to_percent(0.0), 0.0);
        assert_eq!(format!("{}%", rate_to_percent(0.07)), "7%");
    }
}
