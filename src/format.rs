//! Display formatting for monetary amounts and percentages
//!
//! Presentation only. All projection arithmetic stays in full floating
//! point; rounding happens here, at the edge.

use serde::{Deserialize, Serialize};

/// Display currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "JPY")]
    Jpy,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "TWD")]
    Twd,
}

impl Currency {
    /// Currency symbol used as display prefix
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Jpy => "¥",
            Currency::Usd => "$",
            Currency::Twd => "NT$",
        }
    }
}

/// Format a monetary amount: rounded to whole units, thousands-grouped,
/// symbol-prefixed (`-¥1,234` for negatives)
pub fn format_currency(value: f64, currency: Currency) -> String {
    let rounded = value.round() as i64;
    let grouped = group_thousands(rounded.unsigned_abs());
    let sign = if rounded < 0 { "-" } else { "" };

    format!("{sign}{}{grouped}", currency.symbol())
}

/// Format a percentage with a fixed number of decimals
pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

fn group_thousands(mut value: u64) -> String {
    let mut groups = Vec::new();
    loop {
        let group = value % 1000;
        value /= 1000;
        if value == 0 {
            groups.push(group.to_string());
            break;
        }
        groups.push(format!("{group:03}"));
    }

    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(0.0, Currency::Jpy), "¥0");
        assert_eq!(format_currency(999.0, Currency::Jpy), "¥999");
        assert_eq!(format_currency(1_000.0, Currency::Jpy), "¥1,000");
        assert_eq!(format_currency(7_000_000.0, Currency::Jpy), "¥7,000,000");
        assert_eq!(format_currency(1_234_567.0, Currency::Usd), "$1,234,567");
    }

    #[test]
    fn test_currency_rounds_fractions() {
        assert_eq!(format_currency(1_050_000.4, Currency::Jpy), "¥1,050,000");
        assert_eq!(format_currency(1_050_000.5, Currency::Jpy), "¥1,050,001");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_currency(-1_234.0, Currency::Twd), "-NT$1,234");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(format_percentage(7.5, 2), "7.50%");
        assert_eq!(format_percentage(0.0, 2), "0.00%");
        assert_eq!(format_percentage(12.3456, 1), "12.3%");
    }
}
