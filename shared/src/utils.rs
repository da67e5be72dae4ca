//! # Display Formatting Helpers
//!
//! Pure formatting and arithmetic helpers shared by every view. All money
//! values are USD; the abbreviation ladders (K/M/B) follow what the
//! backend's own dashboards display.

use chrono::{DateTime, Utc};

/// Format a coin price with magnitude abbreviation.
///
/// Prices of $1M and above are shown in millions, $1K and above in
/// thousands, $1 and above with cents, and sub-dollar prices with six
/// decimals so small-cap coins stay legible.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_price;
///
/// assert_eq!(format_price(999.0), "$999.00");
/// assert_eq!(format_price(1500.0), "$1.50K");
/// assert_eq!(format_price(0.5), "$0.500000");
/// ```
pub fn format_price(price: f64) -> String {
    if price >= 1_000_000.0 {
        format!("${:.2}M", price / 1_000_000.0)
    } else if price >= 1_000.0 {
        format!("${:.2}K", price / 1_000.0)
    } else if price >= 1.0 {
        format!("${:.2}", price)
    } else {
        format!("${:.6}", price)
    }
}

/// Format a 24h volume or market cap, with a billions tier on top of the
/// [`format_price`] ladder.
pub fn format_volume(volume: f64) -> String {
    if volume >= 1_000_000_000.0 {
        format!("${:.2}B", volume / 1_000_000_000.0)
    } else if volume >= 1_000_000.0 {
        format!("${:.2}M", volume / 1_000_000.0)
    } else if volume >= 1_000.0 {
        format!("${:.2}K", volume / 1_000.0)
    } else {
        format!("${:.2}", volume)
    }
}

/// Format a percentage with an explicit sign.
///
/// ```rust
/// use shared::utils::format_percentage;
///
/// assert_eq!(format_percentage(2.0), "+2.00%");
/// assert_eq!(format_percentage(-3.456), "-3.46%");
/// ```
pub fn format_percentage(percentage: f64) -> String {
    let sign = if percentage >= 0.0 { "+" } else { "" };
    format!("{}{:.2}%", sign, percentage)
}

/// Format a USD amount with thousands separators and two decimals.
///
/// ```rust
/// use shared::utils::format_currency;
///
/// assert_eq!(format_currency(1234.5), "$1,234.50");
/// assert_eq!(format_currency(-42.0), "-$42.00");
/// ```
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}${}.{:02}", if negative { "-" } else { "" }, grouped, frac)
}

/// Format an RFC 3339 timestamp as e.g. `"Jan 2, 2026 15:04"`.
///
/// Unparseable input is returned as-is rather than dropped, so a server
/// bug still leaves something visible in the UI.
pub fn format_date(date: &str) -> String {
    match DateTime::parse_from_rfc3339(date) {
        Ok(dt) => dt.format("%b %-d, %Y %H:%M").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Human-readable elapsed time since an RFC 3339 timestamp.
pub fn format_time_ago(date: &str) -> String {
    let then = match DateTime::parse_from_rfc3339(date) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(_) => return date.to_string(),
    };
    let seconds = (Utc::now() - then).num_seconds().max(0);

    let (value, unit) = if seconds >= 86_400 {
        (seconds / 86_400, "day")
    } else if seconds >= 3_600 {
        (seconds / 3_600, "hour")
    } else if seconds >= 60 {
        (seconds / 60, "minute")
    } else {
        (seconds, "second")
    };

    let plural = if value == 1 { "" } else { "s" };
    format!("{} {}{} ago", value, unit, plural)
}

/// Unrealized profit and loss for a position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pnl {
    pub pnl: f64,
    pub pnl_percentage: f64,
}

/// Compute unrealized P&L for a holding.
///
/// ```rust
/// use shared::utils::calculate_pnl;
///
/// let pnl = calculate_pnl(10.0, 100.0, 150.0);
/// assert_eq!(pnl.pnl, 500.0);
/// assert_eq!(pnl.pnl_percentage, 50.0);
/// ```
pub fn calculate_pnl(quantity: f64, average_price: f64, current_price: f64) -> Pnl {
    let invested = quantity * average_price;
    let current = quantity * current_price;
    let pnl = current - invested;
    let pnl_percentage = if invested == 0.0 {
        0.0
    } else {
        pnl / invested * 100.0
    };
    Pnl {
        pnl,
        pnl_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_ladder() {
        assert_eq!(format_price(999.0), "$999.00");
        assert_eq!(format_price(1500.0), "$1.50K");
        assert_eq!(format_price(2_500_000.0), "$2.50M");
        assert_eq!(format_price(0.5), "$0.500000");
        assert_eq!(format_price(1.0), "$1.00");
    }

    #[test]
    fn volume_ladder_has_billions() {
        assert_eq!(format_volume(3_200_000_000.0), "$3.20B");
        assert_eq!(format_volume(450_000_000.0), "$450.00M");
        assert_eq!(format_volume(999.0), "$999.00");
    }

    #[test]
    fn percentage_carries_sign() {
        assert_eq!(format_percentage(2.0), "+2.00%");
        assert_eq!(format_percentage(-3.456), "-3.46%");
        assert_eq!(format_percentage(0.0), "+0.00%");
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(-42.0), "-$42.00");
    }

    #[test]
    fn date_formatting_survives_garbage() {
        assert_eq!(format_date("2026-01-02T15:04:05Z"), "Jan 2, 2026 15:04");
        assert_eq!(format_date("not a date"), "not a date");
    }

    #[test]
    fn time_ago_picks_largest_unit() {
        let two_hours = (Utc::now() - chrono::Duration::hours(2)).to_rfc3339();
        assert_eq!(format_time_ago(&two_hours), "2 hours ago");
        let one_minute = (Utc::now() - chrono::Duration::seconds(61)).to_rfc3339();
        assert_eq!(format_time_ago(&one_minute), "1 minute ago");
    }

    #[test]
    fn pnl_math() {
        let pnl = calculate_pnl(10.0, 100.0, 150.0);
        assert_eq!(pnl, Pnl { pnl: 500.0, pnl_percentage: 50.0 });

        let loss = calculate_pnl(2.0, 50.0, 40.0);
        assert_eq!(loss.pnl, -20.0);
        assert_eq!(loss.pnl_percentage, -20.0);
    }

    #[test]
    fn pnl_with_zero_investment_is_flat() {
        let pnl = calculate_pnl(0.0, 0.0, 150.0);
        assert_eq!(pnl.pnl, 0.0);
        assert_eq!(pnl.pnl_percentage, 0.0);
    }
}
