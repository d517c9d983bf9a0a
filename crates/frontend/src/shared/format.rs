//! Display formatting shared by list columns.

use chrono::{DateTime, NaiveDate};

/// "2024-03-15T14:02:26.123Z" or "2024-03-15" -> "15 Mar 2024".
/// Anything else is shown as sent; missing values as "-".
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return "-".to_string();
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d %b %Y").to_string();
    }
    let date_part = raw.split('T').next().unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Rupee amount with two decimals and Indian digit grouping: "₹1,23,456.50".
pub fn format_money(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let (whole, fraction) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, last3) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (left, right) = rest.split_at(rest.len() - 2);
            groups.push(right);
            rest = left;
        }
        groups.push(rest);
        groups.reverse();
        format!("{},{last3}", groups.join(","))
    };
    format!("{sign}₹{grouped}.{fraction:02}")
}

/// Today's date in the browser's timezone.
pub fn today() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
}

/// Optional number, `-` when absent.
pub fn format_optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates() {
        assert_eq!(format_date(Some("2024-03-15T14:02:26.123Z")), "15 Mar 2024");
        assert_eq!(format_date(Some("2024-12-31")), "31 Dec 2024");
        assert_eq!(format_date(Some("yesterday")), "yesterday");
        assert_eq!(format_date(None), "-");
        assert_eq!(format_date(Some("  ")), "-");
    }

    #[test]
    fn money_uses_indian_grouping() {
        assert_eq!(format_money(0.0), "₹0.00");
        assert_eq!(format_money(999.5), "₹999.50");
        assert_eq!(format_money(1234.0), "₹1,234.00");
        assert_eq!(format_money(123456.5), "₹1,23,456.50");
        assert_eq!(format_money(12345678.0), "₹1,23,45,678.00");
        assert_eq!(format_money(-50.25), "-₹50.25");
    }

    #[test]
    fn optional_values() {
        assert_eq!(format_optional(Some(5u32)), "5");
        assert_eq!(format_optional(None::<u32>), "-");
    }
}
