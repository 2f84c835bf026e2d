//! Parsing of Xero-rendered cell values and header labels.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Parses a rendered currency value into a `Decimal`.
///
/// Strips every character other than digits, `.` and `-` before parsing,
/// so "$1,234.50" parses as 1234.50. Absent or unparseable input yields
/// zero, matching how blank report cells are treated.
#[must_use]
pub fn parse_money(raw: Option<&str>) -> Decimal {
    let Some(raw) = raw else {
        return Decimal::ZERO;
    };

    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}

/// Derives the period-end date from a "DD Mon YY" header label.
///
/// Two-digit years are assumed to be in the 2000s: "31 Aug 25" becomes
/// 2025-08-31. Labels not matching the form derive no date.
#[must_use]
pub fn period_end_from_label(label: &str) -> Option<NaiveDate> {
    let mut parts = label.split_whitespace();
    let day: u32 = parts.next()?.parse().ok()?;
    let month = month_number(parts.next()?)?;
    let year: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || year >= 100 {
        return None;
    }

    NaiveDate::from_ymd_opt(2000 + year, month, day)
}

fn month_number(abbrev: &str) -> Option<u32> {
    let n = match abbrev.to_ascii_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(n)
}
