// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date and number formatting.

use chrono::NaiveDate;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Render `YYYY-MM-DD` as `"January 15, 2025"`.
///
/// Input that is not three dash-separated parts with an integer month and
/// day is returned unchanged, so already-formatted labels pass through.
/// A month outside 1..=12 renders as `"Unknown"`. The year segment is
/// copied verbatim.
pub fn format_date_label(date: &str) -> String {
    let parts: Vec<&str> = date.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return date.to_string();
    };

    let (Ok(month), Ok(day)) = (month.parse::<i32>(), day.parse::<i32>()) else {
        return date.to_string();
    };

    let month_name = usize::try_from(month)
        .ok()
        .and_then(|m| m.checked_sub(1))
        .and_then(|idx| MONTH_NAMES.get(idx))
        .copied()
        .unwrap_or("Unknown");

    format!("{} {}, {}", month_name, day, year)
}

/// Parse a strict ISO calendar date (`YYYY-MM-DD`).
pub fn parse_iso_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Format a count with comma thousands separators (`11650` -> `"11,650"`).
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
