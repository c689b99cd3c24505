use chrono::{Days, NaiveDate, NaiveDateTime};

/// Formats accepted when the input has no `/` or `-` separator.
const FREEFORM_FORMATS: &[&str] = &["%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%d %b %Y", "%Y.%m.%d"];

/// Parse a `date_added` value into a calendar date.
///
/// Accepts `YYYY-MM-DD`, `DD-MM-YYYY` and `DD/MM/YYYY`, plus a handful of
/// spelled-out forms (`March 5, 2024`). Returns `None` for empty or
/// unrecognised input; every failure branch yields `None`, never an epoch date.
pub fn parse(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if value.contains('/') {
        // Trailing segments after the year are ignored.
        return from_day_month_year(value.split('/').take(3));
    }

    if value.contains('-') {
        let first = value.split('-').next().unwrap_or_default();
        if value.len() == 10 && first.len() == 4 {
            return NaiveDate::parse_from_str(value, "%Y-%m-%d").ok();
        }
        return from_day_month_year(value.split('-'));
    }

    FREEFORM_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Parse an optional value, treating `None` the same as an empty string.
pub fn parse_opt(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(parse)
}

/// Build a date from exactly three `day, month, year` segments.
fn from_day_month_year<'a>(segments: impl Iterator<Item = &'a str>) -> Option<NaiveDate> {
    let parts: Vec<&str> = segments.map(str::trim).collect();
    if parts.len() != 3 {
        return None;
    }

    let day = parts[0].parse::<u32>().ok()?;
    let month = parts[1].parse::<u32>().ok()?;
    let year = parts[2].parse::<i32>().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// First day still inside a trailing window of `window_days` days.
///
/// The reference instant is moved back by `window_days` and truncated to the
/// start of that day, so a date exactly `window_days` before the reference
/// is inside the window.
pub fn window_cutoff(reference: NaiveDateTime, window_days: u32) -> NaiveDate {
    days_before(reference.date(), u64::from(window_days))
}

/// `date` moved back by `days`, saturating at the earliest representable date.
pub fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
}

/// Format a date the way the payload data files write it (`DD-MM-YYYY`).
pub fn format_day_month_year(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}
