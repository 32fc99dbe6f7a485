//! Display formatting for API timestamps and reading time.
//!
//! DESIGN
//! ======
//! The API sends ISO 8601 strings; parsing here is deliberately shallow
//! (year-month-day prefix only) and falls back to the raw input rather
//! than failing, so a malformed timestamp never breaks a page.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn parse_ymd(iso: &str) -> Option<(String, u32, u32)> {
    let date_part = iso.split('T').next().unwrap_or(iso);
    let mut parts = date_part.splitn(3, '-');
    let year = parts.next()?.to_owned();
    let month = parts.next()?.parse::<u32>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;
    if year.is_empty() {
        return None;
    }
    Some((year, month, day))
}

fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTH_NAMES.get(index).copied()
}

/// Format an ISO date or timestamp as e.g. `"Mar 7, 2024"`.
/// Returns the input unchanged when it does not parse.
pub fn format_date(iso: &str) -> String {
    let Some((year, month, day)) = parse_ymd(iso) else {
        return iso.to_owned();
    };
    match month_name(month) {
        Some(name) => format!("{name} {day}, {year}"),
        None => iso.to_owned(),
    }
}

/// Format an ISO date or timestamp as e.g. `"Mar 2024"`.
/// Returns the input unchanged when it does not parse.
pub fn month_year(iso: &str) -> String {
    let Some((year, month, _)) = parse_ymd(iso) else {
        return iso.to_owned();
    };
    match month_name(month) {
        Some(name) => format!("{name} {year}"),
        None => iso.to_owned(),
    }
}

/// Human label for a post's estimated reading time, e.g. `"5 min read"`.
/// `None` when the estimate is absent or non-positive.
pub fn reading_time_label(minutes: Option<i64>) -> Option<String> {
    minutes
        .filter(|m| *m > 0)
        .map(|m| format!("{m} min read"))
}
