use super::*;

// =============================================================
// format_date
// =============================================================

#[test]
fn format_date_handles_full_timestamp() {
    assert_eq!(format_date("2024-03-07T09:00:00Z"), "Mar 7, 2024");
}

#[test]
fn format_date_handles_bare_date() {
    assert_eq!(format_date("2023-12-25"), "Dec 25, 2023");
}

#[test]
fn format_date_strips_leading_zero_from_day() {
    assert_eq!(format_date("2024-01-05"), "Jan 5, 2024");
}

#[test]
fn format_date_falls_back_to_raw_input() {
    assert_eq!(format_date("yesterday"), "yesterday");
    assert_eq!(format_date("2024-13-01"), "2024-13-01");
    assert_eq!(format_date(""), "");
}

// =============================================================
// month_year
// =============================================================

#[test]
fn month_year_drops_the_day() {
    assert_eq!(month_year("2023-05-15"), "May 2023");
    assert_eq!(month_year("2026-11-01T00:00:00Z"), "Nov 2026");
}

#[test]
fn month_year_falls_back_to_raw_input() {
    assert_eq!(month_year("soon"), "soon");
}

// =============================================================
// reading_time_label
// =============================================================

#[test]
fn reading_time_label_formats_minutes() {
    assert_eq!(reading_time_label(Some(5)).as_deref(), Some("5 min read"));
    assert_eq!(reading_time_label(Some(1)).as_deref(), Some("1 min read"));
}

#[test]
fn reading_time_label_skips_missing_or_zero() {
    assert_eq!(reading_time_label(None), None);
    assert_eq!(reading_time_label(Some(0)), None);
    assert_eq!(reading_time_label(Some(-3)), None);
}
