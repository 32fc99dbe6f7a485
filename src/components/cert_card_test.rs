use super::*;

#[test]
fn validity_label_shows_range_with_expiry() {
    assert_eq!(
        validity_label("2023-05-15", Some("2026-05-15")),
        "May 2023 - May 2026"
    );
}

#[test]
fn validity_label_shows_issued_only_without_expiry() {
    assert_eq!(validity_label("2023-05-15", None), "Issued May 2023");
}

#[test]
fn validity_label_passes_through_unparsable_dates() {
    assert_eq!(validity_label("unknown", None), "Issued unknown");
}
