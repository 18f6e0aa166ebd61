use super::*;

#[test]
fn short_date_drops_time_component() {
    assert_eq!(short_date("2024-05-01T10:00:00.000Z"), "2024-05-01");
    assert_eq!(short_date("2024-05-01"), "2024-05-01");
    assert_eq!(short_date(""), "");
}

#[test]
fn optional_date_is_empty_when_missing() {
    assert_eq!(optional_date(None), "");
    assert_eq!(optional_date(Some("2023-12-31T23:59:59Z")), "2023-12-31");
}

#[test]
fn count_label_picks_plural() {
    assert_eq!(count_label(0, "Comment", "Comments"), "0 Comments");
    assert_eq!(count_label(1, "Comment", "Comments"), "1 Comment");
    assert_eq!(count_label(12, "Comment", "Comments"), "12 Comments");
}
