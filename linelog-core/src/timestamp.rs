use chrono::{Local, NaiveDateTime};

/// Layout of the timestamp prefix, millisecond precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Current local time formatted with [`TIMESTAMP_FORMAT`].
pub fn format_timestamp() -> String {
    format_timestamp_at(&Local::now().naive_local())
}

pub fn format_timestamp_at(time: &NaiveDateTime) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

#[test]
fn test_format_timestamp_at() {
    let time = chrono::NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_milli_opt(7, 5, 3, 42)
        .unwrap();
    assert_eq!(format_timestamp_at(&time), "2024-03-09 07:05:03.042");
}

#[test]
fn test_format_timestamp_shape() {
    let stamp = format_timestamp();
    assert_eq!(stamp.len(), "YYYY-MM-DD HH:MM:SS.mmm".len());
    assert!(stamp.starts_with(|c: char| c.is_ascii_digit()));
    assert_eq!(&stamp[4..5], "-");
    assert_eq!(&stamp[10..11], " ");
    assert_eq!(&stamp[19..20], ".");
}
