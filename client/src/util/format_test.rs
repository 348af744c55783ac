use super::*;

#[test]
fn score_uses_one_decimal() {
    assert_eq!(format_score(8.26), "8.3");
    assert_eq!(format_score(7.0), "7.0");
    assert_eq!(format_score(0.0), "0.0");
    assert_eq!(format_score(9.97), "10.0");
}

#[test]
fn sql_timestamp_formats_as_ru_date() {
    assert_eq!(format_date("2026-10-01 09:15:00"), "01.10.2026");
    assert_eq!(format_date_time("2026-10-01 09:15:00"), "01.10.2026, 09:15:00");
}

#[test]
fn iso_timestamp_with_fraction() {
    assert_eq!(format_date_time("2026-03-07T18:04:05.123456"), "07.03.2026, 18:04:05");
}

#[test]
fn rfc3339_keeps_wall_clock_of_its_offset() {
    assert_eq!(format_date_time("2026-03-07T18:04:05+03:00"), "07.03.2026, 18:04:05");
    assert_eq!(format_date("2026-03-07T23:59:59Z"), "07.03.2026");
}

#[test]
fn bare_date() {
    assert_eq!(format_date("2026-12-31"), "31.12.2026");
    assert_eq!(format_date_time("2026-12-31"), "31.12.2026, 00:00:00");
}

#[test]
fn unparsable_input_is_shown_verbatim() {
    assert_eq!(format_date("вчера"), "вчера");
    assert_eq!(format_date_time(""), "");
}

#[test]
fn schedule_preview_pads() {
    assert_eq!(schedule_preview(9, 0), "09:00");
    assert_eq!(schedule_preview(14, 5), "14:05");
}
