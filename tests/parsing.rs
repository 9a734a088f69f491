use chrono::{TimeZone, Utc};
use serde_json::json;
use xueqiu_rs::parse_datetime;

#[test]
fn seconds_and_milliseconds_agree() {
    let from_secs = parse_datetime(&json!(1_514_764_800)).unwrap();
    let from_millis = parse_datetime(&json!(1_514_764_800_000i64)).unwrap();
    assert_eq!(from_secs, from_millis);
    assert_eq!(from_secs, Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap());
}

#[test]
fn fractional_seconds_survive_the_millis_heuristic() {
    let dt = parse_datetime(&json!(1_714_442_400_123i64)).unwrap();
    assert_eq!(dt.timestamp_millis(), 1_714_442_400_123);
}

#[test]
fn digit_strings_are_treated_as_epochs() {
    assert_eq!(
        parse_datetime(&json!("1514764800")),
        parse_datetime(&json!(1_514_764_800))
    );
    assert_eq!(
        parse_datetime(&json!("1514764800000")),
        parse_datetime(&json!(1_514_764_800))
    );
}

#[test]
fn iso_strings_parse_with_zulu_and_offsets() {
    let zulu = parse_datetime(&json!("2018-01-01T00:00:00Z")).unwrap();
    assert_eq!(zulu, Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap());

    let offset = parse_datetime(&json!("2018-01-01T08:00:00+08:00")).unwrap();
    assert_eq!(offset, zulu);
}

#[test]
fn naive_strings_are_assumed_utc() {
    let dt = parse_datetime(&json!("2018-01-01 08:30:00")).unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(2018, 1, 1, 8, 30, 0).unwrap());

    let midnight = parse_datetime(&json!("2018-01-01")).unwrap();
    assert_eq!(midnight, Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap());
}

#[test]
fn normalization_is_idempotent() {
    let first = parse_datetime(&json!(1_714_442_400_000i64)).unwrap();
    let second = parse_datetime(&json!(first.to_rfc3339())).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unparsable_inputs_yield_none() {
    assert_eq!(parse_datetime(&json!(null)), None);
    assert_eq!(parse_datetime(&json!("")), None);
    assert_eq!(parse_datetime(&json!("   ")), None);
    assert_eq!(parse_datetime(&json!("soon")), None);
    assert_eq!(parse_datetime(&json!(true)), None);
    assert_eq!(parse_datetime(&json!([1, 2])), None);
}
