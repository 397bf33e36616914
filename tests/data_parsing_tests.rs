use chrono::{TimeZone, Utc};
use line_chart::ChartError;
use line_chart::core::{DataPoint, DataRecord, format_datetime, parse_calendar_date, parse_records};
use rust_decimal::Decimal;

#[test]
fn calendar_dates_resolve_to_midnight_utc() {
    let expected = Utc
        .with_ymd_and_hms(2021, 1, 2, 0, 0, 0)
        .single()
        .expect("valid date");

    for input in ["2021-01-02", "2021/01/02", "01/02/2021", " 2021-01-02 "] {
        assert_eq!(parse_calendar_date(input).expect(input), expected, "{input}");
    }
}

#[test]
fn timestamps_keep_their_time_of_day() {
    let expected = Utc
        .with_ymd_and_hms(2021, 1, 2, 13, 45, 10)
        .single()
        .expect("valid date");

    for input in [
        "2021-01-02T13:45:10Z",
        "2021-01-02T15:45:10+02:00",
        "2021-01-02T13:45:10",
        "2021-01-02 13:45:10",
    ] {
        assert_eq!(parse_calendar_date(input).expect(input), expected, "{input}");
    }
}

#[test]
fn unparseable_dates_are_rejected() {
    for input in ["", "yesterday", "2021-13-01", "32/01/2021"] {
        let err = parse_calendar_date(input).expect_err(input);
        assert!(matches!(err, ChartError::InvalidDate { .. }), "{input}");
    }
}

#[test]
fn records_parse_from_json_array() {
    let records = DataRecord::parse_json_array(
        r#"[{"date": "2021-01-01", "value": 10}, {"date": "2021-01-02", "value": 20.5}]"#,
    )
    .expect("records");
    let points = parse_records(&records).expect("points");

    assert_eq!(points.len(), 2);
    assert_eq!(points[1].value, 20.5);
    assert_eq!(
        points[1].time,
        Utc.with_ymd_and_hms(2021, 1, 2, 0, 0, 0)
            .single()
            .expect("valid date")
    );
}

#[test]
fn malformed_json_is_invalid_data() {
    let err = DataRecord::parse_json_array(r#"[{"date": "2021-01-01"}]"#).expect_err("missing value");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn first_bad_record_fails_the_batch() {
    let records = vec![
        DataRecord::new("2021-01-01", 1.0),
        DataRecord::new("not a date", 2.0),
    ];
    let err = parse_records(&records).expect_err("invalid date");
    assert!(matches!(err, ChartError::InvalidDate { input } if input == "not a date"));
}

#[test]
fn non_finite_values_are_rejected() {
    assert!(DataPoint::parse("2021-01-01", f64::NAN).is_err());
    assert!(DataPoint::parse("2021-01-01", f64::INFINITY).is_err());
}

#[test]
fn decimal_values_convert_to_points() {
    let time = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).single().expect("valid date");
    let point = DataPoint::from_decimal_value(time, Decimal::new(12_345, 2)).expect("point");
    assert!((point.value - 123.45).abs() <= 1e-12);
}

#[test]
fn datetime_formatting_matches_pattern() {
    let time = Utc.with_ymd_and_hms(2021, 3, 7, 0, 0, 0).single().expect("valid date");
    assert_eq!(format_datetime(time, "%m/%d/%y").expect("format"), "03/07/21");
    assert!(format_datetime(time, "%Q").is_err());
}
