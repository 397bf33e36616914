use approx::assert_relative_eq;
use chrono::{DateTime, TimeZone, Utc};
use line_chart::ChartError;
use line_chart::core::{DataPoint, LinearScale, TimeInterval, TimeScale, ValueScale};

fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid date")
}

fn point(year: i32, month: u32, day: u32, value: f64) -> DataPoint {
    DataPoint::new(utc(year, month, day), value).expect("valid point")
}

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new((10.0, 110.0), (0.0, 1000.0)).expect("valid scale");

    let px = scale.apply(42.5);
    assert_relative_eq!(px, 325.0, epsilon = 1e-9);
    assert_relative_eq!(scale.invert(px), 42.5, epsilon = 1e-9);
}

#[test]
fn zero_width_domain_is_rejected() {
    assert!(LinearScale::new((5.0, 5.0), (0.0, 100.0)).is_err());
    assert!(LinearScale::new((f64::NAN, 1.0), (0.0, 100.0)).is_err());
}

#[test]
fn collapsed_range_inverts_to_domain_midpoint() {
    let scale = LinearScale::new((0.0, 10.0), (50.0, 50.0)).expect("valid scale");
    assert_relative_eq!(scale.invert(50.0), 5.0);
}

#[test]
fn linear_ticks_use_round_steps() {
    let scale = LinearScale::new((0.0, 1.0), (0.0, 100.0)).expect("valid scale");
    let ticks = scale.ticks(10);
    assert_eq!(ticks.len(), 11);
    assert_relative_eq!(ticks[3], 0.3, epsilon = 1e-12);
    assert_relative_eq!(scale.tick_step(10), 0.1, epsilon = 1e-12);

    let scale = LinearScale::new((0.0, 100.0), (0.0, 100.0)).expect("valid scale");
    assert_eq!(scale.ticks(5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
}

#[test]
fn value_scale_pads_and_inverts_domain() {
    let scale = ValueScale::new(10.0, 20.0, (20.0, 365.0)).expect("valid scale");

    assert_eq!(scale.domain(), (21.0, 9.0));
    assert_relative_eq!(scale.apply(21.0), 20.0);
    assert_relative_eq!(scale.apply(9.0), 365.0);
    assert!(scale.apply(20.0) < scale.apply(10.0));
    assert_relative_eq!(scale.apply(10.0), 336.25, epsilon = 1e-9);
}

#[test]
fn value_scale_with_constant_values_stays_invertible() {
    let points = vec![point(2021, 1, 1, 7.0), point(2021, 1, 2, 7.0)];
    let scale = ValueScale::from_points(&points, (0.0, 100.0)).expect("valid scale");

    assert_eq!(scale.domain(), (8.0, 6.0));
    assert_relative_eq!(scale.apply(7.0), 50.0);
}

#[test]
fn huge_constant_values_still_get_a_usable_domain() {
    let points = vec![point(2021, 1, 1, 1e17), point(2021, 1, 2, 1e17)];
    let scale = ValueScale::from_points(&points, (0.0, 100.0)).expect("valid scale");

    let (top, bottom) = scale.domain();
    assert!(top.is_finite() && bottom.is_finite());
    assert!(top > 1e17 && bottom < 1e17);
    let px = scale.apply(1e17);
    assert!(px > 0.0 && px < 100.0, "{px}");

    let single = ValueScale::from_points(&[point(2021, 1, 1, -3e20)], (0.0, 100.0));
    assert!(single.is_ok());
}

#[test]
fn value_extent_wider_than_f64_is_rejected() {
    assert!(matches!(
        ValueScale::new(-1e308, 1e308, (0.0, 100.0)),
        Err(ChartError::InvalidData(_))
    ));
    assert!(ValueScale::new(f64::MAX, f64::MAX, (0.0, 100.0)).is_err());
    assert!(ValueScale::new(-8e307, 8e307, (0.0, 100.0)).is_ok());
}

#[test]
fn value_ticks_cover_padded_domain() {
    let scale = ValueScale::new(10.0, 20.0, (20.0, 365.0)).expect("valid scale");
    let ticks = scale.ticks(10);

    assert_eq!(ticks.first().copied(), Some(9.0));
    assert_eq!(ticks.last().copied(), Some(21.0));
    assert_eq!(ticks.len(), 13);
}

#[test]
fn time_scale_fits_data_extent() {
    let points = vec![
        point(2021, 1, 1, 10.0),
        point(2021, 1, 2, 20.0),
        point(2021, 1, 3, 15.0),
    ];
    let scale = TimeScale::from_points(&points, (20.0, 680.0)).expect("valid scale");

    let (start, end) = scale.domain().expect("domain");
    assert_eq!(start, utc(2021, 1, 1));
    assert_eq!(end, utc(2021, 1, 3));
    assert_relative_eq!(scale.apply(utc(2021, 1, 1)), 20.0);
    assert_relative_eq!(scale.apply(utc(2021, 1, 2)), 350.0);
    assert_relative_eq!(scale.apply(utc(2021, 1, 3)), 680.0);
}

#[test]
fn time_scale_inverts_pixels_to_dates() {
    let scale =
        TimeScale::new(utc(2021, 1, 1), utc(2021, 1, 11), (0.0, 1000.0)).expect("valid scale");

    assert_eq!(scale.invert(100.0).expect("invert"), utc(2021, 1, 2));
    assert!(scale.invert(f64::NAN).is_err());
}

#[test]
fn single_point_time_domain_is_widened_by_half_a_day() {
    let points = vec![point(2021, 1, 1, 10.0)];
    let scale = TimeScale::from_points(&points, (0.0, 100.0)).expect("valid scale");

    let (start, end) = scale.domain_seconds();
    assert_relative_eq!(end - start, 86_400.0);
    assert_relative_eq!(scale.apply(utc(2021, 1, 1)), 50.0);
}

#[test]
fn scales_from_no_points_report_empty_dataset() {
    assert!(matches!(
        TimeScale::from_points(&[], (0.0, 100.0)),
        Err(ChartError::EmptyDataset)
    ));
    assert!(matches!(
        ValueScale::from_points(&[], (0.0, 100.0)),
        Err(ChartError::EmptyDataset)
    ));
}

#[test]
fn range_change_keeps_domain() {
    let scale =
        TimeScale::new(utc(2021, 1, 1), utc(2021, 1, 3), (0.0, 100.0)).expect("valid scale");
    let wider = scale.with_range((0.0, 300.0)).expect("new range");

    assert_eq!(wider.domain_seconds(), scale.domain_seconds());
    assert_relative_eq!(wider.apply(utc(2021, 1, 2)), 150.0);
}

#[test]
fn tick_interval_tracks_domain_span() {
    let day = TimeScale::new(utc(2021, 1, 1), utc(2021, 1, 2), (0.0, 1.0)).expect("scale");
    assert_eq!(day.tick_interval(10), TimeInterval::Hour(3));

    let ten_days = TimeScale::new(utc(2021, 1, 1), utc(2021, 1, 11), (0.0, 1.0)).expect("scale");
    assert_eq!(ten_days.tick_interval(10), TimeInterval::Day(1));

    let year = TimeScale::new(utc(2021, 1, 1), utc(2021, 12, 31), (0.0, 1.0)).expect("scale");
    assert_eq!(year.tick_interval(10), TimeInterval::Month(1));

    let decades = TimeScale::new(utc(2000, 1, 1), utc(2020, 1, 1), (0.0, 1.0)).expect("scale");
    assert_eq!(decades.tick_interval(10), TimeInterval::Year(2));
}
