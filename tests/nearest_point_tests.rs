use approx::assert_relative_eq;
use chrono::{DateTime, Duration, TimeZone, Utc};
use line_chart::api::{DataOrdering, LineChart, LineChartConfig};
use line_chart::core::{DataPoint, DataRecord, bisect_time_left, nearest_point_index};
use line_chart::render::NullRenderer;

fn utc(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 1, day, 0, 0, 0)
        .single()
        .expect("valid date")
}

fn point(day: u32, value: f64) -> DataPoint {
    DataPoint::new(utc(day), value).expect("valid point")
}

fn mounted_chart(points: Vec<DataPoint>) -> LineChart<NullRenderer> {
    let mut chart =
        LineChart::new(NullRenderer::default(), LineChartConfig::default()).expect("chart init");
    chart.set_data(points).expect("set data");
    chart.mount().expect("mount");
    chart
}

#[test]
fn bisect_left_returns_first_index_not_before_time() {
    let points = vec![point(1, 1.0), point(2, 2.0), point(2, 3.0), point(4, 4.0)];

    assert_eq!(bisect_time_left(&points, utc(2), 0), 1);
    assert_eq!(bisect_time_left(&points, utc(3), 0), 3);
    assert_eq!(bisect_time_left(&points, utc(9), 0), 4);
    assert_eq!(bisect_time_left(&points, utc(1), 1), 1);
    assert_eq!(bisect_time_left(&points, utc(1), 99), 4);
}

#[test]
fn nearest_point_prefers_closer_neighbour() {
    let points = vec![point(1, 10.0), point(2, 20.0), point(4, 40.0)];

    assert_eq!(nearest_point_index(&points, utc(1)), Some(0));
    assert_eq!(
        nearest_point_index(&points, utc(1) + Duration::hours(11)),
        Some(0)
    );
    assert_eq!(
        nearest_point_index(&points, utc(1) + Duration::hours(13)),
        Some(1)
    );
    assert_eq!(nearest_point_index(&points, utc(3) + Duration::hours(1)), Some(2));
}

#[test]
fn equidistant_pointer_resolves_to_earlier_point() {
    let points = vec![point(1, 10.0), point(3, 30.0)];
    assert_eq!(nearest_point_index(&points, utc(2)), Some(0));
}

#[test]
fn out_of_range_times_clamp_to_the_ends() {
    let points = vec![point(2, 10.0), point(3, 20.0), point(4, 30.0)];

    assert_eq!(nearest_point_index(&points, utc(1)), Some(0));
    assert_eq!(nearest_point_index(&points, utc(20)), Some(2));
}

#[test]
fn single_point_is_always_chosen() {
    let points = vec![point(5, 1.0)];

    assert_eq!(nearest_point_index(&points, utc(1)), Some(0));
    assert_eq!(nearest_point_index(&points, utc(30)), Some(0));
    assert_eq!(nearest_point_index(&[], utc(1)), None);
}

#[test]
fn pointer_on_first_date_shows_first_value() {
    let mut chart = mounted_chart(vec![point(1, 10.0), point(2, 20.0)]);

    let x = chart.map_time_to_pixel(utc(1)).expect("map time");
    assert_relative_eq!(x, 20.0);
    chart.pointer_move(x, 200.0).expect("pointer move");

    let tooltip = chart.tooltip_state();
    let snap = tooltip.snap.expect("snap");
    assert!(tooltip.visible);
    assert_eq!(snap.value, 10.0);
    assert_eq!(snap.time, utc(1));
    assert_eq!(
        chart.tooltip_lines().expect("tooltip lines"),
        Some(["Date: 2021-01-01".to_owned(), "Value: 10".to_owned()])
    );
}

#[test]
fn intraday_records_keep_their_own_tooltip_dates() {
    let config = LineChartConfig::default().with_data_ordering(DataOrdering::SortAscending);
    let mut chart = LineChart::new(NullRenderer::default(), config).expect("chart init");
    chart
        .set_records(&[
            DataRecord::new("2021-01-01T09:30:00Z", 3.0),
            DataRecord::new("2021-01-01T01:30:00Z", 1.0),
            DataRecord::new("2021-01-01T05:30:00Z", 2.0),
        ])
        .expect("set records");
    chart.mount().expect("mount");

    let mut dates = Vec::new();
    for x in [20.0, 350.0, 680.0] {
        chart.pointer_move(x, 200.0).expect("pointer move");
        let [date, _] = chart
            .tooltip_lines()
            .expect("tooltip lines")
            .expect("visible tooltip");
        dates.push(date);
    }
    assert_eq!(
        dates,
        vec![
            "Date: 2021-01-01T01:30:00Z",
            "Date: 2021-01-01T05:30:00Z",
            "Date: 2021-01-01T09:30:00Z",
        ]
    );

    let morning = Utc
        .with_ymd_and_hms(2021, 1, 1, 5, 30, 0)
        .single()
        .expect("valid date");
    chart
        .set_data(vec![DataPoint::new(morning, 2.0).expect("valid point")])
        .expect("set data");
    chart.pointer_move(350.0, 200.0).expect("pointer move");
    assert_eq!(
        chart.tooltip_lines().expect("tooltip lines"),
        Some(["Date: 2021-01-01".to_owned(), "Value: 2".to_owned()])
    );
}

#[test]
fn pointer_nearer_second_date_shows_second_value() {
    let mut chart = mounted_chart(vec![point(1, 10.0), point(2, 20.0)]);

    chart.pointer_move(600.0, 200.0).expect("pointer move");

    let snap = chart.tooltip_state().snap.expect("snap");
    assert_eq!(snap.value, 20.0);
    assert_eq!(snap.index, 1);
}

#[test]
fn focus_marker_sits_on_the_snapped_sample() {
    let mut chart = mounted_chart(vec![point(1, 10.0), point(2, 20.0)]);
    chart.pointer_move(30.0, 100.0).expect("pointer move");

    let focus = chart.focus_state();
    assert!(focus.visible);
    assert_relative_eq!(focus.x, 20.0);
    assert_relative_eq!(
        focus.y,
        chart.map_value_to_pixel(10.0).expect("map value")
    );
    assert_eq!(chart.tooltip_state().anchor(), Some((focus.x, focus.y)));
}

#[test]
fn pointer_leave_hides_tooltip_and_focus() {
    let mut chart = mounted_chart(vec![point(1, 10.0), point(2, 20.0)]);
    chart.pointer_move(30.0, 100.0).expect("pointer move");
    chart.pointer_leave().expect("pointer leave");

    assert!(!chart.tooltip_state().visible);
    assert!(!chart.focus_state().visible);
    assert_eq!(chart.tooltip_lines().expect("tooltip lines"), None);
}

#[test]
fn pointer_outside_the_container_keeps_previous_tooltip() {
    let mut chart = mounted_chart(vec![point(1, 10.0), point(2, 20.0)]);
    chart.pointer_move(30.0, 100.0).expect("pointer move");
    let before = chart.tooltip_state();

    chart.pointer_move(-50.0, 100.0).expect("pointer move");
    chart.pointer_move(30.0, 10_000.0).expect("pointer move");

    assert_eq!(chart.tooltip_state(), before);
}

#[test]
fn pointer_before_mount_is_ignored() {
    let mut chart =
        LineChart::new(NullRenderer::default(), LineChartConfig::default()).expect("chart init");
    chart
        .set_data(vec![point(1, 10.0), point(2, 20.0)])
        .expect("set data");

    chart.pointer_move(30.0, 100.0).expect("pointer move");

    assert!(chart.tooltip_state().snap.is_none());
    assert_eq!(chart.renderer().render_count, 0);
}
