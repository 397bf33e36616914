use approx::assert_relative_eq;
use chrono::{TimeZone, Utc};
use line_chart::ChartError;
use line_chart::api::{ChartStatus, DataOrdering, LineChart, LineChartConfig};
use line_chart::core::{DataPoint, DataRecord, Viewport};
use line_chart::interaction::InteractionMode;
use line_chart::render::{CanvasLayerKind, NullRenderer};

fn point(day: u32, value: f64) -> DataPoint {
    let time = Utc
        .with_ymd_and_hms(2021, 1, day, 0, 0, 0)
        .single()
        .expect("valid date");
    DataPoint::new(time, value).expect("valid point")
}

fn sample_points() -> Vec<DataPoint> {
    vec![
        point(1, 10.0),
        point(2, 20.0),
        point(3, 15.0),
        point(4, 30.0),
        point(5, 25.0),
    ]
}

fn chart() -> LineChart<NullRenderer> {
    LineChart::new(NullRenderer::default(), LineChartConfig::default()).expect("chart init")
}

#[test]
fn mount_draws_once_and_attaches_tooltip() {
    let mut chart = chart();
    chart.set_data(sample_points()).expect("set data");
    assert_eq!(chart.status(), ChartStatus::Unmounted);
    assert_eq!(chart.renderer().render_count, 0);

    chart.mount().expect("mount");

    assert!(chart.is_mounted());
    assert!(chart.is_tooltip_attached());
    assert_eq!(chart.status(), ChartStatus::Ready);
    assert_eq!(chart.renderer().render_count, 1);
    assert_eq!(chart.renderer().last_path_count, 1);
}

#[test]
fn unmount_removes_tooltip_and_ignores_further_pointer_events() {
    let mut chart = chart();
    chart.set_data(sample_points()).expect("set data");
    chart.mount().expect("mount");
    chart.pointer_enter().expect("pointer enter");
    chart.pointer_move(100.0, 100.0).expect("pointer move");
    assert!(chart.tooltip_state().visible);

    chart.unmount();

    assert!(!chart.is_tooltip_attached());
    assert!(!chart.tooltip_state().visible);
    assert!(!chart.focus_state().visible);
    assert_eq!(chart.status(), ChartStatus::Unmounted);
    assert_eq!(chart.interaction_mode(), InteractionMode::Idle);

    let renders = chart.renderer().render_count;
    chart.pointer_move(100.0, 100.0).expect("pointer move");
    assert!(chart.tooltip_state().snap.is_none());
    assert_eq!(chart.renderer().render_count, renders);
}

#[test]
fn unmount_twice_is_harmless_and_data_survives_remount() {
    let mut chart = chart();
    chart.set_data(sample_points()).expect("set data");
    chart.mount().expect("mount");
    chart.unmount();
    chart.unmount();

    assert_eq!(chart.points().len(), 5);
    chart.mount().expect("remount");
    assert!(chart.is_tooltip_attached());
    assert_eq!(chart.status(), ChartStatus::Ready);
}

#[test]
fn render_requires_mount() {
    let mut chart = chart();
    assert!(matches!(chart.render(), Err(ChartError::NotMounted)));
}

#[test]
fn empty_dataset_mounts_into_no_data_state() {
    let mut chart = chart();
    chart.mount().expect("mount");

    assert_eq!(chart.status(), ChartStatus::NoData);
    assert!(chart.scales().is_none());
    assert!(chart.line_path().is_empty());
    assert!(matches!(
        chart.map_pixel_to_time(100.0),
        Err(ChartError::EmptyDataset)
    ));
    assert_eq!(
        chart
            .renderer()
            .last_layer_primitive_count(CanvasLayerKind::Status),
        1
    );

    chart.pointer_move(100.0, 100.0).expect("pointer move ignored");
    chart.resize_width(900).expect("resize without data");
    assert_eq!(chart.status(), ChartStatus::NoData);
}

#[test]
fn clearing_data_returns_to_no_data_state() {
    let mut chart = chart();
    chart.set_data(sample_points()).expect("set data");
    chart.mount().expect("mount");
    chart.set_data(Vec::new()).expect("clear data");

    assert_eq!(chart.status(), ChartStatus::NoData);
    assert_eq!(chart.renderer().last_path_count, 0);
}

#[test]
fn set_data_redraws_when_mounted_and_resets_tooltip() {
    let mut chart = chart();
    chart.set_data(sample_points()).expect("set data");
    chart.mount().expect("mount");
    chart.pointer_move(100.0, 100.0).expect("pointer move");
    let renders = chart.renderer().render_count;

    chart
        .set_data(vec![point(1, 1.0), point(2, 2.0)])
        .expect("replace data");

    assert_eq!(chart.renderer().render_count, renders + 1);
    assert!(!chart.tooltip_state().visible);
    assert_eq!(chart.points().len(), 2);
}

#[test]
fn resize_updates_x_range_and_path_without_touching_data() {
    let mut chart = chart();
    chart.set_data(sample_points()).expect("set data");
    chart.mount().expect("mount");
    let path_before = chart.line_path();
    let domain_before = chart.scales().expect("scales").time.domain_seconds();

    chart.resize_width(1000).expect("resize");

    let scales = chart.scales().expect("scales");
    assert_eq!(scales.time.range(), (20.0, 980.0));
    assert_eq!(scales.time.domain_seconds(), domain_before);
    assert_eq!(chart.points(), sample_points().as_slice());
    assert_ne!(chart.line_path(), path_before);
    assert_eq!(chart.config().width, 1000);
    assert_eq!(chart.renderer().render_count, 2);
}

#[test]
fn resize_moves_visible_focus_with_its_sample() {
    let mut chart = chart();
    chart.set_data(sample_points()).expect("set data");
    chart.mount().expect("mount");
    chart.pointer_move(20.0, 100.0).expect("pointer move");

    chart.resize(Viewport::new(1000, 600)).expect("resize");

    let focus = chart.focus_state();
    assert!(focus.visible);
    assert_relative_eq!(focus.x, 20.0);
    assert_relative_eq!(focus.y, chart.map_value_to_pixel(10.0).expect("map value"));
    assert_eq!(chart.tooltip_state().snap.map(|snap| snap.index), Some(0));
}

#[test]
fn resize_keeps_hidden_tooltip_hidden() {
    let mut chart = chart();
    chart.set_data(sample_points()).expect("set data");
    chart.mount().expect("mount");
    chart.pointer_move(20.0, 100.0).expect("pointer move");
    chart.pointer_leave().expect("pointer leave");

    chart.resize_width(900).expect("resize");

    assert!(!chart.tooltip_state().visible);
    assert!(!chart.focus_state().visible);
}

#[test]
fn resize_to_unusable_size_is_rejected() {
    let mut chart = chart();
    chart.set_data(sample_points()).expect("set data");
    chart.mount().expect("mount");

    assert!(matches!(
        chart.resize_width(0),
        Err(ChartError::InvalidViewport { .. })
    ));
    assert!(matches!(
        chart.resize_width(40),
        Err(ChartError::InvalidViewport { .. })
    ));
    assert_eq!(chart.layout().viewport, Viewport::new(700, 400));
}

#[test]
fn invalid_records_leave_previous_data_in_place() {
    let mut chart = chart();
    chart
        .set_records(&[
            DataRecord::new("2021-01-01", 10.0),
            DataRecord::new("2021-01-02", 20.0),
        ])
        .expect("valid records");

    let err = chart
        .set_records(&[DataRecord::new("garbage", 1.0)])
        .expect_err("invalid date");

    assert!(matches!(err, ChartError::InvalidDate { .. }));
    assert_eq!(chart.points().len(), 2);
}

#[test]
fn pointer_move_switches_to_hovering() {
    let mut chart = chart();
    chart.set_data(sample_points()).expect("set data");
    chart.mount().expect("mount");
    assert_eq!(chart.interaction_mode(), InteractionMode::Idle);

    chart.pointer_move(200.0, 100.0).expect("pointer move");
    assert_eq!(chart.interaction_mode(), InteractionMode::Hovering);
}

#[test]
fn extreme_magnitudes_are_plotted_or_rejected_before_commit() {
    let mut chart = chart();
    chart
        .set_data(vec![point(1, 1e17), point(2, 1e17)])
        .expect("huge constant values");
    chart.mount().expect("mount");
    assert!(chart.line_path().iter().all(|command| command.is_finite()));

    let err = chart
        .set_data(vec![point(1, -1e308), point(2, 1e308)])
        .expect_err("unplottable extent");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert_eq!(chart.points().len(), 2);
    assert_eq!(chart.points()[0].value, 1e17);
    chart.render().expect("previous data still renders");
}

#[test]
fn unsorted_input_is_kept_unless_sorting_is_requested() {
    let unsorted = vec![point(3, 30.0), point(1, 10.0), point(2, 20.0)];

    let mut as_provided = chart();
    as_provided.set_data(unsorted.clone()).expect("set data");
    assert_eq!(as_provided.points(), unsorted.as_slice());

    let config = LineChartConfig::default().with_data_ordering(DataOrdering::SortAscending);
    let mut sorted = LineChart::new(NullRenderer::default(), config).expect("chart init");
    sorted.set_data(unsorted).expect("set data");
    let values: Vec<f64> = sorted.points().iter().map(|point| point.value).collect();
    assert_eq!(values, vec![10.0, 20.0, 30.0]);
}

#[test]
fn identical_inputs_build_identical_snapshots() {
    let build = || {
        let mut chart = chart();
        chart.set_data(sample_points()).expect("set data");
        chart.mount().expect("mount");
        chart.pointer_move(333.0, 100.0).expect("pointer move");
        chart.snapshot()
    };

    let first = build();
    let second = build();
    assert_eq!(first, second);
    assert_eq!(
        first.to_json_pretty().expect("json"),
        second.to_json_pretty().expect("json")
    );
}
