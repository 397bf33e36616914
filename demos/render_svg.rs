//! Renders a small series to SVG and prints the markup, with the tooltip
//! pinned to the sample nearest the middle of the plot.
//!
//! `cargo run --example render_svg --features telemetry > chart.svg`

use line_chart::core::DataRecord;
use line_chart::render::SvgRenderer;
use line_chart::{ChartResult, LineChart, LineChartConfig};

const RECORDS_JSON: &str = r#"[
    { "date": "2021-01-01", "value": 12 },
    { "date": "2021-01-02", "value": 18 },
    { "date": "2021-01-03", "value": 15 },
    { "date": "2021-01-04", "value": 22 },
    { "date": "2021-01-05", "value": 19 },
    { "date": "2021-01-06", "value": 27 },
    { "date": "2021-01-07", "value": 24 }
]"#;

fn main() -> ChartResult<()> {
    let _ = line_chart::telemetry::init_default_tracing();

    let records = DataRecord::parse_json_array(RECORDS_JSON)?;
    let mut chart = LineChart::new(SvgRenderer::new(), LineChartConfig::default())?;
    chart.set_records(&records)?;
    chart.mount()?;

    let layout = chart.layout();
    chart.pointer_enter()?;
    chart.pointer_move(
        layout.plot_left() + layout.plot_width() / 2.0,
        layout.plot_top() + layout.plot_height() / 2.0,
    )?;

    print!("{}", chart.renderer().document());
    chart.unmount();
    Ok(())
}
