mod axis_ticks;
mod chart;
mod chart_config;
mod chart_snapshot;
mod layout;
mod lifecycle;
mod nearest_point_locator;
mod plugin_registry;
mod render_frame_builder;
mod scale_coordinator;

pub use chart::{ChartStatus, LineChart};
pub use chart_config::{DataOrdering, LineChartConfig};
pub use chart_snapshot::ChartSnapshot;
pub use layout::ChartLayout;
pub use scale_coordinator::ChartScales;
