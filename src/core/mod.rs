pub mod axis;
pub mod bisect;
pub mod line_series;
pub mod primitives;
pub mod scale;
pub mod time_scale;
pub mod types;
pub mod value_scale;

pub use axis::{AxisTick, format_tick_value, time_axis_ticks, value_axis_ticks};
pub use bisect::{bisect_time_left, nearest_point_index};
pub use line_series::{PathCommand, PixelPoint, monotone_x_path, project_points};
pub use primitives::{format_datetime, parse_calendar_date};
pub use scale::LinearScale;
pub use time_scale::{TimeInterval, TimeScale};
pub use types::{DataPoint, DataRecord, Margins, Viewport, parse_records};
pub use value_scale::ValueScale;
