//! line-chart-rs: time-series line chart engine.
//!
//! The crate keeps a strict split between pure scale/geometry math (`core`),
//! backend-agnostic drawing (`render`), pointer state (`interaction`) and the
//! host-facing facade (`api`).

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{LineChart, LineChartConfig};
pub use error::{ChartError, ChartResult};
