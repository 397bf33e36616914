//! Optional hooks layered on top of the chart facade.
//!
//! Extensions observe the chart; they never feed back into core paths.

pub mod plugins;

pub use plugins::{ChartEvent, ChartPlugin, PluginContext};
