use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{
    AxisTick, DataPoint, PathCommand, format_datetime, monotone_x_path, project_points,
    time_axis_ticks, value_axis_ticks,
};
use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartPlugin;
use crate::interaction::{FocusState, InteractionMode, InteractionState, TooltipState};
use crate::render::Renderer;

use super::{ChartLayout, ChartScales, LineChartConfig};

/// Coarse chart state for hosts deciding what to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartStatus {
    /// Not attached to a host view.
    Unmounted,
    /// Mounted, but there is nothing to plot.
    NoData,
    Ready,
}

/// Main facade consumed by host applications.
///
/// `LineChart` owns the dataset, the scale pair, pointer state and the
/// renderer, and redraws through the renderer after every state change
/// while mounted.
pub struct LineChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: LineChartConfig,
    pub(super) layout: ChartLayout,
    pub(super) points: Vec<DataPoint>,
    /// Date strings of the records behind `points`; empty for `set_data`.
    pub(super) source_dates: Vec<String>,
    pub(super) scales: Option<ChartScales>,
    pub(super) interaction: InteractionState,
    pub(super) mounted: bool,
    pub(super) tooltip_attached: bool,
    pub(super) plugins: IndexMap<String, Box<dyn ChartPlugin>>,
}

impl<R: Renderer> LineChart<R> {
    /// Creates an unmounted chart with no data.
    pub fn new(renderer: R, config: LineChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let layout = ChartLayout::new(config.viewport(), config.margins)?;

        Ok(Self {
            renderer,
            config,
            layout,
            points: Vec::new(),
            source_dates: Vec::new(),
            scales: None,
            interaction: InteractionState::default(),
            mounted: false,
            tooltip_attached: false,
            plugins: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &LineChartConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Current scale pair; `None` while there is no data.
    #[must_use]
    pub fn scales(&self) -> Option<ChartScales> {
        self.scales
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the tooltip element currently exists in the host document.
    #[must_use]
    pub fn is_tooltip_attached(&self) -> bool {
        self.tooltip_attached
    }

    #[must_use]
    pub fn status(&self) -> ChartStatus {
        if !self.mounted {
            ChartStatus::Unmounted
        } else if self.scales.is_none() {
            ChartStatus::NoData
        } else {
            ChartStatus::Ready
        }
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn tooltip_state(&self) -> TooltipState {
        self.interaction.tooltip()
    }

    #[must_use]
    pub fn focus_state(&self) -> FocusState {
        self.interaction.focus()
    }

    /// Tooltip text as `["Date: …", "Value: …"]` while the tooltip is shown.
    ///
    /// Data loaded through `set_records` shows the record's date string as
    /// given; plain points are formatted with `tooltip_date_format`.
    pub fn tooltip_lines(&self) -> ChartResult<Option<[String; 2]>> {
        let tooltip = self.interaction.tooltip();
        let Some(snap) = tooltip.snap.filter(|_| tooltip.visible) else {
            return Ok(None);
        };
        let date = match self.source_dates.get(snap.index) {
            Some(source) => source.clone(),
            None => format_datetime(snap.time, &self.config.tooltip_date_format)?,
        };
        Ok(Some([
            format!("Date: {date}"),
            format!("Value: {}", snap.value),
        ]))
    }

    pub fn map_time_to_pixel(&self, time: DateTime<Utc>) -> ChartResult<f64> {
        Ok(self.require_scales()?.time.apply(time))
    }

    pub fn map_pixel_to_time(&self, pixel: f64) -> ChartResult<DateTime<Utc>> {
        self.require_scales()?.time.invert(pixel)
    }

    pub fn map_value_to_pixel(&self, value: f64) -> ChartResult<f64> {
        Ok(self.require_scales()?.value.apply(value))
    }

    pub fn map_pixel_to_value(&self, pixel: f64) -> ChartResult<f64> {
        Ok(self.require_scales()?.value.invert(pixel))
    }

    /// Time-axis ticks before label thinning; empty without data.
    pub fn x_axis_ticks(&self) -> ChartResult<Vec<AxisTick>> {
        match self.scales {
            Some(scales) => time_axis_ticks(
                scales.time,
                self.config.x_tick_count,
                &self.config.x_tick_format,
            ),
            None => Ok(Vec::new()),
        }
    }

    #[must_use]
    pub fn y_axis_ticks(&self) -> Vec<AxisTick> {
        self.scales.map_or_else(Vec::new, |scales| {
            value_axis_ticks(scales.value, self.config.y_tick_count)
        })
    }

    /// Smoothed line path for the current scales; empty without data.
    #[must_use]
    pub fn line_path(&self) -> Vec<PathCommand> {
        self.scales.map_or_else(Vec::new, |scales| {
            monotone_x_path(&project_points(&self.points, scales.time, scales.value))
        })
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn require_scales(&self) -> ChartResult<ChartScales> {
        self.scales.ok_or(ChartError::EmptyDataset)
    }
}
