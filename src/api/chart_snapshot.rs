use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{FocusState, TooltipState};
use crate::render::Renderer;

use super::{ChartStatus, LineChart};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub status: ChartStatus,
    pub plot_area: (f64, f64, f64, f64),
    /// Time domain as unix seconds.
    pub x_domain: Option<(f64, f64)>,
    pub x_range: Option<(f64, f64)>,
    pub y_domain: Option<(f64, f64)>,
    pub y_range: Option<(f64, f64)>,
    pub points_len: usize,
    pub tooltip_attached: bool,
    pub tooltip: TooltipState,
    pub focus: FocusState,
}

impl ChartSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse snapshot: {e}")))
    }
}

impl<R: Renderer> LineChart<R> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        let layout = self.layout;
        ChartSnapshot {
            viewport: layout.viewport,
            status: self.status(),
            plot_area: (
                layout.plot_left(),
                layout.plot_top(),
                layout.plot_width(),
                layout.plot_height(),
            ),
            x_domain: self.scales.map(|scales| scales.time.domain_seconds()),
            x_range: self.scales.map(|scales| scales.time.range()),
            y_domain: self.scales.map(|scales| scales.value.domain()),
            y_range: self.scales.map(|scales| scales.value.range()),
            points_len: self.points.len(),
            tooltip_attached: self.tooltip_attached,
            tooltip: self.interaction.tooltip(),
            focus: self.interaction.focus(),
        }
    }
}
