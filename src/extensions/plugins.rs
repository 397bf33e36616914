use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::interaction::{FocusState, InteractionMode, TooltipState};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub mounted: bool,
    pub points_len: usize,
    pub x_range: Option<(f64, f64)>,
    pub interaction_mode: InteractionMode,
    pub focus: FocusState,
    pub tooltip: TooltipState,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    Mounted,
    DataUpdated { points_len: usize },
    Resized { width: u32, height: u32 },
    PointerMoved { x: f64, y: f64 },
    TooltipShown { index: usize },
    PointerLeft,
    Rendered,
    Unmounted,
}

/// Observer hook for host-side logic such as analytics or linked views.
///
/// Plugins observe events and read chart context without mutating chart
/// internals.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: ChartEvent, context: PluginContext);
}
