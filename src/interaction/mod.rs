use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether the pointer currently hovers the chart overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Hovering,
}

/// Sample resolved for the current pointer position, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointSnap {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub time: DateTime<Utc>,
    pub value: f64,
}

/// Circular marker drawn on the snapped sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
}

impl Default for FocusState {
    fn default() -> Self {
        Self {
            visible: false,
            x: 0.0,
            y: 0.0,
        }
    }
}

/// Point-following tooltip exposed to host applications.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipState {
    pub visible: bool,
    pub snap: Option<PointSnap>,
}

impl TooltipState {
    /// Anchor position (the snapped sample) when visible.
    #[must_use]
    pub fn anchor(self) -> Option<(f64, f64)> {
        if !self.visible {
            return None;
        }
        self.snap.map(|snap| (snap.x, snap.y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    focus: FocusState,
    tooltip: TooltipState,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            focus: FocusState::default(),
            tooltip: TooltipState::default(),
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn focus(self) -> FocusState {
        self.focus
    }

    #[must_use]
    pub fn tooltip(self) -> TooltipState {
        self.tooltip
    }

    pub fn on_pointer_enter(&mut self) {
        self.mode = InteractionMode::Hovering;
    }

    /// Moves tooltip and focus marker onto `snap`.
    ///
    /// `None` keeps the previous tooltip untouched.
    pub fn apply_snap(&mut self, snap: Option<PointSnap>) {
        let Some(snap) = snap else {
            return;
        };
        self.tooltip = TooltipState {
            visible: true,
            snap: Some(snap),
        };
        self.focus = FocusState {
            visible: true,
            x: snap.x,
            y: snap.y,
        };
    }

    /// Moves the stored snap without changing tooltip or focus visibility.
    pub fn reposition(&mut self, snap: PointSnap) {
        self.tooltip.snap = Some(snap);
        self.focus.x = snap.x;
        self.focus.y = snap.y;
    }

    pub fn on_pointer_leave(&mut self) {
        self.mode = InteractionMode::Idle;
        self.tooltip.visible = false;
        self.focus.visible = false;
    }

    /// Drops all pointer-derived state, e.g. after the data changed.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
