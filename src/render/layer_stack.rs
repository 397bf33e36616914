use serde::{Deserialize, Serialize};

/// Semantic layer of a chart frame, listed back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    YAxis,
    XAxis,
    Series,
    Focus,
    Overlay,
    Tooltip,
    Status,
}

impl CanvasLayerKind {
    /// Paint order used by every frame.
    pub const CANONICAL_ORDER: [CanvasLayerKind; 7] = [
        CanvasLayerKind::YAxis,
        CanvasLayerKind::XAxis,
        CanvasLayerKind::Series,
        CanvasLayerKind::Focus,
        CanvasLayerKind::Overlay,
        CanvasLayerKind::Tooltip,
        CanvasLayerKind::Status,
    ];

    /// Class attribute for markup backends.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            CanvasLayerKind::YAxis => "axis axis--y",
            CanvasLayerKind::XAxis => "axis axis--x",
            CanvasLayerKind::Series => "chart-line",
            CanvasLayerKind::Focus => "focus",
            CanvasLayerKind::Overlay => "overlay",
            CanvasLayerKind::Tooltip => "chart-tooltip",
            CanvasLayerKind::Status => "chart-status",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CanvasLayerKind;

    #[test]
    fn series_is_painted_under_focus_and_tooltip() {
        let order = CanvasLayerKind::CANONICAL_ORDER;
        let position = |kind| order.iter().position(|item| *item == kind).expect("kind");
        assert!(position(CanvasLayerKind::Series) < position(CanvasLayerKind::Focus));
        assert!(position(CanvasLayerKind::Focus) < position(CanvasLayerKind::Tooltip));
    }
}
