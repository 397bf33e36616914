use serde::{Deserialize, Serialize};

use crate::core::{Margins, Viewport};
use crate::error::{ChartError, ChartResult};

/// Plot-area geometry derived from the container size and margins.
///
/// All coordinates are viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub margins: Margins,
}

impl ChartLayout {
    /// Fails when the margins leave no drawable plot area.
    pub fn new(viewport: Viewport, margins: Margins) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let margins = margins.validate()?;
        let layout = Self { viewport, margins };
        if layout.plot_width() <= 0.0 || layout.plot_height() <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(layout)
    }

    #[must_use]
    pub fn plot_left(self) -> f64 {
        self.margins.left
    }

    #[must_use]
    pub fn plot_right(self) -> f64 {
        f64::from(self.viewport.width) - self.margins.right
    }

    #[must_use]
    pub fn plot_top(self) -> f64 {
        self.margins.top
    }

    #[must_use]
    pub fn plot_bottom(self) -> f64 {
        f64::from(self.viewport.height) - self.margins.bottom
    }

    #[must_use]
    pub fn plot_width(self) -> f64 {
        self.plot_right() - self.plot_left()
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        self.plot_bottom() - self.plot_top()
    }

    /// Pixel range of the time scale.
    #[must_use]
    pub fn x_range(self) -> (f64, f64) {
        (self.plot_left(), self.plot_right())
    }

    /// Pixel range of the value scale, top to bottom.
    #[must_use]
    pub fn y_range(self) -> (f64, f64) {
        (self.plot_top(), self.plot_bottom())
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        (0.0..=f64::from(self.viewport.width)).contains(&x)
            && (0.0..=f64::from(self.viewport.height)).contains(&y)
    }
}
