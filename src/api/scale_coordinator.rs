use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, TimeScale, ValueScale};
use crate::error::ChartResult;

use super::ChartLayout;

/// The x/y scale pair for one dataset and layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartScales {
    pub time: TimeScale,
    pub value: ValueScale,
}

impl ChartScales {
    /// Fits both scales to `points`.
    ///
    /// Pure function of its inputs; fails with `EmptyDataset` for no points.
    pub fn build(points: &[DataPoint], layout: ChartLayout) -> ChartResult<Self> {
        Ok(Self {
            time: TimeScale::from_points(points, layout.x_range())?,
            value: ValueScale::from_points(points, layout.y_range())?,
        })
    }

    /// Keeps both domains and remaps them onto a new layout.
    pub fn relayout(self, layout: ChartLayout) -> ChartResult<Self> {
        Ok(Self {
            time: self.time.with_range(layout.x_range())?,
            value: self.value.with_range(layout.y_range())?,
        })
    }
}
