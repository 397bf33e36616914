use tracing::trace;

use crate::core::nearest_point_index;
use crate::interaction::PointSnap;
use crate::render::Renderer;

use super::{ChartScales, LineChart};

impl<R: Renderer> LineChart<R> {
    /// Resolves the sample nearest to a pointer x-position.
    ///
    /// Returns `None` without data or when the pixel cannot be inverted.
    #[must_use]
    pub fn nearest_point_at_x(&self, pointer_x: f64) -> Option<PointSnap> {
        let scales = self.scales?;
        let time = scales.time.invert(pointer_x).ok()?;
        let index = nearest_point_index(&self.points, time)?;
        let snap = self.snap_for_index(scales, index);
        trace!(pointer_x, index, "resolved nearest point");
        snap
    }

    pub(super) fn snap_for_index(&self, scales: ChartScales, index: usize) -> Option<PointSnap> {
        let point = self.points.get(index)?;
        Some(PointSnap {
            index,
            x: scales.time.apply(point.time),
            y: scales.value.apply(point.value),
            time: point.time,
            value: point.value,
        })
    }
}
