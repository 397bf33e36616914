use serde::{Deserialize, Serialize};

use crate::core::scale::LinearScale;
use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

/// Headroom added above the maximum and below the minimum value.
///
/// Values too large for a unit step to be representable are padded by a few
/// ulps of their magnitude instead.
pub const VALUE_DOMAIN_PADDING: f64 = 1.0;

/// Vertical scale mapping sample values onto pixel y coordinates.
///
/// The domain is stored as `[max + padding, min - padding]` so that, with a
/// range of `[0, height]`, larger values land closer to the top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    linear: LinearScale,
}

impl ValueScale {
    pub fn new(min_value: f64, max_value: f64, range: (f64, f64)) -> ChartResult<Self> {
        if !min_value.is_finite() || !max_value.is_finite() {
            return Err(ChartError::InvalidData(
                "value extent must be finite".to_owned(),
            ));
        }
        let (min_value, max_value) = if min_value <= max_value {
            (min_value, max_value)
        } else {
            (max_value, min_value)
        };
        let magnitude = max_value.abs().max(min_value.abs());
        let padding = VALUE_DOMAIN_PADDING.max(magnitude * f64::EPSILON * 4.0);
        let domain = (max_value + padding, min_value - padding);
        if !(domain.0 - domain.1).is_finite() {
            return Err(ChartError::InvalidData(
                "value extent is too wide to plot".to_owned(),
            ));
        }
        Ok(Self {
            linear: LinearScale::new(domain, range)?,
        })
    }

    pub fn from_points(points: &[DataPoint], range: (f64, f64)) -> ChartResult<Self> {
        let Some(first) = points.first() else {
            return Err(ChartError::EmptyDataset);
        };
        let (min, max) = points
            .iter()
            .fold((first.value, first.value), |(min, max), point| {
                (min.min(point.value), max.max(point.value))
            });
        Self::new(min, max, range)
    }

    pub fn with_range(self, range: (f64, f64)) -> ChartResult<Self> {
        Ok(Self {
            linear: self.linear.with_range(range)?,
        })
    }

    /// Domain as `(top, bottom)`, i.e. `(max + padding, min - padding)`.
    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        self.linear.apply(value)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        self.linear.invert(pixel)
    }

    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        self.linear.ticks(count)
    }

    #[must_use]
    pub fn tick_step(self, count: usize) -> f64 {
        self.linear.tick_step(count)
    }
}
