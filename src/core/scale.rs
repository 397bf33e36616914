use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

// Thresholds for choosing between 1, 2, 5 and 10 multiples of a power of ten.
const STEP_E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const STEP_E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const STEP_E2: f64 = std::f64::consts::SQRT_2;

/// Continuous linear mapping from a numeric domain onto a pixel range.
///
/// Either interval may be reversed; `apply` and `invert` preserve the
/// orientation given at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        validate_range(range)?;

        Ok(Self {
            domain_start,
            domain_end,
            range_start: range.0,
            range_end: range.1,
        })
    }

    /// Returns a copy of the scale mapping onto a new pixel range.
    pub fn with_range(self, range: (f64, f64)) -> ChartResult<Self> {
        validate_range(range)?;
        Ok(Self {
            range_start: range.0,
            range_end: range.1,
            ..self
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a pixel back into the domain.
    ///
    /// A collapsed range carries no position information, so the domain
    /// midpoint is returned.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        let normalized = if range_span == 0.0 {
            0.5
        } else {
            (pixel - self.range_start) / range_span
        };
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Returns roughly `count` round tick values covering the domain, ascending.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        let (lo, hi) = ordered(self.domain_start, self.domain_end);
        nice_ticks(lo, hi, count)
    }

    /// Spacing between the values returned by `ticks(count)`.
    #[must_use]
    pub fn tick_step(self, count: usize) -> f64 {
        let (lo, hi) = ordered(self.domain_start, self.domain_end);
        tick_step(lo, hi, count)
    }
}

fn validate_range(range: (f64, f64)) -> ChartResult<()> {
    if !range.0.is_finite() || !range.1.is_finite() {
        return Err(ChartError::InvalidData(
            "scale range must be finite".to_owned(),
        ));
    }
    Ok(())
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Signed tick increment: positive for steps >= 1, negative reciprocal for
/// fractional steps so that tick values can be computed without
/// accumulating float error.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= STEP_E10 {
        10.0
    } else if error >= STEP_E5 {
        5.0
    } else if error >= STEP_E2 {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Absolute tick spacing for `count` ticks over `[start, stop]`.
#[must_use]
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if !start.is_finite() || !stop.is_finite() || stop <= start || count == 0 {
        return 0.0;
    }
    let increment = tick_increment(start, stop, count);
    if increment < 0.0 {
        -1.0 / increment
    } else {
        increment
    }
}

/// Round tick values inside `[start, stop]`, ascending.
#[must_use]
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let increment = tick_increment(start, stop, count);
    if !increment.is_finite() || increment == 0.0 {
        return Vec::new();
    }

    if increment > 0.0 {
        let first = (start / increment).ceil();
        let last = (stop / increment).floor();
        steps_between(first, last)
            .map(|index| index * increment)
            .collect()
    } else {
        let inverse = -increment;
        let first = (start * inverse).ceil();
        let last = (stop * inverse).floor();
        steps_between(first, last)
            .map(|index| index / inverse)
            .collect()
    }
}

fn steps_between(first: f64, last: f64) -> impl Iterator<Item = f64> {
    let count = if last >= first {
        (last - first) as usize + 1
    } else {
        0
    };
    (0..count).map(move |offset| first + offset as f64)
}
