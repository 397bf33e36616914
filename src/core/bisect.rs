use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::DataPoint;

/// Leftmost insertion index for `time` within `points[lo..]`.
///
/// `points` must be sorted by time ascending; `lo` is clamped to the slice
/// length.
#[must_use]
pub fn bisect_time_left(points: &[DataPoint], time: DateTime<Utc>, lo: usize) -> usize {
    let lo = lo.min(points.len());
    lo + points[lo..].partition_point(|point| point.time < time)
}

/// Index of the sample nearest to `time` in date distance.
///
/// Bisects from index 1 so both neighbours `i - 1` and `i` are candidates,
/// then keeps the closer one. Ties resolve to the earlier sample.
#[must_use]
pub fn nearest_point_index(points: &[DataPoint], time: DateTime<Utc>) -> Option<usize> {
    if points.is_empty() {
        return None;
    }

    let index = bisect_time_left(points, time, 1);
    let mut candidates: SmallVec<[(OrderedFloat<f64>, usize); 2]> = SmallVec::new();
    for candidate in [index - 1, index] {
        if let Some(point) = points.get(candidate) {
            let distance = time.signed_duration_since(point.time).num_milliseconds().abs();
            candidates.push((OrderedFloat(distance as f64), candidate));
        }
    }

    candidates
        .into_iter()
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate)
}
