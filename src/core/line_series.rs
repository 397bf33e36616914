use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, TimeScale, ValueScale};

/// Sample position in plot-area pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One drawing command of a line path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CubicTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
}

impl PathCommand {
    /// End point of the command.
    #[must_use]
    pub fn end(self) -> PixelPoint {
        match self {
            PathCommand::MoveTo { x, y }
            | PathCommand::LineTo { x, y }
            | PathCommand::CubicTo { x, y, .. } => PixelPoint::new(x, y),
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        match self {
            PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => {
                x.is_finite() && y.is_finite()
            }
            PathCommand::CubicTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => [x1, y1, x2, y2, x, y].iter().all(|v| v.is_finite()),
        }
    }
}

/// Projects samples through the scales, preserving input order.
///
/// The function is deterministic and side-effect free so rendering and tests
/// consume the exact same geometry.
#[must_use]
pub fn project_points(
    points: &[DataPoint],
    time_scale: TimeScale,
    value_scale: ValueScale,
) -> Vec<PixelPoint> {
    #[cfg(feature = "parallel-projection")]
    {
        use rayon::prelude::*;

        if points.len() >= PARALLEL_PROJECTION_THRESHOLD {
            return points
                .par_iter()
                .map(|point| project_point(point, time_scale, value_scale))
                .collect();
        }
    }

    points
        .iter()
        .map(|point| project_point(point, time_scale, value_scale))
        .collect()
}

#[cfg(feature = "parallel-projection")]
const PARALLEL_PROJECTION_THRESHOLD: usize = 8_192;

fn project_point(point: &DataPoint, time_scale: TimeScale, value_scale: ValueScale) -> PixelPoint {
    PixelPoint::new(time_scale.apply(point.time), value_scale.apply(point.value))
}

/// Builds a monotone-in-x cubic path through `points`.
///
/// Tangents follow Steffen's method, so the curve never overshoots the
/// samples vertically and stays monotone wherever the data is. Points are
/// expected in ascending x order.
#[must_use]
pub fn monotone_x_path(points: &[PixelPoint]) -> Vec<PathCommand> {
    let Some(first) = points.first() else {
        return Vec::new();
    };
    let mut commands = Vec::with_capacity(points.len());
    commands.push(PathCommand::MoveTo {
        x: first.x,
        y: first.y,
    });

    match points.len() {
        1 => return commands,
        2 => {
            commands.push(PathCommand::LineTo {
                x: points[1].x,
                y: points[1].y,
            });
            return commands;
        }
        _ => {}
    }

    let mut previous_tangent = 0.0;
    for (index, window) in points.windows(3).enumerate() {
        let tangent = interior_tangent(window[0], window[1], window[2]);
        let start_tangent = if index == 0 {
            endpoint_tangent(window[0], window[1], tangent)
        } else {
            previous_tangent
        };
        commands.push(hermite_segment(window[0], window[1], start_tangent, tangent));
        previous_tangent = tangent;
    }

    let tail = &points[points.len() - 2..];
    let end_tangent = endpoint_tangent(tail[0], tail[1], previous_tangent);
    commands.push(hermite_segment(
        tail[0],
        tail[1],
        previous_tangent,
        end_tangent,
    ));

    commands
}

fn sign(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}

/// Tangent at `current` from its two neighbours.
fn interior_tangent(previous: PixelPoint, current: PixelPoint, next: PixelPoint) -> f64 {
    let h0 = current.x - previous.x;
    let h1 = next.x - current.x;
    let s0 = divide_slope(current.y - previous.y, h0, h1);
    let s1 = divide_slope(next.y - current.y, h1, h0);
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let tangent = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if tangent.is_finite() { tangent } else { 0.0 }
}

// A zero-width step takes the sign of the neighbouring step so that
// coincident x values produce an infinite slope of the right direction.
fn divide_slope(dy: f64, h: f64, other_h: f64) -> f64 {
    if h != 0.0 {
        dy / h
    } else if other_h < 0.0 {
        dy / -0.0
    } else {
        dy / 0.0
    }
}

/// One-sided tangent for the first or last sample.
fn endpoint_tangent(start: PixelPoint, end: PixelPoint, neighbour_tangent: f64) -> f64 {
    let h = end.x - start.x;
    if h == 0.0 {
        neighbour_tangent
    } else {
        (3.0 * (end.y - start.y) / h - neighbour_tangent) / 2.0
    }
}

fn hermite_segment(start: PixelPoint, end: PixelPoint, t0: f64, t1: f64) -> PathCommand {
    let dx = (end.x - start.x) / 3.0;
    PathCommand::CubicTo {
        x1: start.x + dx,
        y1: start.y + dx * t0,
        x2: end.x - dx,
        y2: end.y - dx * t1,
        x: end.x,
        y: end.y,
    }
}
