use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, format_datetime};
use crate::core::{TimeScale, ValueScale};
use crate::error::ChartResult;

/// One labelled tick: domain value, pixel position along the axis and text.
///
/// Time ticks carry their value as unix seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub position_px: f64,
    pub label: String,
}

/// Calendar-aligned ticks for the horizontal time axis.
pub fn time_axis_ticks(
    scale: TimeScale,
    count: usize,
    label_format: &str,
) -> ChartResult<Vec<AxisTick>> {
    scale
        .ticks(count)?
        .into_iter()
        .map(|time| {
            Ok(AxisTick {
                value: datetime_to_unix_seconds(time),
                position_px: scale.apply(time),
                label: format_datetime(time, label_format)?,
            })
        })
        .collect()
}

/// Round-number ticks for the vertical value axis.
#[must_use]
pub fn value_axis_ticks(scale: ValueScale, count: usize) -> Vec<AxisTick> {
    let step = scale.tick_step(count);
    scale
        .ticks(count)
        .into_iter()
        .map(|value| AxisTick {
            value,
            position_px: scale.apply(value),
            label: format_tick_value(value, step),
        })
        .collect()
}

/// Number of decimals needed to tell ticks `step` apart.
#[must_use]
pub fn precision_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let exponent = step.abs().log10().floor();
    if exponent >= 0.0 { 0 } else { (-exponent) as usize }
}

/// Fixed-precision label with comma-grouped thousands.
#[must_use]
pub fn format_tick_value(value: f64, step: f64) -> String {
    let precision = precision_for_step(step);
    let mut text = format!("{value:.precision$}");
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text.remove(0);
    }

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}
