use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{decimal_to_f64, parse_calendar_date};
use crate::error::{ChartError, ChartResult};

/// Outer pixel size of the chart container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plot area for axes and labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 35.0,
            left: 20.0,
        }
    }
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Raw `{ date, value }` record as supplied by the hosting view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRecord {
    pub date: String,
    pub value: f64,
}

impl DataRecord {
    #[must_use]
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }

    /// Parses the record into a chart point.
    pub fn to_point(&self) -> ChartResult<DataPoint> {
        let time = parse_calendar_date(&self.date)?;
        DataPoint::new(time, self.value)
    }

    /// Parses a JSON array of `{ "date": ..., "value": ... }` objects.
    pub fn parse_json_array(input: &str) -> ChartResult<Vec<Self>> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse records: {e}")))
    }
}

/// Parses every record, failing on the first invalid date or value.
pub fn parse_records(records: &[DataRecord]) -> ChartResult<Vec<DataPoint>> {
    records.iter().map(DataRecord::to_point).collect()
}

/// One sample of the series: a UTC instant and its value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub time: DateTime<Utc>,
    pub value: f64,
}

impl DataPoint {
    pub fn new(time: DateTime<Utc>, value: f64) -> ChartResult<Self> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(
                "point value must be finite".to_owned(),
            ));
        }
        Ok(Self { time, value })
    }

    /// Builds a point from a date string accepted by `parse_calendar_date`.
    pub fn parse(date: &str, value: f64) -> ChartResult<Self> {
        Self::new(parse_calendar_date(date)?, value)
    }

    pub fn from_decimal_value(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Self::new(time, decimal_to_f64(value, "value")?)
    }
}
