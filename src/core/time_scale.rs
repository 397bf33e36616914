use chrono::{DateTime, Datelike, Duration, Months, NaiveTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{
    SECONDS_PER_DAY, datetime_to_unix_seconds, unix_seconds_to_datetime,
};
use crate::core::scale::{LinearScale, tick_step};
use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_WEEK: f64 = SECONDS_PER_DAY * 7.0;
const SECONDS_PER_MONTH: f64 = SECONDS_PER_DAY * 30.0;
const SECONDS_PER_YEAR: f64 = SECONDS_PER_DAY * 365.0;

/// Upper bound on unit steps walked while enumerating calendar ticks.
const MAX_TICK_WALK: usize = 100_000;

/// Calendar interval used to place time-axis ticks on natural boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeInterval {
    Second(u32),
    Minute(u32),
    Hour(u32),
    Day(u32),
    Week,
    Month(u32),
    Year(u32),
}

impl TimeInterval {
    /// Candidate intervals ordered by approximate duration.
    const LADDER: [(TimeInterval, f64); 18] = [
        (TimeInterval::Second(1), 1.0),
        (TimeInterval::Second(5), 5.0),
        (TimeInterval::Second(15), 15.0),
        (TimeInterval::Second(30), 30.0),
        (TimeInterval::Minute(1), SECONDS_PER_MINUTE),
        (TimeInterval::Minute(5), 5.0 * SECONDS_PER_MINUTE),
        (TimeInterval::Minute(15), 15.0 * SECONDS_PER_MINUTE),
        (TimeInterval::Minute(30), 30.0 * SECONDS_PER_MINUTE),
        (TimeInterval::Hour(1), SECONDS_PER_HOUR),
        (TimeInterval::Hour(3), 3.0 * SECONDS_PER_HOUR),
        (TimeInterval::Hour(6), 6.0 * SECONDS_PER_HOUR),
        (TimeInterval::Hour(12), 12.0 * SECONDS_PER_HOUR),
        (TimeInterval::Day(1), SECONDS_PER_DAY),
        (TimeInterval::Day(2), 2.0 * SECONDS_PER_DAY),
        (TimeInterval::Week, SECONDS_PER_WEEK),
        (TimeInterval::Month(1), SECONDS_PER_MONTH),
        (TimeInterval::Month(3), 3.0 * SECONDS_PER_MONTH),
        (TimeInterval::Year(1), SECONDS_PER_YEAR),
    ];

    /// Picks the interval whose duration is closest (by ratio) to
    /// `span / count`. Spans beyond the ladder use a round number of years.
    #[must_use]
    pub fn for_span(start_seconds: f64, end_seconds: f64, count: usize) -> Self {
        let span = (end_seconds - start_seconds).abs();
        let target = span / count.max(1) as f64;

        let upper = Self::LADDER.partition_point(|(_, duration)| *duration <= target);
        if upper == 0 {
            return TimeInterval::Second(1);
        }
        if upper == Self::LADDER.len() {
            let years = tick_step(
                start_seconds.min(end_seconds) / SECONDS_PER_YEAR,
                start_seconds.max(end_seconds) / SECONDS_PER_YEAR,
                count,
            );
            return TimeInterval::Year((years.floor() as u32).max(1));
        }

        let (below, below_duration) = Self::LADDER[upper - 1];
        let (above, above_duration) = Self::LADDER[upper];
        if target / below_duration < above_duration / target {
            below
        } else {
            above
        }
    }

    fn floor(self, time: DateTime<Utc>) -> DateTime<Utc> {
        let date = time.date_naive();
        let at = |hour: u32, minute: u32, second: u32| {
            let clock = NaiveTime::from_hms_opt(hour, minute, second).unwrap_or(NaiveTime::MIN);
            Utc.from_utc_datetime(&date.and_time(clock))
        };
        match self {
            TimeInterval::Second(_) => at(time.hour(), time.minute(), time.second()),
            TimeInterval::Minute(_) => at(time.hour(), time.minute(), 0),
            TimeInterval::Hour(_) => at(time.hour(), 0, 0),
            TimeInterval::Day(_) => at(0, 0, 0),
            TimeInterval::Week => {
                let back = i64::from(date.weekday().num_days_from_sunday());
                at(0, 0, 0) - Duration::days(back)
            }
            TimeInterval::Month(_) => {
                let first = date.with_day(1).unwrap_or(date);
                Utc.from_utc_datetime(&first.and_time(NaiveTime::MIN))
            }
            TimeInterval::Year(_) => {
                let first = date.with_day(1).and_then(|d| d.with_month(1)).unwrap_or(date);
                Utc.from_utc_datetime(&first.and_time(NaiveTime::MIN))
            }
        }
    }

    /// Advances by one base unit (ignoring the step).
    fn next(self, time: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            TimeInterval::Second(_) => time.checked_add_signed(Duration::seconds(1)),
            TimeInterval::Minute(_) => time.checked_add_signed(Duration::minutes(1)),
            TimeInterval::Hour(_) => time.checked_add_signed(Duration::hours(1)),
            TimeInterval::Day(_) => time.checked_add_signed(Duration::days(1)),
            TimeInterval::Week => time.checked_add_signed(Duration::weeks(1)),
            TimeInterval::Month(_) => time.checked_add_months(Months::new(1)),
            TimeInterval::Year(_) => time.checked_add_months(Months::new(12)),
        }
    }

    fn matches_step(self, time: DateTime<Utc>) -> bool {
        match self {
            TimeInterval::Second(step) => time.second() % step.max(1) == 0,
            TimeInterval::Minute(step) => time.minute() % step.max(1) == 0,
            TimeInterval::Hour(step) => time.hour() % step.max(1) == 0,
            TimeInterval::Day(step) => (time.day() - 1) % step.max(1) == 0,
            TimeInterval::Week => true,
            TimeInterval::Month(step) => time.month0() % step.max(1) == 0,
            TimeInterval::Year(step) => time.year().rem_euclid(step.max(1) as i32) == 0,
        }
    }

    /// Interval boundaries inside `[start, end]` that satisfy the step.
    #[must_use]
    pub fn range(self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<DateTime<Utc>> {
        let mut out = Vec::new();
        let mut cursor = self.floor(start);
        if cursor < start {
            match self.next(cursor) {
                Some(next) => cursor = next,
                None => return out,
            }
        }

        for _ in 0..MAX_TICK_WALK {
            if cursor > end {
                break;
            }
            if self.matches_step(cursor) {
                out.push(cursor);
            }
            match self.next(cursor) {
                Some(next) => cursor = next,
                None => break,
            }
        }
        out
    }
}

/// Horizontal scale mapping UTC instants onto pixel x coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    /// Builds a scale over `[start, end]`.
    ///
    /// A zero-length domain is widened by half a day on each side so the
    /// scale stays invertible.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, range: (f64, f64)) -> ChartResult<Self> {
        let mut start_seconds = datetime_to_unix_seconds(start.min(end));
        let mut end_seconds = datetime_to_unix_seconds(start.max(end));
        if start_seconds == end_seconds {
            start_seconds -= SECONDS_PER_DAY / 2.0;
            end_seconds += SECONDS_PER_DAY / 2.0;
        }
        Ok(Self {
            linear: LinearScale::new((start_seconds, end_seconds), range)?,
        })
    }

    /// Fits the domain to the earliest and latest sample.
    pub fn from_points(points: &[DataPoint], range: (f64, f64)) -> ChartResult<Self> {
        let Some(first) = points.first() else {
            return Err(ChartError::EmptyDataset);
        };
        let (min, max) = points
            .iter()
            .fold((first.time, first.time), |(min, max), point| {
                (min.min(point.time), max.max(point.time))
            });
        Self::new(min, max, range)
    }

    pub fn with_range(self, range: (f64, f64)) -> ChartResult<Self> {
        Ok(Self {
            linear: self.linear.with_range(range)?,
        })
    }

    /// Domain bounds as fractional unix seconds.
    #[must_use]
    pub fn domain_seconds(self) -> (f64, f64) {
        self.linear.domain()
    }

    pub fn domain(self) -> ChartResult<(DateTime<Utc>, DateTime<Utc>)> {
        let (start, end) = self.linear.domain();
        Ok((
            unix_seconds_to_datetime(start)?,
            unix_seconds_to_datetime(end)?,
        ))
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    #[must_use]
    pub fn apply(self, time: DateTime<Utc>) -> f64 {
        self.linear.apply(datetime_to_unix_seconds(time))
    }

    pub fn invert(self, pixel: f64) -> ChartResult<DateTime<Utc>> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        unix_seconds_to_datetime(self.linear.invert(pixel))
    }

    #[must_use]
    pub fn tick_interval(self, count: usize) -> TimeInterval {
        let (start, end) = self.linear.domain();
        TimeInterval::for_span(start, end, count)
    }

    /// Calendar-aligned ticks inside the domain, ascending.
    pub fn ticks(self, count: usize) -> ChartResult<Vec<DateTime<Utc>>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let (start, end) = self.domain()?;
        Ok(self.tick_interval(count).range(start, end))
    }
}
