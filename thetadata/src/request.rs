//! Request parameter values and their wire encodings.
//!
//! The terminal speaks a compact query-string dialect: prices travel as
//! integral 1/10-cent units, dates as `YYYYMMDD` strings, and times as
//! milliseconds since Eastern midnight. The `*Param` enums accept the natural
//! Rust forms of each value and validate on conversion, before anything is
//! dispatched.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use thetadata_types::{Interval, MARKET_TZ, ThetaError};

/// Ordered query-string parameters for one request.
pub(crate) type Query = Vec<(String, String)>;

/// A price accepted in request position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceParam {
    /// Whole dollars.
    Dollars(i64),
    /// An exact decimal dollar amount.
    Exact(Decimal),
    /// A decimal string such as `"13.37"`.
    Text(String),
}

impl From<i64> for PriceParam {
    fn from(value: i64) -> Self {
        Self::Dollars(value)
    }
}

impl From<i32> for PriceParam {
    fn from(value: i32) -> Self {
        Self::Dollars(i64::from(value))
    }
}

impl From<Decimal> for PriceParam {
    fn from(value: Decimal) -> Self {
        Self::Exact(value)
    }
}

impl From<&str> for PriceParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PriceParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Encode a price as integral 1/10-cent units.
///
/// Midpoints round to even, matching the service's own tables.
///
/// # Errors
/// `InvalidParam` for unparseable or out-of-range values.
pub fn format_price(value: impl Into<PriceParam>) -> Result<i64, ThetaError> {
    let exact = match value.into() {
        PriceParam::Dollars(d) => return Ok(d * 1000),
        PriceParam::Exact(d) => d,
        PriceParam::Text(s) => s
            .parse::<Decimal>()
            .map_err(|_| ThetaError::invalid_param(format!("invalid price: {s:?}")))?,
    };
    (exact * Decimal::from(1000))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .to_i64()
        .ok_or_else(|| ThetaError::invalid_param(format!("price out of range: {exact}")))
}

/// A calendar date accepted in request position.
///
/// Timezone-aware datetimes are converted to Eastern time before the date is
/// taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParam {
    /// A `YYYYMMDD` integer such as `20250217`.
    Ymd(u32),
    /// A `YYYYMMDD` string.
    Text(String),
    /// A parsed date.
    Date(NaiveDate),
}

impl From<u32> for DateParam {
    fn from(value: u32) -> Self {
        Self::Ymd(value)
    }
}

impl From<&str> for DateParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DateParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for DateParam {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for DateParam {
    fn from(value: NaiveDateTime) -> Self {
        Self::Date(value.date())
    }
}

impl<Z: TimeZone> From<DateTime<Z>> for DateParam {
    fn from(value: DateTime<Z>) -> Self {
        Self::Date(value.with_timezone(&MARKET_TZ).date_naive())
    }
}

/// Resolve any accepted date form to a calendar date.
pub(crate) fn resolve_date(value: DateParam) -> Result<NaiveDate, ThetaError> {
    let text = match value {
        DateParam::Date(d) => return Ok(d),
        DateParam::Ymd(n) => n.to_string(),
        DateParam::Text(s) => s,
    };
    NaiveDate::parse_from_str(&text, "%Y%m%d")
        .map_err(|_| ThetaError::invalid_param(format!("invalid date: {text:?}")))
}

/// The wire `YYYYMMDD` form of a date.
pub(crate) fn date_string(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Encode a date in the wire `YYYYMMDD` form.
///
/// # Errors
/// `InvalidParam` for values that are not a calendar date.
pub fn format_date(value: impl Into<DateParam>) -> Result<String, ThetaError> {
    Ok(date_string(resolve_date(value.into())?))
}

/// A wall-clock time accepted in request position.
///
/// Naive values are interpreted as Eastern time; aware values are converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeParam {
    /// A parsed wall-clock time.
    Time(NaiveTime),
    /// An `HH:MM:SS` string in 24-hour time.
    Text(String),
}

impl From<NaiveTime> for TimeParam {
    fn from(value: NaiveTime) -> Self {
        Self::Time(value)
    }
}

impl From<&str> for TimeParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TimeParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDateTime> for TimeParam {
    fn from(value: NaiveDateTime) -> Self {
        Self::Time(value.time())
    }
}

impl<Z: TimeZone> From<DateTime<Z>> for TimeParam {
    fn from(value: DateTime<Z>) -> Self {
        Self::Time(value.with_timezone(&MARKET_TZ).time())
    }
}

/// Encode a time as milliseconds since Eastern midnight.
///
/// # Errors
/// `InvalidParam` for unparseable time strings.
pub fn format_time(value: impl Into<TimeParam>) -> Result<i64, ThetaError> {
    let time = match value.into() {
        TimeParam::Time(t) => t,
        TimeParam::Text(s) => NaiveTime::parse_from_str(&s, "%H:%M:%S")
            .map_err(|_| ThetaError::invalid_param(format!("invalid time: {s:?}")))?,
    };
    let millis = i64::from(time.hour()) * 3_600_000
        + i64::from(time.minute()) * 60_000
        + i64::from(time.second()) * 1_000
        + i64::from(time.nanosecond() / 1_000_000);
    Ok(millis)
}

/// A combined date and time accepted in request position.
///
/// Naive values are interpreted as Eastern time; aware values are converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTimeParam {
    /// A `YYYYMMDD HH:MM:SS` string.
    Text(String),
    /// A parsed wall-clock datetime.
    Naive(NaiveDateTime),
}

impl From<&str> for DateTimeParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DateTimeParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDateTime> for DateTimeParam {
    fn from(value: NaiveDateTime) -> Self {
        Self::Naive(value)
    }
}

impl<Z: TimeZone> From<DateTime<Z>> for DateTimeParam {
    fn from(value: DateTime<Z>) -> Self {
        Self::Naive(value.with_timezone(&MARKET_TZ).naive_local())
    }
}

/// Split a datetime into its wire `(YYYYMMDD, ms-of-day)` pair.
///
/// # Errors
/// `InvalidParam` for unparseable strings.
pub fn format_date_time(value: impl Into<DateTimeParam>) -> Result<(String, i64), ThetaError> {
    match value.into() {
        DateTimeParam::Naive(dt) => Ok((
            date_string(dt.date()),
            format_time(TimeParam::Time(dt.time()))?,
        )),
        DateTimeParam::Text(s) => {
            let (date, time) = s
                .split_once(' ')
                .ok_or_else(|| ThetaError::invalid_param(format!("invalid date time: {s:?}")))?;
            let date = resolve_date(DateParam::Text(date.to_string()))?;
            let millis = format_time(TimeParam::Text(time.to_string()))?;
            Ok((date_string(date), millis))
        }
    }
}

/// Inclusive `(start, end)` windows of at most `split_days` days, in order,
/// tiling the full range. Used for client-side pagination of long requests.
pub(crate) fn day_ranges(
    start: NaiveDate,
    end: NaiveDate,
    split_days: u32,
) -> Vec<(NaiveDate, NaiveDate)> {
    let step = chrono::Days::new(u64::from(split_days));
    let span = chrono::Days::new(u64::from(split_days.saturating_sub(1)));

    let mut windows = Vec::new();
    let mut cursor = start;
    while cursor <= end {
        let window_end = cursor.checked_add_days(span).unwrap_or(end).min(end);
        windows.push((cursor, window_end));
        match cursor.checked_add_days(step) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    windows
}

/// Expand a base query into per-window queries with `start_date`/`end_date`
/// bounds filled in.
pub(crate) fn windowed_queries(
    base: &Query,
    start: NaiveDate,
    end: NaiveDate,
    split_days: u32,
) -> Vec<Query> {
    day_ranges(start, end, split_days)
        .into_iter()
        .map(|(s, e)| {
            let mut query = base.clone();
            query.push(("start_date".to_string(), date_string(s)));
            query.push(("end_date".to_string(), date_string(e)));
            query
        })
        .collect()
}

/// Window size for historical requests: tick-level intervals page in 3-day
/// windows, coarser intervals in 7-day windows.
pub(crate) const fn history_split_days(interval: Interval) -> u32 {
    if interval.millis() <= 120 { 3 } else { 7 }
}

/// Validate an ordered date range.
pub(crate) fn check_range(start: NaiveDate, end: NaiveDate) -> Result<(), ThetaError> {
    if start > end {
        return Err(ThetaError::invalid_param(format!(
            "start date {start} is after end date {end}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_ranges_match_service_windows() {
        let windows = day_ranges(date(2024, 1, 1), date(2024, 3, 31), 30);
        let expected = vec![
            (date(2024, 1, 1), date(2024, 1, 30)),
            (date(2024, 1, 31), date(2024, 2, 29)),
            (date(2024, 3, 1), date(2024, 3, 30)),
            (date(2024, 3, 31), date(2024, 3, 31)),
        ];
        assert_eq!(windows, expected);
    }

    #[test]
    fn single_day_range() {
        assert_eq!(
            day_ranges(date(2025, 2, 17), date(2025, 2, 17), 30),
            vec![(date(2025, 2, 17), date(2025, 2, 17))]
        );
    }

    #[test]
    fn history_windows_by_interval() {
        assert_eq!(history_split_days(Interval::Tick), 3);
        assert_eq!(history_split_days(Interval::Minute), 7);
        assert_eq!(history_split_days(Interval::Millis(120)), 3);
        assert_eq!(history_split_days(Interval::Millis(121)), 7);
    }

    proptest! {
        // Windows tile the requested range: ordered, contiguous, within the
        // split size, and covering every day exactly once.
        #[test]
        fn day_ranges_tile_the_range(
            start_offset in 0i64..20_000,
            span_days in 0i64..400,
            split in 1u32..60,
        ) {
            let start = date(1990, 1, 1) + chrono::Duration::days(start_offset);
            let end = start + chrono::Duration::days(span_days);
            let windows = day_ranges(start, end, split);

            prop_assert!(!windows.is_empty());
            prop_assert_eq!(windows.first().unwrap().0, start);
            prop_assert_eq!(windows.last().unwrap().1, end);

            let mut expected_start = start;
            for (s, e) in &windows {
                prop_assert_eq!(*s, expected_start);
                prop_assert!(s <= e);
                prop_assert!(*e <= end);
                let len = (*e - *s).num_days() + 1;
                prop_assert!(len <= i64::from(split));
                expected_start = *e + chrono::Duration::days(1);
            }
            prop_assert_eq!(expected_start, end + chrono::Duration::days(1));
        }
    }
}
