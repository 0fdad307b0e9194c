//! US/Eastern market-clock helpers.
//!
//! ThetaData timestamps everything in US/Eastern wall-clock time: request
//! times are milliseconds since Eastern midnight and response rows carry an
//! Eastern trading date. These helpers keep that convention in one place.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// The exchange timezone used for all request and response timestamps.
pub const MARKET_TZ: Tz = chrono_tz::America::New_York;

/// Regular-session open, Eastern wall-clock.
#[must_use]
pub fn market_open() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 30, 0).expect("valid wall-clock time")
}

/// Regular-session close, Eastern wall-clock.
#[must_use]
pub fn market_close() -> NaiveTime {
    NaiveTime::from_hms_opt(16, 0, 0).expect("valid wall-clock time")
}

/// The current moment in Eastern time.
#[must_use]
pub fn now() -> DateTime<Tz> {
    Utc::now().with_timezone(&MARKET_TZ)
}

/// Interpret a naive wall-clock value as Eastern time.
///
/// Returns `None` for local times that do not exist (the spring-forward gap);
/// ambiguous fall-back times resolve to the earlier instant.
#[must_use]
pub fn at_market_time(naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    MARKET_TZ.from_local_datetime(&naive).earliest()
}

/// Combine a trading date and an Eastern wall-clock time into an instant.
#[must_use]
pub fn date_at_time(date: NaiveDate, time: NaiveTime) -> Option<DateTime<Tz>> {
    at_market_time(date.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combines_date_and_time_in_eastern() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 20).unwrap();
        let dt = date_at_time(date, market_open()).unwrap();
        assert_eq!(dt.naive_local(), date.and_time(market_open()));
        assert_eq!(dt.timezone(), MARKET_TZ);
    }

    #[test]
    fn spring_forward_gap_is_rejected() {
        // 2:30 AM does not exist on 2025-03-09 in New York.
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let time = NaiveTime::from_hms_opt(2, 30, 0).unwrap();
        assert!(date_at_time(date, time).is_none());
    }

    #[test]
    fn now_is_eastern() {
        assert_eq!(now().timezone(), MARKET_TZ);
    }
}
