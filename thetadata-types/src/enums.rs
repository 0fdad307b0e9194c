//! Small request-side enumerations: option right, sampling interval, and
//! trading-hours selection.

use serde::{Deserialize, Serialize};

/// Side of an option contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionRight {
    /// A call option.
    #[serde(rename = "C")]
    Call,
    /// A put option.
    #[serde(rename = "P")]
    Put,
}

impl OptionRight {
    /// The single-letter wire form used in requests and responses.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Call => "C",
            Self::Put => "P",
        }
    }

    /// Parse the wire form. Returns `None` for anything but `C`/`P`.
    #[must_use]
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "C" => Some(Self::Call),
            "P" => Some(Self::Put),
            _ => None,
        }
    }
}

impl std::fmt::Display for OptionRight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sampling interval for historical and at-time requests.
///
/// The wire value is milliseconds; `Tick` requests every record the service
/// has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Interval {
    /// Tick-level data, no resampling.
    Tick,
    /// One-second bars.
    Second,
    /// One-minute bars.
    Minute,
    /// Five-minute bars.
    FiveMinutes,
    /// Fifteen-minute bars.
    FifteenMinutes,
    /// A custom interval in milliseconds.
    Millis(u64),
}

impl Interval {
    /// The interval length in milliseconds, as sent on the wire.
    #[must_use]
    pub const fn millis(self) -> u64 {
        match self {
            Self::Tick => 0,
            Self::Second => 1_000,
            Self::Minute => 60_000,
            Self::FiveMinutes => 300_000,
            Self::FifteenMinutes => 900_000,
            Self::Millis(ms) => ms,
        }
    }
}

/// Which trading session a request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TradingHours {
    /// Regular trading hours only.
    #[default]
    Regular,
    /// Include extended (pre/post-market) hours.
    Extended,
}

impl TradingHours {
    /// The value of the `rth` query parameter.
    #[must_use]
    pub const fn rth_value(self) -> &'static str {
        match self {
            Self::Regular => "true",
            Self::Extended => "false",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_wire_values() {
        assert_eq!(Interval::Tick.millis(), 0);
        assert_eq!(Interval::Second.millis(), 1_000);
        assert_eq!(Interval::Minute.millis(), 60_000);
        assert_eq!(Interval::FiveMinutes.millis(), 300_000);
        assert_eq!(Interval::FifteenMinutes.millis(), 900_000);
        assert_eq!(Interval::Millis(42).millis(), 42);
    }

    #[test]
    fn right_round_trips() {
        assert_eq!(OptionRight::from_wire("C"), Some(OptionRight::Call));
        assert_eq!(OptionRight::from_wire("P"), Some(OptionRight::Put));
        assert_eq!(OptionRight::from_wire("X"), None);
        assert_eq!(OptionRight::Put.as_str(), "P");
    }

    #[test]
    fn trading_hours_rth() {
        assert_eq!(TradingHours::Regular.rth_value(), "true");
        assert_eq!(TradingHours::Extended.rth_value(), "false");
    }
}
