//! thetadata-types
//!
//! Wire-level constants, typed records, and the unified error type shared
//! across the thetadata workspace.
//!
//! - `enums`: option right, sampling interval, trading-hours selection.
//! - `exchange` / `conditions`: the service's numeric code tables.
//! - `instrument` / `records`: typed instruments and response rows.
//! - `market_time`: US/Eastern market-clock helpers.
//! - `error`: the `ThetaError` failure taxonomy.
#![warn(missing_docs)]

/// Quote- and trade-condition code tables.
pub mod conditions;
/// Request-side enumerations.
pub mod enums;
/// The unified error type.
pub mod error;
/// Exchange code table.
pub mod exchange;
/// Instrument descriptors.
pub mod instrument;
/// US/Eastern market-clock helpers.
pub mod market_time;
/// Typed response records.
pub mod records;

pub use conditions::{CONDITION_ABSENT, QuoteCondition, TradeCondition, TradeConditionFlags};
pub use enums::{Interval, OptionRight, TradingHours};
pub use error::ThetaError;
pub use exchange::Exchange;
pub use instrument::{Index, OptionContract, Stock};
pub use market_time::{MARKET_TZ, at_market_time, date_at_time, market_close, market_open};
pub use records::{
    EodReport, IndexPrice, OptionEodReport, OptionQuote, OptionTrade, Quote, StockEodReport,
    StockQuote, StockTrade, Trade,
};
