//! Typed response records.
//!
//! Each record corresponds 1:1 to one row of the service's tabular reply and
//! is immutable once constructed: a row either parses fully or is rejected,
//! so no record is ever partially populated.

use chrono::DateTime;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::conditions::{QuoteCondition, TradeCondition};
use crate::exchange::Exchange;
use crate::instrument::{Index, OptionContract, Stock};

/// A national-best-bid-and-offer snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote<I> {
    /// The quoted instrument.
    pub instrument: I,
    /// Quote timestamp, Eastern time.
    pub time: DateTime<Tz>,

    /// Best bid price.
    pub bid: Decimal,
    /// Size at the best bid.
    pub bid_size: u32,
    /// Exchange posting the best bid.
    pub bid_exchange: Exchange,
    /// Condition on the bid side.
    pub bid_condition: QuoteCondition,

    /// Best ask price.
    pub ask: Decimal,
    /// Size at the best ask.
    pub ask_size: u32,
    /// Exchange posting the best ask.
    pub ask_exchange: Exchange,
    /// Condition on the ask side.
    pub ask_condition: QuoteCondition,
}

/// Quote for one option contract.
pub type OptionQuote = Quote<OptionContract>;
/// Quote for a stock root.
pub type StockQuote = Quote<Stock>;

/// A single trade print.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trade<I> {
    /// The traded instrument.
    pub instrument: I,
    /// Trade timestamp, Eastern time.
    pub time: DateTime<Tz>,

    /// Reporting exchange.
    pub exchange: Exchange,
    /// Conditions attached to the print, lead condition first. The wire
    /// sentinel (255) columns are dropped.
    pub conditions: Vec<TradeCondition>,
    /// Trade price.
    pub price: Decimal,
    /// Exchange sequence number.
    pub sequence: u64,
    /// Trade size.
    pub size: u32,
    /// Number of records between this print and the requested time.
    pub records_back: u32,
}

impl<I> Trade<I> {
    /// The lead (primary) condition of the print, if any.
    #[must_use]
    pub fn condition(&self) -> Option<TradeCondition> {
        self.conditions.first().copied()
    }
}

/// Trade for one option contract.
pub type OptionTrade = Trade<OptionContract>;
/// Trade for a stock root.
pub type StockTrade = Trade<Stock>;

/// End-of-day summary for one instrument and date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EodReport<I> {
    /// The reported instrument.
    pub instrument: I,
    /// Report timestamp, Eastern time.
    pub time: DateTime<Tz>,
    /// Timestamp of the session's last trade, Eastern time.
    pub last_trade: DateTime<Tz>,

    /// Closing bid price.
    pub bid: Decimal,
    /// Size at the closing bid.
    pub bid_size: u32,
    /// Exchange posting the closing bid.
    pub bid_exchange: Exchange,
    /// Condition on the bid side.
    pub bid_condition: QuoteCondition,

    /// Closing ask price.
    pub ask: Decimal,
    /// Size at the closing ask.
    pub ask_size: u32,
    /// Exchange posting the closing ask.
    pub ask_exchange: Exchange,
    /// Condition on the ask side.
    pub ask_condition: QuoteCondition,

    /// Session open price.
    pub open: Decimal,
    /// Session high price.
    pub high: Decimal,
    /// Session low price.
    pub low: Decimal,
    /// Session close price.
    pub close: Decimal,

    /// Session volume.
    pub volume: u64,
    /// Number of trades in the session.
    pub count: u64,
}

/// End-of-day report for one option contract.
pub type OptionEodReport = EodReport<OptionContract>;
/// End-of-day report for a stock root.
pub type StockEodReport = EodReport<Stock>;

/// A sampled index level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexPrice {
    /// The index.
    pub instrument: Index,
    /// Sample timestamp, Eastern time.
    pub time: DateTime<Tz>,
    /// Index level.
    pub price: Decimal,
}
