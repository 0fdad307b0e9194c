//! CSV response decoding.
//!
//! Every endpoint is requested with `use_csv=true`, so a payload is a header
//! line followed by data rows. A row either parses fully into its typed
//! fields or is rejected with a `Parse` error naming the offending column.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use rust_decimal::Decimal;

use thetadata_types::{
    CONDITION_ABSENT, Exchange, OptionRight, QuoteCondition, ThetaError, TradeCondition,
    at_market_time,
};

/// Column header shared by all rows of one payload.
#[derive(Debug)]
pub(crate) struct Header {
    columns: Vec<String>,
    index: HashMap<String, usize>,
}

impl Header {
    fn new(line: &str) -> Self {
        let columns: Vec<String> = line.split(',').map(|c| c.trim().to_string()).collect();
        let index = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();
        Self { columns, index }
    }
}

/// One data row zipped against its header.
#[derive(Debug)]
pub(crate) struct Row {
    header: Arc<Header>,
    values: Vec<String>,
}

impl Row {
    /// Look up a required column.
    pub(crate) fn get(&self, column: &str) -> Result<&str, ThetaError> {
        self.try_get(column)
            .ok_or_else(|| ThetaError::parse(format!("missing column {column:?}")))
    }

    /// Look up an optional column.
    pub(crate) fn try_get(&self, column: &str) -> Option<&str> {
        self.header
            .index
            .get(column)
            .map(|&i| self.values[i].as_str())
    }
}

/// Decode a CSV payload into rows. An empty body decodes to no rows.
pub(crate) fn decode_rows(body: &str) -> Result<Vec<Row>, ThetaError> {
    let mut lines = body.lines().map(str::trim).filter(|l| !l.is_empty());
    let Some(first) = lines.next() else {
        return Ok(Vec::new());
    };
    let header = Arc::new(Header::new(first));

    let mut rows = Vec::new();
    for line in lines {
        let values: Vec<String> = line.split(',').map(str::to_string).collect();
        if values.len() != header.columns.len() {
            return Err(ThetaError::parse(format!(
                "row has {} fields, header has {}",
                values.len(),
                header.columns.len()
            )));
        }
        rows.push(Row {
            header: Arc::clone(&header),
            values,
        });
    }
    Ok(rows)
}

/// True for the all-zero filler rows the service emits for days without a
/// session (weekends, holidays).
pub(crate) fn is_filler_row(row: &Row) -> bool {
    row.try_get("date") == Some("0")
}

/// Parse a `YYYYMMDD` response date.
pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, ThetaError> {
    NaiveDate::parse_from_str(value, "%Y%m%d")
        .map_err(|_| ThetaError::parse(format!("invalid date: {value:?}")))
}

/// Convert a milliseconds-since-midnight value to a wall-clock time.
///
/// Values at or past 24:00 clamp to the last representable millisecond of
/// the day.
pub(crate) fn parse_time_of_day(millis: i64) -> NaiveTime {
    let clamped = millis.clamp(0, 86_399_999);
    let (hour, rest) = (clamped / 3_600_000, clamped % 3_600_000);
    let (minute, rest) = (rest / 60_000, rest % 60_000);
    let (second, milli) = (rest / 1_000, rest % 1_000);
    NaiveTime::from_hms_milli_opt(hour as u32, minute as u32, second as u32, milli as u32)
        .unwrap_or(NaiveTime::MIN)
}

/// Combine a response date and ms-of-day into an Eastern timestamp.
pub(crate) fn parse_timestamp(date: &str, millis: i64) -> Result<DateTime<Tz>, ThetaError> {
    let naive = parse_date(date)?.and_time(parse_time_of_day(millis));
    at_market_time(naive)
        .ok_or_else(|| ThetaError::parse(format!("nonexistent local time: {naive}")))
}

fn i64_field(row: &Row, column: &str) -> Result<i64, ThetaError> {
    let raw = row.get(column)?;
    raw.parse::<i64>()
        .map_err(|_| ThetaError::parse(format!("invalid integer in {column:?}: {raw:?}")))
}

fn u32_field(row: &Row, column: &str) -> Result<u32, ThetaError> {
    let raw = row.get(column)?;
    raw.parse::<u32>()
        .map_err(|_| ThetaError::parse(format!("invalid integer in {column:?}: {raw:?}")))
}

fn u64_field(row: &Row, column: &str) -> Result<u64, ThetaError> {
    let raw = row.get(column)?;
    raw.parse::<u64>()
        .map_err(|_| ThetaError::parse(format!("invalid integer in {column:?}: {raw:?}")))
}

fn decimal_field(row: &Row, column: &str) -> Result<Decimal, ThetaError> {
    let raw = row.get(column)?;
    raw.parse::<Decimal>()
        .map_err(|_| ThetaError::parse(format!("invalid decimal in {column:?}: {raw:?}")))
}

fn exchange_field(row: &Row, column: &str) -> Result<Exchange, ThetaError> {
    let code = u32_field(row, column)?;
    u16::try_from(code)
        .ok()
        .and_then(Exchange::try_from_code)
        .ok_or_else(|| ThetaError::parse(format!("unknown exchange code in {column:?}: {code}")))
}

fn quote_condition_field(row: &Row, column: &str) -> Result<QuoteCondition, ThetaError> {
    let code = u32_field(row, column)?;
    let code = u16::try_from(code)
        .map_err(|_| ThetaError::parse(format!("quote condition out of range: {code}")))?;
    Ok(QuoteCondition::from_code(code))
}

fn row_timestamp(row: &Row) -> Result<DateTime<Tz>, ThetaError> {
    parse_timestamp(row.get("date")?, i64_field(row, "ms_of_day")?)
}

/// A strike in the wire's integral 1/10-cent units, e.g. `123456` → 123.456.
pub(crate) fn parse_wire_strike(value: &str) -> Result<Decimal, ThetaError> {
    let units = value
        .parse::<Decimal>()
        .map_err(|_| ThetaError::parse(format!("invalid strike: {value:?}")))?;
    Ok(units / Decimal::from(1000))
}

/// Contract columns some bulk responses interleave with the data columns.
fn contract_columns(row: &Row) -> Result<(Option<Decimal>, Option<OptionRight>), ThetaError> {
    let strike = row.try_get("strike").map(parse_wire_strike).transpose()?;
    let right = match row.try_get("right") {
        None => None,
        Some(raw) => Some(
            OptionRight::from_wire(raw)
                .ok_or_else(|| ThetaError::parse(format!("invalid right: {raw:?}")))?,
        ),
    };
    Ok((strike, right))
}

/// Typed quote columns of one row.
#[derive(Debug)]
pub(crate) struct QuoteFields {
    pub time: DateTime<Tz>,
    pub bid: Decimal,
    pub bid_size: u32,
    pub bid_exchange: Exchange,
    pub bid_condition: QuoteCondition,
    pub ask: Decimal,
    pub ask_size: u32,
    pub ask_exchange: Exchange,
    pub ask_condition: QuoteCondition,
    pub strike: Option<Decimal>,
    pub right: Option<OptionRight>,
}

pub(crate) fn quote_fields(row: &Row) -> Result<QuoteFields, ThetaError> {
    let (strike, right) = contract_columns(row)?;
    Ok(QuoteFields {
        time: row_timestamp(row)?,
        bid: decimal_field(row, "bid")?,
        bid_size: u32_field(row, "bid_size")?,
        bid_exchange: exchange_field(row, "bid_exchange")?,
        bid_condition: quote_condition_field(row, "bid_condition")?,
        ask: decimal_field(row, "ask")?,
        ask_size: u32_field(row, "ask_size")?,
        ask_exchange: exchange_field(row, "ask_exchange")?,
        ask_condition: quote_condition_field(row, "ask_condition")?,
        strike,
        right,
    })
}

/// Typed trade columns of one row.
#[derive(Debug)]
pub(crate) struct TradeFields {
    pub time: DateTime<Tz>,
    pub exchange: Exchange,
    pub conditions: Vec<TradeCondition>,
    pub price: Decimal,
    pub sequence: u64,
    pub size: u32,
    pub records_back: u32,
    pub strike: Option<Decimal>,
    pub right: Option<OptionRight>,
}

pub(crate) fn trade_fields(row: &Row) -> Result<TradeFields, ThetaError> {
    let (strike, right) = contract_columns(row)?;

    let mut conditions = Vec::new();
    for column in [
        "condition",
        "ext_condition1",
        "ext_condition2",
        "ext_condition3",
        "ext_condition4",
    ] {
        let code = u32_field(row, column)?;
        let code = u16::try_from(code)
            .map_err(|_| ThetaError::parse(format!("trade condition out of range: {code}")))?;
        if code == CONDITION_ABSENT {
            continue;
        }
        conditions.push(TradeCondition::from_code(code).ok_or_else(|| {
            ThetaError::parse(format!("unknown trade condition in {column:?}: {code}"))
        })?);
    }

    Ok(TradeFields {
        time: row_timestamp(row)?,
        exchange: exchange_field(row, "exchange")?,
        conditions,
        price: decimal_field(row, "price")?,
        sequence: u64_field(row, "sequence")?,
        size: u32_field(row, "size")?,
        records_back: u32_field(row, "records_back")?,
        strike,
        right,
    })
}

/// Typed end-of-day columns of one row.
#[derive(Debug)]
pub(crate) struct EodFields {
    pub time: DateTime<Tz>,
    pub last_trade: DateTime<Tz>,
    pub bid: Decimal,
    pub bid_size: u32,
    pub bid_exchange: Exchange,
    pub bid_condition: QuoteCondition,
    pub ask: Decimal,
    pub ask_size: u32,
    pub ask_exchange: Exchange,
    pub ask_condition: QuoteCondition,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: u64,
    pub count: u64,
}

pub(crate) fn eod_fields(row: &Row) -> Result<EodFields, ThetaError> {
    let date = row.get("date")?;
    Ok(EodFields {
        time: parse_timestamp(date, i64_field(row, "ms_of_day")?)?,
        // `ms_of_day2` carries the session's last trade time.
        last_trade: parse_timestamp(date, i64_field(row, "ms_of_day2")?)?,
        bid: decimal_field(row, "bid")?,
        bid_size: u32_field(row, "bid_size")?,
        bid_exchange: exchange_field(row, "bid_exchange")?,
        bid_condition: quote_condition_field(row, "bid_condition")?,
        ask: decimal_field(row, "ask")?,
        ask_size: u32_field(row, "ask_size")?,
        ask_exchange: exchange_field(row, "ask_exchange")?,
        ask_condition: quote_condition_field(row, "ask_condition")?,
        open: decimal_field(row, "open")?,
        high: decimal_field(row, "high")?,
        low: decimal_field(row, "low")?,
        close: decimal_field(row, "close")?,
        volume: u64_field(row, "volume")?,
        count: u64_field(row, "count")?,
    })
}

/// Typed index-price columns of one row.
pub(crate) fn index_price_fields(row: &Row) -> Result<(DateTime<Tz>, Decimal), ThetaError> {
    Ok((row_timestamp(row)?, decimal_field(row, "price")?))
}
