//! Option endpoint family.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use thetadata_types::{
    Interval, OptionContract, OptionEodReport, OptionQuote, OptionRight, OptionTrade, Quote,
    ThetaError, Trade,
};

use crate::client::{RawClient, RowParser};
use crate::request::{self, DateParam, DateTimeParam, Query, TimeParam, history_split_days};
use crate::response;
use crate::stream::RecordStream;

/// Windows for single-contract at-time requests.
const AT_TIME_SPLIT_DAYS: u32 = 30;
/// Bulk at-time responses carry every contract of an expiration, so windows
/// stay small.
const BULK_AT_TIME_SPLIT_DAYS: u32 = 5;

/// Client for the `option` endpoint family.
#[derive(Clone)]
pub struct OptionClient {
    raw: RawClient,
}

/// Identifies the contract a response row belongs to. Bulk responses name
/// the strike/right per row; single-contract responses inherit them from the
/// request.
#[derive(Clone)]
struct ContractTemplate {
    symbol: String,
    expiration: NaiveDate,
    strike: Option<Decimal>,
    right: Option<OptionRight>,
}

impl ContractTemplate {
    fn single(contract: &OptionContract) -> Self {
        Self {
            symbol: contract.symbol.clone(),
            expiration: contract.expiration,
            strike: Some(contract.strike),
            right: Some(contract.right),
        }
    }

    fn bulk(symbol: &str, expiration: NaiveDate) -> Self {
        Self {
            symbol: symbol.to_string(),
            expiration,
            strike: None,
            right: None,
        }
    }

    /// Row-level contract columns take precedence over the request's.
    fn resolve(
        &self,
        strike: Option<Decimal>,
        right: Option<OptionRight>,
    ) -> Result<OptionContract, ThetaError> {
        let strike = strike
            .or(self.strike)
            .ok_or_else(|| ThetaError::parse("row missing strike column"))?;
        let right = right
            .or(self.right)
            .ok_or_else(|| ThetaError::parse("row missing right column"))?;
        Ok(OptionContract {
            symbol: self.symbol.clone(),
            expiration: self.expiration,
            strike,
            right,
        })
    }
}

fn quote_parser(template: ContractTemplate) -> Box<RowParser<OptionQuote>> {
    Box::new(move |row| {
        if response::is_filler_row(row) {
            return None;
        }
        Some((|| -> Result<OptionQuote, ThetaError> {
            let fields = response::quote_fields(row)?;
            let instrument = template.resolve(fields.strike, fields.right)?;
            Ok(Quote {
                instrument,
                time: fields.time,
                bid: fields.bid,
                bid_size: fields.bid_size,
                bid_exchange: fields.bid_exchange,
                bid_condition: fields.bid_condition,
                ask: fields.ask,
                ask_size: fields.ask_size,
                ask_exchange: fields.ask_exchange,
                ask_condition: fields.ask_condition,
            })
        })())
    })
}

fn trade_parser(template: ContractTemplate) -> Box<RowParser<OptionTrade>> {
    Box::new(move |row| {
        Some((|| -> Result<OptionTrade, ThetaError> {
            let fields = response::trade_fields(row)?;
            let instrument = template.resolve(fields.strike, fields.right)?;
            Ok(Trade {
                instrument,
                time: fields.time,
                exchange: fields.exchange,
                conditions: fields.conditions,
                price: fields.price,
                sequence: fields.sequence,
                size: fields.size,
                records_back: fields.records_back,
            })
        })())
    })
}

impl OptionClient {
    pub(crate) const fn new(raw: RawClient) -> Self {
        Self { raw }
    }

    /// All root symbols with listed options.
    ///
    /// # Errors
    /// Any transport, HTTP, or payload failure.
    pub async fn symbols(&self) -> Result<Vec<String>, ThetaError> {
        self.raw
            .collect_rows(
                &["list", "roots", "option"],
                vec![Query::new()],
                Box::new(|row| Some(row.get("root").map(str::to_string))),
            )
            .await
    }

    fn contract_query(contract: &OptionContract) -> Result<Query, ThetaError> {
        let mut query = Self::expiration_query(&contract.symbol, contract.expiration);
        query.push((
            "strike".to_string(),
            request::format_price(contract.strike)?.to_string(),
        ));
        query.push(("right".to_string(), contract.right.as_str().to_string()));
        Ok(query)
    }

    fn expiration_query(symbol: &str, expiration: NaiveDate) -> Query {
        vec![
            ("root".to_string(), symbol.to_string()),
            ("exp".to_string(), request::date_string(expiration)),
        ]
    }

    fn at_time_stream<T: Send + 'static>(
        &self,
        kind: &str,
        request_type: &str,
        mut query: Query,
        split_days: u32,
        start_date: DateParam,
        end_date: DateParam,
        time: TimeParam,
        parse: Box<RowParser<T>>,
    ) -> Result<RecordStream<T>, ThetaError> {
        let start = request::resolve_date(start_date)?;
        let end = request::resolve_date(end_date)?;
        request::check_range(start, end)?;

        query.push(("ivl".to_string(), request::format_time(time)?.to_string()));
        query.push(("rth".to_string(), "false".to_string()));

        let windows = request::windowed_queries(&query, start, end, split_days);
        self.raw
            .stream_rows(&[kind, "option", request_type], windows, parse)
    }

    /// Quotes for one contract at a fixed time of day over a range of days.
    ///
    /// Weekend/holiday filler rows are skipped.
    ///
    /// # Errors
    /// `InvalidParam` for malformed dates/times or a reversed range.
    pub fn quotes_at_time(
        &self,
        contract: &OptionContract,
        start_date: impl Into<DateParam>,
        end_date: impl Into<DateParam>,
        time: impl Into<TimeParam>,
    ) -> Result<RecordStream<OptionQuote>, ThetaError> {
        self.at_time_stream(
            "at_time",
            "quote",
            Self::contract_query(contract)?,
            AT_TIME_SPLIT_DAYS,
            start_date.into(),
            end_date.into(),
            time.into(),
            quote_parser(ContractTemplate::single(contract)),
        )
    }

    /// The quote for one contract at one moment.
    ///
    /// # Errors
    /// `NoData` if the service has no quote for that moment, in addition to
    /// the usual failure classes.
    pub async fn quote_at_time(
        &self,
        contract: &OptionContract,
        at: impl Into<DateTimeParam>,
    ) -> Result<OptionQuote, ThetaError> {
        let (date, millis) = request::format_date_time(at.into())?;
        let mut stream = self.at_time_stream(
            "at_time",
            "quote",
            Self::contract_query(contract)?,
            AT_TIME_SPLIT_DAYS,
            DateParam::Text(date.clone()),
            DateParam::Text(date),
            TimeParam::Time(response::parse_time_of_day(millis)),
            quote_parser(ContractTemplate::single(contract)),
        )?;
        stream
            .next()
            .await
            .ok_or_else(|| ThetaError::no_data(format!("quote for {contract}")))?
    }

    /// Quotes for every contract of an expiration at a fixed time of day.
    ///
    /// # Errors
    /// `InvalidParam` for malformed dates/times or a reversed range.
    pub fn all_quotes_at_time(
        &self,
        symbol: &str,
        expiration: impl Into<DateParam>,
        start_date: impl Into<DateParam>,
        end_date: impl Into<DateParam>,
        time: impl Into<TimeParam>,
    ) -> Result<RecordStream<OptionQuote>, ThetaError> {
        let expiration = request::resolve_date(expiration.into())?;
        self.at_time_stream(
            "bulk_at_time",
            "quote",
            Self::expiration_query(symbol, expiration),
            BULK_AT_TIME_SPLIT_DAYS,
            start_date.into(),
            end_date.into(),
            time.into(),
            quote_parser(ContractTemplate::bulk(symbol, expiration)),
        )
    }

    /// Trades for one contract at a fixed time of day over a range of days.
    ///
    /// # Errors
    /// `InvalidParam` for malformed dates/times or a reversed range.
    pub fn trades_at_time(
        &self,
        contract: &OptionContract,
        start_date: impl Into<DateParam>,
        end_date: impl Into<DateParam>,
        time: impl Into<TimeParam>,
    ) -> Result<RecordStream<OptionTrade>, ThetaError> {
        self.at_time_stream(
            "at_time",
            "trade",
            Self::contract_query(contract)?,
            AT_TIME_SPLIT_DAYS,
            start_date.into(),
            end_date.into(),
            time.into(),
            trade_parser(ContractTemplate::single(contract)),
        )
    }

    /// The last trade for one contract at one moment.
    ///
    /// # Errors
    /// `NoData` if the service has no trade for that moment, in addition to
    /// the usual failure classes.
    pub async fn trade_at_time(
        &self,
        contract: &OptionContract,
        at: impl Into<DateTimeParam>,
    ) -> Result<OptionTrade, ThetaError> {
        let (date, millis) = request::format_date_time(at.into())?;
        let mut stream = self.at_time_stream(
            "at_time",
            "trade",
            Self::contract_query(contract)?,
            AT_TIME_SPLIT_DAYS,
            DateParam::Text(date.clone()),
            DateParam::Text(date),
            TimeParam::Time(response::parse_time_of_day(millis)),
            trade_parser(ContractTemplate::single(contract)),
        )?;
        stream
            .next()
            .await
            .ok_or_else(|| ThetaError::no_data(format!("trade for {contract}")))?
    }

    /// Trades for every contract of an expiration at a fixed time of day.
    ///
    /// # Errors
    /// `InvalidParam` for malformed dates/times or a reversed range.
    pub fn all_trades_at_time(
        &self,
        symbol: &str,
        expiration: impl Into<DateParam>,
        start_date: impl Into<DateParam>,
        end_date: impl Into<DateParam>,
        time: impl Into<TimeParam>,
    ) -> Result<RecordStream<OptionTrade>, ThetaError> {
        let expiration = request::resolve_date(expiration.into())?;
        self.at_time_stream(
            "bulk_at_time",
            "trade",
            Self::expiration_query(symbol, expiration),
            BULK_AT_TIME_SPLIT_DAYS,
            start_date.into(),
            end_date.into(),
            time.into(),
            trade_parser(ContractTemplate::bulk(symbol, expiration)),
        )
    }

    /// End-of-day summary for one contract and date.
    ///
    /// # Errors
    /// `NoData` if the service has no session for that date, in addition to
    /// the usual failure classes.
    pub async fn eod_report(
        &self,
        contract: &OptionContract,
        date: impl Into<DateParam>,
    ) -> Result<OptionEodReport, ThetaError> {
        let date = request::resolve_date(date.into())?;
        let mut query = Self::contract_query(contract)?;
        query.push(("start_date".to_string(), request::date_string(date)));
        query.push(("end_date".to_string(), request::date_string(date)));

        let instrument = contract.clone();
        let reports = self
            .raw
            .collect_rows(
                &["hist", "option", "eod"],
                vec![query],
                Box::new(move |row| {
                    Some(response::eod_fields(row).map(|f| OptionEodReport {
                        instrument: instrument.clone(),
                        time: f.time,
                        last_trade: f.last_trade,
                        bid: f.bid,
                        bid_size: f.bid_size,
                        bid_exchange: f.bid_exchange,
                        bid_condition: f.bid_condition,
                        ask: f.ask,
                        ask_size: f.ask_size,
                        ask_exchange: f.ask_exchange,
                        ask_condition: f.ask_condition,
                        open: f.open,
                        high: f.high,
                        low: f.low,
                        close: f.close,
                        volume: f.volume,
                        count: f.count,
                    }))
                }),
            )
            .await?;
        reports
            .into_iter()
            .next()
            .ok_or_else(|| ThetaError::no_data(format!("eod report for {contract}")))
    }

    /// Every quote for one contract in a time range over a range of days.
    ///
    /// Tick-level requests page in 3-day windows, coarser intervals in
    /// 7-day windows.
    ///
    /// # Errors
    /// `InvalidParam` for malformed dates/times or a reversed range.
    pub fn historical_quotes(
        &self,
        contract: &OptionContract,
        start_date: impl Into<DateParam>,
        end_date: impl Into<DateParam>,
        start_time: impl Into<TimeParam>,
        end_time: impl Into<TimeParam>,
        interval: Interval,
    ) -> Result<RecordStream<OptionQuote>, ThetaError> {
        let start = request::resolve_date(start_date.into())?;
        let end = request::resolve_date(end_date.into())?;
        request::check_range(start, end)?;

        let mut query = Self::contract_query(contract)?;
        query.push((
            "start_time".to_string(),
            request::format_time(start_time.into())?.to_string(),
        ));
        query.push((
            "end_time".to_string(),
            request::format_time(end_time.into())?.to_string(),
        ));
        query.push(("ivl".to_string(), interval.millis().to_string()));
        query.push(("rth".to_string(), "false".to_string()));

        let windows =
            request::windowed_queries(&query, start, end, history_split_days(interval));
        self.raw.stream_rows(
            &["hist", "option", "quote"],
            windows,
            quote_parser(ContractTemplate::single(contract)),
        )
    }
}
