//! Stock endpoint family.

use thetadata_types::{
    Quote, Stock, StockEodReport, StockQuote, StockTrade, ThetaError, Trade,
};

use crate::client::{RawClient, RowParser};
use crate::request::{self, DateParam, DateTimeParam, Query, TimeParam};
use crate::response;
use crate::stream::RecordStream;

/// Windows for at-time requests.
const AT_TIME_SPLIT_DAYS: u32 = 30;
/// Consolidated-tape venue the at-time endpoints report from.
const VENUE: &str = "utp_cta";

/// Client for the `stock` endpoint family.
#[derive(Clone)]
pub struct StockClient {
    raw: RawClient,
}

fn quote_parser(stock: Stock) -> Box<RowParser<StockQuote>> {
    Box::new(move |row| {
        if response::is_filler_row(row) {
            return None;
        }
        Some(response::quote_fields(row).map(|fields| Quote {
            instrument: stock.clone(),
            time: fields.time,
            bid: fields.bid,
            bid_size: fields.bid_size,
            bid_exchange: fields.bid_exchange,
            bid_condition: fields.bid_condition,
            ask: fields.ask,
            ask_size: fields.ask_size,
            ask_exchange: fields.ask_exchange,
            ask_condition: fields.ask_condition,
        }))
    })
}

fn trade_parser(stock: Stock) -> Box<RowParser<StockTrade>> {
    Box::new(move |row| {
        Some(response::trade_fields(row).map(|fields| Trade {
            instrument: stock.clone(),
            time: fields.time,
            exchange: fields.exchange,
            conditions: fields.conditions,
            price: fields.price,
            sequence: fields.sequence,
            size: fields.size,
            records_back: fields.records_back,
        }))
    })
}

impl StockClient {
    pub(crate) const fn new(raw: RawClient) -> Self {
        Self { raw }
    }

    /// All listed stock root symbols.
    ///
    /// # Errors
    /// Any transport, HTTP, or payload failure.
    pub async fn symbols(&self) -> Result<Vec<String>, ThetaError> {
        self.raw
            .collect_rows(
                &["list", "roots", "stock"],
                vec![Query::new()],
                Box::new(|row| Some(row.get("root").map(str::to_string))),
            )
            .await
    }

    fn at_time_stream<T: Send + 'static>(
        &self,
        request_type: &str,
        symbol: &str,
        start_date: DateParam,
        end_date: DateParam,
        time: TimeParam,
        parse: Box<RowParser<T>>,
    ) -> Result<RecordStream<T>, ThetaError> {
        let start = request::resolve_date(start_date)?;
        let end = request::resolve_date(end_date)?;
        request::check_range(start, end)?;

        let query = vec![
            ("root".to_string(), symbol.to_string()),
            (
                "ivl".to_string(),
                request::format_time(time)?.to_string(),
            ),
            ("venue".to_string(), VENUE.to_string()),
            ("rth".to_string(), "false".to_string()),
        ];
        let windows = request::windowed_queries(&query, start, end, AT_TIME_SPLIT_DAYS);
        self.raw
            .stream_rows(&["at_time", "stock", request_type], windows, parse)
    }

    /// Quotes for a symbol at a fixed time of day over a range of days.
    ///
    /// Weekend/holiday filler rows are skipped.
    ///
    /// # Errors
    /// `InvalidParam` for malformed symbols/dates/times or a reversed range.
    pub fn quotes_at_time(
        &self,
        symbol: &str,
        start_date: impl Into<DateParam>,
        end_date: impl Into<DateParam>,
        time: impl Into<TimeParam>,
    ) -> Result<RecordStream<StockQuote>, ThetaError> {
        let stock = Stock::new(symbol)?;
        self.at_time_stream(
            "quote",
            symbol,
            start_date.into(),
            end_date.into(),
            time.into(),
            quote_parser(stock),
        )
    }

    /// The quote for a symbol at one moment.
    ///
    /// # Errors
    /// `NoData` if the service has no quote for that moment, in addition to
    /// the usual failure classes.
    pub async fn quote_at_time(
        &self,
        symbol: &str,
        at: impl Into<DateTimeParam>,
    ) -> Result<StockQuote, ThetaError> {
        let stock = Stock::new(symbol)?;
        let (date, millis) = request::format_date_time(at.into())?;
        let mut stream = self.at_time_stream(
            "quote",
            symbol,
            DateParam::Text(date.clone()),
            DateParam::Text(date),
            TimeParam::Time(response::parse_time_of_day(millis)),
            quote_parser(stock.clone()),
        )?;
        stream
            .next()
            .await
            .ok_or_else(|| ThetaError::no_data(format!("quote for {stock}")))?
    }

    /// Trades for a symbol at a fixed time of day over a range of days.
    ///
    /// # Errors
    /// `InvalidParam` for malformed symbols/dates/times or a reversed range.
    pub fn trades_at_time(
        &self,
        symbol: &str,
        start_date: impl Into<DateParam>,
        end_date: impl Into<DateParam>,
        time: impl Into<TimeParam>,
    ) -> Result<RecordStream<StockTrade>, ThetaError> {
        let stock = Stock::new(symbol)?;
        self.at_time_stream(
            "trade",
            symbol,
            start_date.into(),
            end_date.into(),
            time.into(),
            trade_parser(stock),
        )
    }

    /// The last trade for a symbol at one moment.
    ///
    /// # Errors
    /// `NoData` if the service has no trade for that moment, in addition to
    /// the usual failure classes.
    pub async fn trade_at_time(
        &self,
        symbol: &str,
        at: impl Into<DateTimeParam>,
    ) -> Result<StockTrade, ThetaError> {
        let stock = Stock::new(symbol)?;
        let (date, millis) = request::format_date_time(at.into())?;
        let mut stream = self.at_time_stream(
            "trade",
            symbol,
            DateParam::Text(date.clone()),
            DateParam::Text(date),
            TimeParam::Time(response::parse_time_of_day(millis)),
            trade_parser(stock.clone()),
        )?;
        stream
            .next()
            .await
            .ok_or_else(|| ThetaError::no_data(format!("trade for {stock}")))?
    }

    /// End-of-day summary for a symbol and date.
    ///
    /// # Errors
    /// `NoData` if the service has no session for that date, in addition to
    /// the usual failure classes.
    pub async fn eod_report(
        &self,
        symbol: &str,
        date: impl Into<DateParam>,
    ) -> Result<StockEodReport, ThetaError> {
        let stock = Stock::new(symbol)?;
        let date = request::resolve_date(date.into())?;
        let query = vec![
            ("root".to_string(), symbol.to_string()),
            ("start_date".to_string(), request::date_string(date)),
            ("end_date".to_string(), request::date_string(date)),
        ];

        let instrument = stock.clone();
        let reports = self
            .raw
            .collect_rows(
                &["hist", "stock", "eod"],
                vec![query],
                Box::new(move |row| {
                    Some(response::eod_fields(row).map(|f| StockEodReport {
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
            .ok_or_else(|| ThetaError::no_data(format!("eod report for {stock}")))
    }
}
