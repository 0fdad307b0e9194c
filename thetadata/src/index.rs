//! Index endpoint family.

use thetadata_types::{Index, IndexPrice, Interval, ThetaError, TradingHours};

use crate::client::RawClient;
use crate::request::{self, DateParam, history_split_days};
use crate::response;
use crate::stream::RecordStream;

/// Client for the `index` endpoint family.
#[derive(Clone)]
pub struct IndexClient {
    raw: RawClient,
}

impl IndexClient {
    pub(crate) const fn new(raw: RawClient) -> Self {
        Self { raw }
    }

    /// Sampled index levels over a range of days.
    ///
    /// Indexes that are not quoted off-hours report zero levels outside the
    /// session; those rows are skipped.
    ///
    /// # Errors
    /// `InvalidParam` for malformed symbols/dates or a reversed range.
    pub fn historical_prices(
        &self,
        symbol: &str,
        start_date: impl Into<DateParam>,
        end_date: impl Into<DateParam>,
        interval: Interval,
        hours: TradingHours,
    ) -> Result<RecordStream<IndexPrice>, ThetaError> {
        let index = Index::new(symbol)?;
        let start = request::resolve_date(start_date.into())?;
        let end = request::resolve_date(end_date.into())?;
        request::check_range(start, end)?;

        let query = vec![
            ("root".to_string(), symbol.to_string()),
            ("ivl".to_string(), interval.millis().to_string()),
            ("rth".to_string(), hours.rth_value().to_string()),
        ];
        let windows =
            request::windowed_queries(&query, start, end, history_split_days(interval));

        self.raw.stream_rows(
            &["hist", "index", "price"],
            windows,
            Box::new(move |row| {
                match response::index_price_fields(row) {
                    Ok((_, price)) if price.is_zero() => None,
                    Ok((time, price)) => Some(Ok(IndexPrice {
                        instrument: index.clone(),
                        time,
                        price,
                    })),
                    Err(e) => Some(Err(e)),
                }
            }),
        )
    }
}
