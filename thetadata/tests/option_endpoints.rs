mod common;

use chrono::NaiveDate;
use common::{QUOTE_HEADER, client_for, csv, spxw_put};
use httpmock::prelude::*;
use rust_decimal::Decimal;

use thetadata::types::{
    Exchange, OptionRight, QuoteCondition, TradeCondition, date_at_time,
};

fn decimal(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn eastern(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> chrono::DateTime<chrono_tz::Tz> {
    date_at_time(
        NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        chrono::NaiveTime::from_hms_opt(h, min, s).unwrap(),
    )
    .unwrap()
}

#[tokio::test]
async fn lists_option_roots() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/list/roots/option")
                .query_param("use_csv", "true");
            then.status(200).body("root\nMSFT\nAAPL\nSPX\n");
        })
        .await;

    let client = client_for(&server);
    assert_eq!(
        client.option().symbols().await.unwrap(),
        ["MSFT", "AAPL", "SPX"]
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn quote_at_time_sends_the_full_contract_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/at_time/option/quote")
                .query_param("root", "SPXW")
                .query_param("exp", "20240315")
                .query_param("strike", "6000000")
                .query_param("right", "P")
                .query_param("start_date", "20240301")
                .query_param("end_date", "20240301")
                .query_param("ivl", "36000000")
                .query_param("rth", "false")
                .query_param("use_csv", "true");
            then.status(200).body(csv(
                QUOTE_HEADER,
                &["36000000,1,1,325.3600,0,2,3,326.2800,1,20250219"],
            ));
        })
        .await;

    let client = client_for(&server);
    let at = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    let quote = client
        .option()
        .quote_at_time(&spxw_put(), at)
        .await
        .unwrap();

    mock.assert_async().await;

    assert_eq!(quote.instrument, spxw_put());
    assert_eq!(quote.bid, decimal("325.3600"));
    assert_eq!(quote.bid_size, 1);
    assert_eq!(quote.bid_exchange, Exchange::Nqex);
    assert_eq!(quote.bid_condition, QuoteCondition::Regular);
    assert_eq!(quote.ask, decimal("326.2800"));
    assert_eq!(quote.ask_size, 2);
    assert_eq!(quote.ask_exchange, Exchange::Nyse);
    assert_eq!(quote.ask_condition, QuoteCondition::BidAskAutoExec);
    assert_eq!(quote.time, eastern(2025, 2, 19, 10, 0, 0));
}

#[tokio::test]
async fn weekend_filler_rows_are_skipped() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/at_time/option/quote");
            then.status(200).body(csv(
                QUOTE_HEADER,
                &[
                    // The service pads weekend days with all-zero rows.
                    "0,0,0,0.0000,0,0,0,0.0000,0,0",
                    "36000000,1,1,325.3600,0,2,1,326.2800,0,20250219",
                ],
            ));
        })
        .await;

    let client = client_for(&server);
    let quotes = client
        .option()
        .quotes_at_time(&spxw_put(), 20240220, 20240229, "10:00:00")
        .unwrap()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].ask, decimal("326.2800"));
}

#[tokio::test]
async fn trade_rows_parse_conditions_and_contract_columns() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/at_time/option/trade");
            then.status(200).body(csv(
                "ms_of_day,sequence,ext_condition1,ext_condition2,ext_condition3,ext_condition4,condition,size,exchange,price,records_back,date,strike,right",
                &["35938270,1054514035,17,255,255,255,130,1,5,4.6500,7,20250218,123456,C"],
            ));
        })
        .await;

    let client = client_for(&server);
    let trades = client
        .option()
        .trades_at_time(&spxw_put(), 20250218, 20250218, "10:00:00")
        .unwrap()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(trades.len(), 1);
    let trade = &trades[0];

    assert_eq!(trade.price, decimal("4.6500"));
    assert_eq!(trade.sequence, 1_054_514_035);
    assert_eq!(trade.size, 1);
    assert_eq!(trade.records_back, 7);
    assert_eq!(trade.exchange, Exchange::Cboe);
    // Lead condition first; 255 sentinel columns dropped.
    assert_eq!(
        trade.conditions,
        vec![TradeCondition::MultiLegAutoElecTrade, TradeCondition::Posit]
    );
    assert_eq!(trade.condition(), Some(TradeCondition::MultiLegAutoElecTrade));
    let expected_time = date_at_time(
        NaiveDate::from_ymd_opt(2025, 2, 18).unwrap(),
        chrono::NaiveTime::from_hms_milli_opt(9, 58, 58, 270).unwrap(),
    )
    .unwrap();
    assert_eq!(trade.time, expected_time);
    // Row-level contract columns override the request's.
    assert_eq!(trade.instrument.strike, decimal("123.456"));
    assert_eq!(trade.instrument.right, OptionRight::Call);
    assert_eq!(trade.instrument.symbol, "SPXW");
}

#[tokio::test]
async fn bulk_quotes_resolve_contracts_per_row() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/bulk_at_time/option/quote")
                .query_param("root", "SPXW")
                .query_param("exp", "20240315");
            then.status(200).body(csv(
                "ms_of_day,bid_size,bid_exchange,bid,bid_condition,ask_size,ask_exchange,ask,ask_condition,date,strike,right",
                &[
                    "36000000,1,1,325.3600,0,2,1,326.2800,0,20240301,6000000,P",
                    "36000000,4,1,12.1000,0,9,1,12.3000,0,20240301,6100000,C",
                ],
            ));
        })
        .await;

    let client = client_for(&server);
    let quotes = client
        .option()
        .all_quotes_at_time("SPXW", 20240315, 20240301, 20240301, "10:00:00")
        .unwrap()
        .try_collect()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0].instrument.strike, decimal("6000"));
    assert_eq!(quotes[0].instrument.right, OptionRight::Put);
    assert_eq!(quotes[1].instrument.strike, decimal("6100"));
    assert_eq!(quotes[1].instrument.right, OptionRight::Call);
    assert_eq!(
        quotes[1].instrument.expiration,
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    );
}

#[tokio::test]
async fn eod_report_parses_the_summary_row() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/hist/option/eod")
                .query_param("root", "SPXW")
                .query_param("start_date", "20250217")
                .query_param("end_date", "20250217");
            then.status(200).body(csv(
                "ms_of_day,ms_of_day2,bid_size,bid_exchange,bid,bid_condition,ask_size,ask_exchange,ask,ask_condition,date,open,high,low,close,volume,count",
                &["36000000,36061000,169,5,5.0000,50,30,5,5.2000,50,20250217,13.37,1337.13,9.15,100.12,1337,10"],
            ));
        })
        .await;

    let client = client_for(&server);
    let report = client
        .option()
        .eod_report(&spxw_put(), 20250217)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(report.instrument, spxw_put());
    assert_eq!(report.time, eastern(2025, 2, 17, 10, 0, 0));
    assert_eq!(report.last_trade, eastern(2025, 2, 17, 10, 1, 1));
    assert_eq!(report.bid, decimal("5.0000"));
    assert_eq!(report.bid_condition, QuoteCondition::NationalBbo);
    assert_eq!(report.open, decimal("13.37"));
    assert_eq!(report.high, decimal("1337.13"));
    assert_eq!(report.low, decimal("9.15"));
    assert_eq!(report.close, decimal("100.12"));
    assert_eq!(report.volume, 1337);
    assert_eq!(report.count, 10);
}

#[tokio::test]
async fn historical_quotes_send_time_range_and_interval() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/hist/option/quote")
                .query_param("start_time", "34200000")
                .query_param("end_time", "57600000")
                .query_param("ivl", "60000")
                .query_param("rth", "false");
            then.status(200).body(csv(
                QUOTE_HEADER,
                &["36000000,1,1,325.3600,0,2,1,326.2800,0,20250219"],
            ));
        })
        .await;

    let client = client_for(&server);
    let quotes = client
        .option()
        .historical_quotes(
            &spxw_put(),
            20250219,
            20250219,
            "09:30:00",
            "16:00:00",
            thetadata::types::Interval::Minute,
        )
        .unwrap()
        .try_collect()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(quotes.len(), 1);
}

#[tokio::test]
async fn midnight_overflow_timestamps_clamp() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/at_time/option/quote");
            then.status(200).body(csv(
                QUOTE_HEADER,
                &["86400000,1,1,325.3600,0,2,1,326.2800,0,20250219"],
            ));
        })
        .await;

    let client = client_for(&server);
    let quotes = client
        .option()
        .quotes_at_time(&spxw_put(), 20250219, 20250219, "10:00:00")
        .unwrap()
        .try_collect()
        .await
        .unwrap();

    let expected = date_at_time(
        NaiveDate::from_ymd_opt(2025, 2, 19).unwrap(),
        chrono::NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap(),
    )
    .unwrap();
    assert_eq!(quotes[0].time, expected);
}
