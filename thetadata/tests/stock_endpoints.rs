mod common;

use chrono::NaiveDate;
use common::{QUOTE_HEADER, client_for, csv};
use httpmock::prelude::*;
use rust_decimal::Decimal;

use thetadata::types::{Exchange, QuoteCondition, TradeCondition, date_at_time};

fn decimal(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[tokio::test]
async fn lists_stock_roots() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/list/roots/stock")
                .query_param("use_csv", "true");
            then.status(200).body("root\nMSFT\nAAPL\nZBRA\n");
        })
        .await;

    let client = client_for(&server);
    assert_eq!(
        client.stock().symbols().await.unwrap(),
        ["MSFT", "AAPL", "ZBRA"]
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn quotes_at_time_use_the_consolidated_venue() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/at_time/stock/quote")
                .query_param("root", "ZBRA")
                .query_param("venue", "utp_cta")
                .query_param("ivl", "36000000")
                .query_param("rth", "false")
                .query_param("start_date", "20250217")
                .query_param("end_date", "20250221")
                .query_param("use_csv", "true");
            then.status(200).body(csv(
                QUOTE_HEADER,
                &[
                    "0,0,0,0.0000,0,0,0,0.0000,0,0",
                    "36000000,3,3,287.0100,0,5,3,287.5500,0,20250218",
                ],
            ));
        })
        .await;

    let client = client_for(&server);
    let quotes = client
        .stock()
        .quotes_at_time("ZBRA", 20250217, 20250221, "10:00:00")
        .unwrap()
        .try_collect()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].instrument.symbol, "ZBRA");
    assert_eq!(quotes[0].bid, decimal("287.0100"));
    assert_eq!(quotes[0].bid_exchange, Exchange::Nyse);
    assert_eq!(quotes[0].ask_condition, QuoteCondition::Regular);
}

#[tokio::test]
async fn trade_at_time_returns_the_first_print() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/at_time/stock/trade")
                .query_param("start_date", "20250220")
                .query_param("end_date", "20250220")
                .query_param("ivl", "37800000");
            then.status(200).body(csv(
                "ms_of_day,sequence,ext_condition1,ext_condition2,ext_condition3,ext_condition4,condition,size,exchange,price,records_back,date",
                &["37799100,991,255,255,255,255,0,100,68,287.3300,0,20250220"],
            ));
        })
        .await;

    let client = client_for(&server);
    let at = NaiveDate::from_ymd_opt(2025, 2, 20)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap();
    let trade = client.stock().trade_at_time("ZBRA", at).await.unwrap();

    assert_eq!(trade.instrument.symbol, "ZBRA");
    assert_eq!(trade.price, decimal("287.33"));
    assert_eq!(trade.size, 100);
    assert_eq!(trade.exchange, Exchange::Iex);
    assert_eq!(trade.conditions, vec![TradeCondition::Regular]);
}

#[tokio::test]
async fn eod_report_parses_the_summary_row() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/hist/stock/eod")
                .query_param("root", "ZBRA")
                .query_param("start_date", "20250217")
                .query_param("end_date", "20250217");
            then.status(200).body(csv(
                "ms_of_day,ms_of_day2,bid_size,bid_exchange,bid,bid_condition,ask_size,ask_exchange,ask,ask_condition,date,open,high,low,close,volume,count",
                &["36000000,36061000,169,5,286.9900,50,30,5,287.0500,50,20250217,285.00,291.20,284.10,287.02,104227,812"],
            ));
        })
        .await;

    let client = client_for(&server);
    let report = client.stock().eod_report("ZBRA", 20250217).await.unwrap();

    mock.assert_async().await;
    assert_eq!(report.instrument.symbol, "ZBRA");
    assert_eq!(
        report.last_trade,
        date_at_time(
            NaiveDate::from_ymd_opt(2025, 2, 17).unwrap(),
            chrono::NaiveTime::from_hms_opt(10, 1, 1).unwrap(),
        )
        .unwrap()
    );
    assert_eq!(report.close, decimal("287.02"));
    assert_eq!(report.volume, 104_227);
    assert_eq!(report.count, 812);
}
