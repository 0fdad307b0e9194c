mod common;

use common::{QUOTE_HEADER, client_for, csv, spxw_put};
use httpmock::prelude::*;

#[tokio::test]
async fn follows_next_page_chains_in_order() {
    let server = MockServer::start_async().await;

    let page2 = server
        .mock_async(|when, then| {
            when.method(GET).path("/page/2");
            then.status(200).body("root\nZBRA\n");
        })
        .await;
    let page1 = server
        .mock_async(|when, then| {
            when.method(GET).path("/page/1");
            then.status(200)
                .header("Next-Page", server.url("/page/2"))
                .body("root\nSMCI\nAVGO\n");
        })
        .await;
    let first = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/list/roots/option")
                .query_param("use_csv", "true");
            then.status(200)
                .header("Next-Page", server.url("/page/1"))
                .body("root\nMSFT\nAAPL\nSPX\n");
        })
        .await;

    let client = client_for(&server);
    let symbols = client.option().symbols().await.unwrap();

    assert_eq!(symbols, ["MSFT", "AAPL", "SPX", "SMCI", "AVGO", "ZBRA"]);
    first.assert_async().await;
    page1.assert_async().await;
    page2.assert_async().await;
}

#[tokio::test]
async fn null_next_page_ends_the_chain() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/list/roots/stock");
            then.status(200)
                .header("Next-Page", "null")
                .body("root\nMSFT\n");
        })
        .await;

    let client = client_for(&server);
    let symbols = client.stock().symbols().await.unwrap();

    assert_eq!(symbols, ["MSFT"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn long_ranges_split_into_date_windows() {
    let server = MockServer::start_async().await;

    let windows = [
        ("20240101", "20240130"),
        ("20240131", "20240229"),
        ("20240301", "20240330"),
        ("20240331", "20240331"),
    ];
    let mut mocks = Vec::new();
    for (start, end) in windows {
        let row = format!("36000000,169,5,5.0000,50,30,5,5.2000,50,{start}");
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v2/at_time/option/quote")
                    .query_param("start_date", start)
                    .query_param("end_date", end)
                    .query_param("use_csv", "true");
                then.status(200).body(csv(QUOTE_HEADER, &[&row]));
            })
            .await;
        mocks.push(mock);
    }

    let client = client_for(&server);
    let quotes = client
        .option()
        .quotes_at_time(&spxw_put(), 20240101, 20240331, "10:00:00")
        .unwrap()
        .try_collect()
        .await
        .unwrap();

    // One record per window, in window order.
    let dates: Vec<String> = quotes
        .iter()
        .map(|q| q.time.format("%Y%m%d").to_string())
        .collect();
    assert_eq!(dates, ["20240101", "20240131", "20240301", "20240331"]);
    for mock in &mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn record_streams_are_futures_streams() {
    use futures::StreamExt;

    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/at_time/option/quote");
            then.status(200).body(csv(
                QUOTE_HEADER,
                &[
                    "36000000,1,1,325.3600,0,2,1,326.2800,0,20250218",
                    "36000000,1,1,326.0000,0,2,1,326.9000,0,20250219",
                ],
            ));
        })
        .await;

    let client = client_for(&server);
    let stream = client
        .option()
        .quotes_at_time(&spxw_put(), 20250218, 20250219, "10:00:00")
        .unwrap();

    let collected: Vec<_> = stream.collect().await;
    assert_eq!(collected.len(), 2);
    assert!(collected.iter().all(Result::is_ok));
}

#[tokio::test]
async fn empty_payload_yields_no_records() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/list/roots/option");
            then.status(200).body("");
        })
        .await;

    let client = client_for(&server);
    assert!(client.option().symbols().await.unwrap().is_empty());
}

#[tokio::test]
async fn header_only_payload_yields_no_records() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/list/roots/option");
            then.status(200).body("root\n");
        })
        .await;

    let client = client_for(&server);
    assert!(client.option().symbols().await.unwrap().is_empty());
}
