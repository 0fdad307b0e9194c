use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use thetadata::types::ThetaError;
use thetadata::{Config, RawResponse, ThetaClient, Transport};

const QUOTE_PAGE: &str = "ms_of_day,bid_size,bid_exchange,bid,bid_condition,ask_size,ask_exchange,ask,ask_condition,date\n\
36000000,1,1,325.3600,0,2,1,326.2800,0,20250219\n";

/// A terminal that never runs out of pages.
struct EndlessPages {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl Transport for EndlessPages {
    async fn get(&self, url: &str, _query: &[(String, String)]) -> Result<RawResponse, ThetaError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(RawResponse {
            status: 200,
            next_page: Some(format!("{url}#page{n}")),
            body: QUOTE_PAGE.to_string(),
        })
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn dropping_a_stream_cancels_its_paging_task() {
    let calls = Arc::new(AtomicUsize::new(0));
    let transport = Arc::new(EndlessPages {
        calls: Arc::clone(&calls),
    });
    let config = Config::default().with_page_buffer(1);
    let client = ThetaClient::with_transport(transport, &config).unwrap();

    let mut stream = client
        .stock()
        .quotes_at_time("ZBRA", 20250219, 20250219, "10:00:00")
        .unwrap();

    // The stream is live and producing.
    assert!(stream.next().await.unwrap().is_ok());
    assert!(stream.next().await.unwrap().is_ok());

    drop(stream);

    // Once the drop signal lands, the paging task must stop issuing requests.
    tokio::time::sleep(Duration::from_millis(100)).await;
    let settled = calls.load(Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(calls.load(Ordering::SeqCst), settled);
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_streams_do_not_disturb_each_other() {
    let calls = Arc::new(AtomicUsize::new(0));
    let transport = Arc::new(EndlessPages {
        calls: Arc::clone(&calls),
    });
    let config = Config::default().with_page_buffer(1);
    let client = ThetaClient::with_transport(transport, &config).unwrap();

    let mut a = client
        .stock()
        .quotes_at_time("ZBRA", 20250219, 20250219, "10:00:00")
        .unwrap();
    let mut b = client
        .stock()
        .quotes_at_time("AAPL", 20250219, 20250219, "10:00:00")
        .unwrap();

    assert!(a.next().await.unwrap().is_ok());
    assert!(b.next().await.unwrap().is_ok());

    // Cancelling one stream leaves the other producing.
    drop(a);
    for _ in 0..5 {
        assert!(b.next().await.unwrap().is_ok());
    }
}
