//! Shared request machinery behind the endpoint clients.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use url::Url;

use thetadata_types::ThetaError;

use crate::config::Config;
use crate::request::Query;
use crate::response::{Row, decode_rows};
use crate::stream::{PageTask, RecordStream};
use crate::transport::Transport;

/// Parse callback applied to each decoded row inside the paging task.
/// Returning `None` drops the row (filler filtering).
pub(crate) type RowParser<T> = dyn Fn(&Row) -> Option<Result<T, ThetaError>> + Send + Sync;

/// Low-level client shared by the option/stock/index endpoint families:
/// URL building, CSV negotiation, and pagination.
#[derive(Clone)]
pub(crate) struct RawClient {
    transport: Arc<dyn Transport>,
    base: Url,
    page_buffer: usize,
}

impl RawClient {
    pub(crate) fn new(transport: Arc<dyn Transport>, config: &Config) -> Result<Self, ThetaError> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| ThetaError::invalid_param(format!("invalid base url: {e}")))?;
        Ok(Self {
            transport,
            base,
            page_buffer: config.page_buffer.max(1),
        })
    }

    /// One request against the bare base URL; used to probe reachability.
    pub(crate) async fn probe(&self) -> Result<(), ThetaError> {
        self.transport.get(self.base.as_str(), &[]).await.map(drop)
    }

    fn endpoint_url(&self, segments: &[&str]) -> Result<String, ThetaError> {
        let path = format!("v2/{}", segments.join("/"));
        self.base
            .join(&path)
            .map(Into::into)
            .map_err(|e| ThetaError::invalid_param(format!("invalid endpoint path: {e}")))
    }

    /// Stream typed records for a sequence of request windows, following
    /// server-side `Next-Page` chains inside each window.
    pub(crate) fn stream_rows<T>(
        &self,
        segments: &[&str],
        windows: Vec<Query>,
        parse: Box<RowParser<T>>,
    ) -> Result<RecordStream<T>, ThetaError>
    where
        T: Send + 'static,
    {
        let url = self.endpoint_url(segments)?;
        let windows: Vec<Query> = windows.into_iter().map(with_csv).collect();

        let (tx, rx) = mpsc::channel(self.page_buffer);
        let (stop_tx, stop_rx) = oneshot::channel();
        let transport = Arc::clone(&self.transport);
        let handle = tokio::spawn(run_pages(transport, url, windows, tx, stop_rx, parse));

        Ok(RecordStream::new(rx, PageTask::new(handle, stop_tx)))
    }

    /// Collect a whole windowed request eagerly.
    pub(crate) async fn collect_rows<T>(
        &self,
        segments: &[&str],
        windows: Vec<Query>,
        parse: Box<RowParser<T>>,
    ) -> Result<Vec<T>, ThetaError>
    where
        T: Send + 'static,
    {
        self.stream_rows(segments, windows, parse)?
            .try_collect()
            .await
    }
}

/// Every request negotiates the CSV representation.
fn with_csv(mut query: Query) -> Query {
    if !query.iter().any(|(k, _)| k == "use_csv") {
        query.push(("use_csv".to_string(), "true".to_string()));
    }
    query
}

async fn run_pages<T>(
    transport: Arc<dyn Transport>,
    url: String,
    windows: Vec<Query>,
    tx: mpsc::Sender<Result<T, ThetaError>>,
    mut stop_rx: oneshot::Receiver<()>,
    parse: Box<RowParser<T>>,
) {
    for window in windows {
        // The first fetch of a window goes to the endpoint; subsequent
        // fetches follow the absolute Next-Page URL verbatim.
        let mut follow: Option<String> = None;
        loop {
            let fetch = async {
                match follow.take() {
                    Some(next) => transport.get(&next, &[]).await,
                    None => transport.get(&url, &window).await,
                }
            };
            let response = tokio::select! {
                _ = &mut stop_rx => return,
                result = fetch => match result {
                    Ok(response) => response,
                    Err(e) => {
                        tracing::warn!(url = %url, error = %e, "paged request failed");
                        let _ = tx.send(Err(e)).await;
                        return;
                    }
                },
            };

            if !(200..300).contains(&response.status) {
                let _ = tx
                    .send(Err(ThetaError::status(response.status, response.body)))
                    .await;
                return;
            }

            let rows = match decode_rows(&response.body) {
                Ok(rows) => rows,
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "undecodable page");
                    let _ = tx.send(Err(e)).await;
                    return;
                }
            };

            for row in &rows {
                if let Some(result) = parse(row) {
                    let failed = result.is_err();
                    if tx.send(result).await.is_err() {
                        // Receiver dropped; stop paging.
                        return;
                    }
                    if failed {
                        return;
                    }
                }
            }

            match response.next_page {
                Some(next) => follow = Some(next),
                None => break,
            }
        }
    }
}
