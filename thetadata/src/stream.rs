//! Lazy record streams backed by a background paging task.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use thetadata_types::ThetaError;

/// Handle to a background paging task.
///
/// Dropping the handle sends a best-effort stop signal and then aborts the
/// task if it has not finished, so an abandoned stream releases its
/// connection without touching other in-flight requests.
#[derive(Debug)]
pub(crate) struct PageTask {
    handle: Option<JoinHandle<()>>,
    stop: Option<oneshot::Sender<()>>,
}

impl PageTask {
    pub(crate) fn new(handle: JoinHandle<()>, stop: oneshot::Sender<()>) -> Self {
        Self {
            handle: Some(handle),
            stop: Some(stop),
        }
    }
}

impl Drop for PageTask {
    fn drop(&mut self) {
        if let Some(tx) = self.stop.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take()
            && !handle.is_finished()
        {
            handle.abort();
        }
    }
}

/// A lazy, finite sequence of typed records produced by paginated requests.
///
/// Records arrive in response order. The stream ends after the last page of
/// the last request window; a failure anywhere in the chain surfaces as one
/// `Err` item and then the stream ends. Dropping the stream cancels the
/// in-flight request.
#[derive(Debug)]
pub struct RecordStream<T> {
    rx: mpsc::Receiver<Result<T, ThetaError>>,
    _task: PageTask,
}

impl<T> RecordStream<T> {
    pub(crate) fn new(rx: mpsc::Receiver<Result<T, ThetaError>>, task: PageTask) -> Self {
        Self { rx, _task: task }
    }

    /// The next record, or `None` when the sequence is exhausted.
    pub async fn next(&mut self) -> Option<Result<T, ThetaError>> {
        self.rx.recv().await
    }

    /// Drain the stream into a vector, stopping at the first failure.
    ///
    /// # Errors
    /// The first error the stream produced, if any.
    pub async fn try_collect(mut self) -> Result<Vec<T>, ThetaError> {
        let mut records = Vec::new();
        while let Some(item) = self.next().await {
            records.push(item?);
        }
        Ok(records)
    }
}

impl<T> Stream for RecordStream<T> {
    type Item = Result<T, ThetaError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}
