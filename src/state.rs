//! Observable snapshot container for view states.
//!
//! A [`StateStore`] holds exactly one immutable snapshot at a time. Writers
//! replace it wholesale; a subscriber sees the current snapshot on its first
//! poll and afterwards the latest one whenever it changed. Snapshots a slow
//! subscriber never polled are simply skipped, nothing is queued.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::{FutureExt, Stream, StreamExt};
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// Shared, replay-latest state container.
///
/// Clones share the same state. There is no versioning: concurrent writers
/// interleave and the last write wins.
pub struct StateStore<S> {
    tx: Arc<watch::Sender<Arc<S>>>,
}

impl<S> Clone for StateStore<S> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<S: Default + Send + Sync + 'static> Default for StateStore<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: Send + Sync + 'static> StateStore<S> {
    pub fn new(initial: S) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(initial));
        Self { tx: Arc::new(tx) }
    }

    /// The latest snapshot.
    pub fn snapshot(&self) -> Arc<S> {
        Arc::clone(&self.tx.borrow())
    }

    /// Replace the snapshot wholesale and notify subscribers.
    pub fn replace(&self, next: S) -> Arc<S> {
        let next = Arc::new(next);
        self.tx.send_replace(Arc::clone(&next));
        next
    }

    /// Derive the next snapshot from the current one and publish it.
    ///
    /// Read and write happen under the channel lock, so no other write can
    /// slip in between.
    pub fn update<F>(&self, reduce: F) -> Arc<S>
    where
        F: FnOnce(&S) -> S,
    {
        let mut published = None;
        self.tx.send_modify(|current| {
            let next = Arc::new(reduce(&**current));
            *current = Arc::clone(&next);
            published = Some(next);
        });
        published.unwrap_or_else(|| self.snapshot())
    }

    /// Subscribe to this store. The first poll yields the current snapshot.
    pub fn subscribe(&self) -> StateStream<S> {
        StateStream {
            inner: WatchStream::new(self.tx.subscribe()),
        }
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Stream of the latest snapshots from a [`StateStore`].
///
/// Ends once every handle to the store has been dropped.
pub struct StateStream<S> {
    inner: WatchStream<Arc<S>>,
}

impl<S: Send + Sync + 'static> StateStream<S> {
    /// Wait until there is a snapshot this stream has not yielded yet.
    pub async fn next(&mut self) -> Option<Arc<S>> {
        self.inner.next().await
    }

    /// Take the latest snapshot if it has not been yielded yet.
    pub fn try_next(&mut self) -> Option<Arc<S>> {
        self.inner.next().now_or_never().flatten()
    }
}

impl<S: Send + Sync + 'static> Stream for StateStream<S> {
    type Item = Arc<S>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.poll_next_unpin(cx)
    }
}
