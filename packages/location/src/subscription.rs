//! Cancellable streams of position updates.

use std::{
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use alerta_vecinal_geo_models::Coordinate;
use futures::{Stream, StreamExt as _};
use tokio::sync::watch;

type BoxedUpdates = Pin<Box<dyn Stream<Item = Coordinate> + Send>>;

/// A live feed of position updates.
///
/// The feed ends when the underlying source ends or when it is stopped.
/// A stopped subscription never yields again; start a new one with
/// [`LocationProvider::subscribe`](crate::LocationProvider::subscribe).
pub struct LocationSubscription {
    updates: BoxedUpdates,
    stop: Arc<watch::Sender<bool>>,
}

impl std::fmt::Debug for LocationSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationSubscription")
            .field("stopped", &self.is_stopped())
            .finish_non_exhaustive()
    }
}

impl LocationSubscription {
    /// Wraps a source of updates so it can be stopped.
    pub fn new<S>(source: S) -> Self
    where
        S: Stream<Item = Coordinate> + Send + 'static,
    {
        let (stop, mut stopped) = watch::channel(false);
        let updates = async_stream::stream! {
            let mut source = Box::pin(source);
            loop {
                let next = tokio::select! {
                    biased;
                    () = wait_for_stop(&mut stopped) => None,
                    next = source.next() => next,
                };
                match next {
                    Some(coordinate) => yield coordinate,
                    None => break,
                }
            }
            log::debug!("Location subscription ended");
        };

        Self {
            updates: Box::pin(updates),
            stop: Arc::new(stop),
        }
    }

    /// Stops delivery. Idempotent.
    pub fn stop(&self) {
        self.stop.send_replace(true);
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        *self.stop.borrow()
    }

    /// A handle that stops this subscription from elsewhere, e.g. when the
    /// screen that started it goes away while a task drains the feed.
    #[must_use]
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            stop: Arc::clone(&self.stop),
        }
    }
}

impl Stream for LocationSubscription {
    type Item = Coordinate;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.updates.as_mut().poll_next(cx)
    }
}

/// Stops a [`LocationSubscription`] it was taken from.
#[derive(Debug, Clone)]
pub struct StopHandle {
    stop: Arc<watch::Sender<bool>>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.stop.send_replace(true);
    }
}

async fn wait_for_stop(stopped: &mut watch::Receiver<bool>) {
    // The sender lives as long as the subscription, so an error here only
    // means the subscription is gone.
    let _ = stopped.wait_for(|stopped| *stopped).await;
}
