//! Drive one asynchronous call through the `Loading` → terminal lifecycle.

use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::stream::FusedStream;
use futures_core::Stream;

use super::result::RemoteResult;

/// Run `producer` and observe it as a stream of [`RemoteResult`]s.
///
/// The stream yields `Loading(seed)` first, then `Success` or `Failure`
/// depending on how the producer settles, then ends. Nothing runs until the
/// stream is polled, and a producer error is yielded as data rather than
/// ending the stream abnormally.
pub fn run_observed<T, E, F, Fut>(seed: Option<T>, producer: F) -> Observed<T, E, F, Fut>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    Observed {
        stage: Stage::Idle { seed, producer },
        _error: PhantomData,
    }
}

/// Stream returned by [`run_observed`].
///
/// Dropping it before the terminal state drops the in-flight producer future,
/// so nothing is emitted afterwards.
pub struct Observed<T, E, F, Fut> {
    stage: Stage<T, F, Fut>,
    _error: PhantomData<fn() -> E>,
}

enum Stage<T, F, Fut> {
    /// Not polled yet.
    Idle { seed: Option<T>, producer: F },
    /// `Loading` emitted; producer not invoked yet.
    Started { producer: F },
    /// Producer future in flight.
    Running(Pin<Box<Fut>>),
    Done,
}

// The producer future is boxed, so no field is ever pinned in place.
impl<T, E, F, Fut> Unpin for Observed<T, E, F, Fut> {}

impl<T, E, F, Fut> Stream for Observed<T, E, F, Fut>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    type Item = RemoteResult<T, E>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        loop {
            match std::mem::replace(&mut self.stage, Stage::Done) {
                Stage::Idle { seed, producer } => {
                    tracing::debug!(has_seed = seed.is_some(), "observed call loading");
                    self.stage = Stage::Started { producer };
                    return Poll::Ready(Some(RemoteResult::Loading(seed)));
                }
                Stage::Started { producer } => {
                    self.stage = Stage::Running(Box::pin(producer()));
                }
                Stage::Running(mut fut) => match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(value)) => {
                        tracing::debug!(outcome = "success", "observed call settled");
                        return Poll::Ready(Some(RemoteResult::Success(value)));
                    }
                    Poll::Ready(Err(error)) => {
                        tracing::debug!(outcome = "failure", "observed call settled");
                        return Poll::Ready(Some(RemoteResult::Failure(error)));
                    }
                    Poll::Pending => {
                        self.stage = Stage::Running(fut);
                        return Poll::Pending;
                    }
                },
                Stage::Done => return Poll::Ready(None),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.stage {
            Stage::Idle { .. } => 2,
            Stage::Started { .. } | Stage::Running(_) => 1,
            Stage::Done => 0,
        };
        (remaining, Some(remaining))
    }
}

impl<T, E, F, Fut> FusedStream for Observed<T, E, F, Fut>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    fn is_terminated(&self) -> bool {
        matches!(self.stage, Stage::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::RemoteError;
    use futures_util::StreamExt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn emits_loading_then_success() {
        let states: Vec<_> = run_observed(None, || async { Ok::<_, RemoteError>(42) })
            .collect()
            .await;
        assert_eq!(
            states,
            vec![RemoteResult::Loading(None), RemoteResult::Success(42)]
        );
    }

    #[tokio::test]
    async fn emits_loading_then_failure() {
        let states: Vec<RemoteResult<i32>> =
            run_observed(Some(7), || async { Err(RemoteError::not_found()) })
                .collect()
                .await;
        assert_eq!(
            states,
            vec![
                RemoteResult::Loading(Some(7)),
                RemoteResult::Failure(RemoteError::not_found())
            ]
        );
    }

    #[tokio::test]
    async fn producer_waits_for_first_poll() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut stream = run_observed(None, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, RemoteError>("done") }
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(stream.next().await, Some(RemoteResult::Loading(None)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(stream.next().await, Some(RemoteResult::Success("done")));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn ends_after_terminal_state() {
        let mut stream = run_observed(None, || async { Ok::<_, RemoteError>(1) });
        assert_eq!(stream.size_hint(), (2, Some(2)));
        assert!(!stream.is_terminated());

        stream.next().await;
        stream.next().await;
        assert_eq!(stream.next().await, None);
        assert_eq!(stream.next().await, None);
        assert!(stream.is_terminated());
        assert_eq!(stream.size_hint(), (0, Some(0)));
    }

    #[tokio::test]
    async fn dropping_mid_flight_stops_emissions() {
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let mut stream = run_observed(None, move || async move {
            let _ = rx.await;
            Ok::<_, RemoteError>(1)
        });

        assert_eq!(stream.next().await, Some(RemoteResult::Loading(None)));
        let pending = tokio::time::timeout(std::time::Duration::from_millis(10), stream.next()).await;
        assert!(pending.is_err());

        drop(stream);
        // Receiver went away with the producer future.
        assert!(tx.send(()).is_err());
    }
}
