//! Cooperative cancellation handed to every repository call.
//!
//! Built on a `watch` channel: the [`CancellationSource`] flips the flag,
//! any number of cloned [`Cancellation`] handles observe it.

use std::future::Future;
use tokio::sync::watch;

use crate::error::{StorageError, StorageResult};

/// Owning side of a cancellation signal
#[derive(Debug)]
pub struct CancellationSource {
    tx: watch::Sender<bool>,
}

impl CancellationSource {
    /// Create a source together with the handle to pass downstream
    pub fn new() -> (Self, Cancellation) {
        let (tx, rx) = watch::channel(false);
        (Self { tx }, Cancellation { rx: Some(rx) })
    }

    /// Another handle observing this source
    pub fn token(&self) -> Cancellation {
        Cancellation {
            rx: Some(self.tx.subscribe()),
        }
    }

    pub fn cancel(&self) {
        // send_replace succeeds even when every receiver is gone.
        self.tx.send_replace(true);
    }
}

/// Observing side of a cancellation signal
#[derive(Debug, Clone, Default)]
pub struct Cancellation {
    rx: Option<watch::Receiver<bool>>,
}

impl Cancellation {
    /// A handle that never fires
    pub fn none() -> Self {
        Self { rx: None }
    }

    pub fn is_cancelled(&self) -> bool {
        self.rx.as_ref().is_some_and(|rx| *rx.borrow())
    }

    /// Resolves once cancellation is requested; pends forever otherwise
    pub async fn cancelled(&self) {
        let Some(rx) = &self.rx else {
            return std::future::pending().await;
        };

        let mut rx = rx.clone();
        if rx.wait_for(|cancelled| *cancelled).await.is_err() {
            // Source dropped without cancelling.
            std::future::pending::<()>().await;
        }
    }

    /// Drive `work` unless cancellation wins the race.
    ///
    /// Already-cancelled handles fail fast without polling `work`.
    pub async fn run<T, F>(&self, work: F) -> StorageResult<T>
    where
        F: Future<Output = StorageResult<T>>,
    {
        if self.is_cancelled() {
            return Err(StorageError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = self.cancelled() => Err(StorageError::Cancelled),
            result = work => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_none_never_cancels() {
        let cancel = Cancellation::none();
        assert!(!cancel.is_cancelled());

        let result = cancel.run(async { Ok(5) }).await;
        assert_eq!(result, Ok(5));
    }

    #[tokio::test]
    async fn test_cancelled_before_start_fails_fast() {
        let (source, cancel) = CancellationSource::new();
        source.cancel();

        assert!(cancel.is_cancelled());
        let result = cancel
            .run(std::future::pending::<StorageResult<()>>())
            .await;
        assert_eq!(result, Err(StorageError::Cancelled));
    }

    #[tokio::test]
    async fn test_cancel_interrupts_pending_work() {
        let (source, cancel) = CancellationSource::new();

        let task = tokio::spawn(async move {
            cancel
                .run(async {
                    tokio::time::sleep(Duration::from_secs(60)).await;
                    Ok(())
                })
                .await
        });

        tokio::time::sleep(Duration::from_millis(10)).await;
        source.cancel();

        assert_eq!(task.await.unwrap(), Err(StorageError::Cancelled));
    }

    #[tokio::test]
    async fn test_tokens_share_the_source() {
        let (source, first) = CancellationSource::new();
        let second = source.token();
        let cloned = first.clone();

        source.cancel();

        assert!(first.is_cancelled());
        assert!(second.is_cancelled());
        assert!(cloned.is_cancelled());
    }

    #[tokio::test]
    async fn test_dropped_source_does_not_cancel() {
        let (source, cancel) = CancellationSource::new();
        drop(source);

        assert!(!cancel.is_cancelled());
        assert_eq!(cancel.run(async { Ok(1) }).await, Ok(1));
    }
}
