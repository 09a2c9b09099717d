//! Collapses bursts of input into one delayed call.

use std::future::Future;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;

pub const SEARCH_DELAY: Duration = Duration::from_millis(300);

const WAITING: u8 = 0;
const FIRED: u8 = 1;
const CANCELLED: u8 = 2;

struct Pending {
    handle: JoinHandle<()>,
    state: Arc<AtomicU8>,
}

/// Single-slot timer: scheduling replaces whatever was waiting.
///
/// Cancellation only reaches a timer that has not fired. Once the delay
/// elapses the scheduled work runs to completion even if superseded.
pub struct Debouncer {
    delay: Duration,
    pending: Option<Pending>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    pub fn schedule<F>(&mut self, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        let state = Arc::new(AtomicU8::new(WAITING));
        let task_state = state.clone();
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            if task_state
                .compare_exchange(WAITING, FIRED, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                work.await;
            }
        });
        self.pending = Some(Pending { handle, state });
    }

    /// Drops the waiting timer, if any. Returns whether one was cancelled.
    pub fn cancel(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        let cancelled = pending
            .state
            .compare_exchange(WAITING, CANCELLED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if cancelled {
            pending.handle.abort();
        }
        cancelled
    }

    pub fn is_waiting(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|p| p.state.load(Ordering::Acquire) == WAITING)
    }

    /// Waits for the last scheduled timer and, if it fired, its work.
    pub async fn settle(&mut self) {
        if let Some(pending) = self.pending.take() {
            let _ = pending.handle.await;
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    type Work = std::pin::Pin<Box<dyn Future<Output = ()> + Send>>;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) -> Work) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let make = move |q: &str| -> Work {
            let sink = sink.clone();
            let q = q.to_string();
            Box::pin(async move { sink.lock().push(q) })
        };
        (calls, make)
    }

    #[tokio::test(start_paused = true)]
    async fn burst_collapses_to_last_value() {
        let (calls, make) = recorder();
        let mut debouncer = Debouncer::new(SEARCH_DELAY);

        for q in ["b", "be", "bea", "beat"] {
            debouncer.schedule(make(q));
            tokio::time::advance(Duration::from_millis(100)).await;
        }
        assert!(calls.lock().is_empty());

        tokio::time::advance(SEARCH_DELAY).await;
        debouncer.settle().await;
        assert_eq!(*calls.lock(), vec!["beat".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_before_firing_drops_work() {
        let (calls, make) = recorder();
        let mut debouncer = Debouncer::new(SEARCH_DELAY);
        debouncer.schedule(make("drums"));
        assert!(debouncer.is_waiting());
        assert!(debouncer.cancel());
        assert!(!debouncer.is_waiting());

        tokio::time::advance(SEARCH_DELAY * 2).await;
        tokio::task::yield_now().await;
        assert!(calls.lock().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn separate_pauses_fire_separately() {
        let (calls, make) = recorder();
        let mut debouncer = Debouncer::new(SEARCH_DELAY);
        debouncer.schedule(make("a"));
        tokio::time::advance(SEARCH_DELAY + Duration::from_millis(1)).await;
        debouncer.settle().await;
        debouncer.schedule(make("b"));
        tokio::time::advance(SEARCH_DELAY + Duration::from_millis(1)).await;
        debouncer.settle().await;
        assert_eq!(*calls.lock(), vec!["a".to_string(), "b".to_string()]);
    }
}
