//! Scoped subscriptions.
//!
//! A view acquires its timers and listeners when it is created and releases
//! them when it is torn down:
//!
//! - [`Ticker`] runs a periodic tokio task and hands back a [`TickerGuard`]
//!   that aborts the task on drop.
//! - [`Subscriptions`] is a dispose-callback registry. Callbacks run once,
//!   newest first, on [`Subscriptions::dispose`] or on drop.
//!
//! ```ignore
//! let mut subs = Subscriptions::new();
//! let (guard, mut ticks) = Ticker::spawn(Duration::from_secs(5));
//! subs.hold(guard);
//! subs.add(|| remove_scroll_listener());
//! // ... view lives ...
//! drop(subs); // ticker aborted, listener removed
//! ```

use std::fmt;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Periodic tick source backed by a tokio task.
pub struct Ticker;

impl Ticker {
    /// Start ticking every `period`. The first tick arrives one full period
    /// after this call; tick numbers start at 1.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(period: Duration) -> (TickerGuard, mpsc::UnboundedReceiver<u64>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut count: u64 = 0;
            loop {
                interval.tick().await;
                count += 1;
                if tx.send(count).is_err() {
                    tracing::debug!("ticker receiver dropped, stopping");
                    break;
                }
            }
        });
        tracing::debug!(period_ms = period.as_millis() as u64, "ticker started");
        (TickerGuard { handle }, rx)
    }
}

/// Aborts the ticker task when dropped.
#[derive(Debug)]
pub struct TickerGuard {
    handle: JoinHandle<()>,
}

impl Drop for TickerGuard {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!("ticker stopped");
    }
}

type Disposer = Box<dyn FnOnce()>;

/// Registry of teardown callbacks owned by a view.
#[derive(Default)]
pub struct Subscriptions {
    disposers: Vec<Disposer>,
    disposed: bool,
}

impl fmt::Debug for Subscriptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriptions")
            .field("pending", &self.disposers.len())
            .field("disposed", &self.disposed)
            .finish()
    }
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a teardown callback. After disposal it runs immediately.
    pub fn add(&mut self, dispose: impl FnOnce() + 'static) {
        if self.disposed {
            dispose();
        } else {
            self.disposers.push(Box::new(dispose));
        }
    }

    /// Keep `resource` alive until disposal, then drop it.
    pub fn hold<T: 'static>(&mut self, resource: T) {
        self.add(move || drop(resource));
    }

    pub fn len(&self) -> usize {
        self.disposers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disposers.is_empty()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Run every callback, newest first. Later calls are no-ops.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        let count = self.disposers.len();
        while let Some(dispose) = self.disposers.pop() {
            dispose();
        }
        tracing::debug!(count, "subscriptions disposed");
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn dispose_runs_in_reverse_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subs = Subscriptions::new();
        for i in 0..3 {
            let log = log.clone();
            subs.add(move || log.borrow_mut().push(i));
        }
        assert_eq!(subs.len(), 3);

        subs.dispose();
        subs.dispose();
        assert_eq!(*log.borrow(), vec![2, 1, 0]);
        assert!(subs.is_empty());
        assert!(subs.is_disposed());
    }

    #[test]
    fn drop_disposes() {
        let hits = Rc::new(RefCell::new(0));
        {
            let mut subs = Subscriptions::new();
            let hits = hits.clone();
            subs.add(move || *hits.borrow_mut() += 1);
        }
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn add_after_dispose_runs_immediately() {
        let hits = Rc::new(RefCell::new(0));
        let mut subs = Subscriptions::new();
        subs.dispose();
        let h = hits.clone();
        subs.add(move || *h.borrow_mut() += 1);
        assert_eq!(*hits.borrow(), 1);
        assert!(subs.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_first_tick_after_one_period() {
        let (_guard, mut ticks) = Ticker::spawn(Duration::from_millis(5000));

        time::sleep(Duration::from_millis(4900)).await;
        assert!(ticks.try_recv().is_err());

        assert_eq!(ticks.recv().await, Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_stops_when_guard_dropped() {
        let (guard, mut ticks) = Ticker::spawn(Duration::from_millis(5000));
        assert_eq!(ticks.recv().await, Some(1));

        drop(guard);
        time::sleep(Duration::from_secs(60)).await;
        assert_eq!(ticks.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn held_ticker_stops_on_dispose() {
        let (guard, mut ticks) = Ticker::spawn(Duration::from_millis(100));
        let mut subs = Subscriptions::new();
        subs.hold(guard);

        assert_eq!(ticks.recv().await, Some(1));
        subs.dispose();
        assert_eq!(ticks.recv().await, None);
    }
}
