//! The polling controller core.
//!
//! A view that wants live data creates a [`Poller`] when it mounts and keeps
//! the returned [`PollHandle`] for as long as it is mounted. The view's timer
//! calls [`Poller::tick`] once immediately and then once per interval, without
//! waiting for earlier ticks: fetches may overlap, and each result is applied
//! when it arrives. Stopping (or dropping) the handle flips a shared
//! [`CancelToken`]; every tick checks it before fetching and again before
//! applying, so nothing is written to a view that has gone away.

use std::cell::Cell;
use std::fmt::Display;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use crate::log::{trace, warn};

/// How often live views refetch.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// A flag shared between a poller and its handle.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Owned by the view for its mounted lifetime. Dropping it stops the poller.
#[derive(Debug)]
pub struct PollHandle {
    token: CancelToken,
}

impl PollHandle {
    pub fn stop(&self) {
        self.token.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// What happened to one tick's fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Applied,
    Failed,
    /// The poller was stopped before the result could be applied.
    Discarded,
}

pub struct Poller<T, E> {
    label: Rc<str>,
    token: CancelToken,
    on_data: Rc<dyn Fn(T)>,
    on_error: Option<Rc<dyn Fn(&E)>>,
}

impl<T, E> Clone for Poller<T, E> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            token: self.token.clone(),
            on_data: self.on_data.clone(),
            on_error: self.on_error.clone(),
        }
    }
}

impl<T, E> Poller<T, E>
where
    E: Display,
{
    /// Creates a poller writing successful results to `on_data`. `label`
    /// names the polled resource in logs.
    pub fn new(label: impl Into<Rc<str>>, on_data: impl Fn(T) + 'static) -> (Self, PollHandle) {
        let token = CancelToken::new();
        let poller = Self {
            label: label.into(),
            token: token.clone(),
            on_data: Rc::new(on_data),
            on_error: None,
        };
        (poller, PollHandle { token })
    }

    /// Also report failed fetches to `on_error`, after they are logged.
    pub fn with_error_sink(mut self, on_error: impl Fn(&E) + 'static) -> Self {
        self.on_error = Some(Rc::new(on_error));
        self
    }

    pub fn is_stopped(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Runs one fetch and applies its result unless the poller was stopped
    /// in the meantime. Failures are logged and never end the polling.
    pub async fn tick<F>(&self, fetch: F) -> TickOutcome
    where
        F: Future<Output = Result<T, E>>,
    {
        if self.is_stopped() {
            return TickOutcome::Discarded;
        }

        let result = fetch.await;

        if self.is_stopped() {
            trace!("Discarding {} result after stop", self.label);
            return TickOutcome::Discarded;
        }

        match result {
            Ok(data) => {
                (self.on_data)(data);
                TickOutcome::Applied
            }
            Err(err) => {
                warn!("Polling {} failed: {}", self.label, err);
                if let Some(on_error) = &self.on_error {
                    on_error(&err);
                }
                TickOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::{LocalPool, block_on};
    use futures::task::LocalSpawnExt;
    use std::cell::RefCell;

    type Applied = Rc<RefCell<Vec<u32>>>;

    fn recording_poller() -> (Poller<u32, String>, PollHandle, Applied) {
        let applied: Applied = Rc::new(RefCell::new(Vec::new()));
        let sink = applied.clone();
        let (poller, handle) = Poller::new("players", move |value: u32| sink.borrow_mut().push(value));
        (poller, handle, applied)
    }

    fn pending_fetch() -> (
        oneshot::Sender<u32>,
        impl Future<Output = Result<u32, String>>,
    ) {
        let (tx, rx) = oneshot::channel();
        (tx, async move { rx.await.map_err(|err| err.to_string()) })
    }

    #[test]
    fn test_tick_applies_result() {
        let (poller, _handle, applied) = recording_poller();
        let outcome = block_on(poller.tick(async { Ok(7) }));
        assert_eq!(outcome, TickOutcome::Applied);
        assert_eq!(*applied.borrow(), vec![7]);
    }

    #[test]
    fn test_results_apply_in_arrival_order() {
        let (poller, _handle, applied) = recording_poller();
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        let (first_tx, first) = pending_fetch();
        let (second_tx, second) = pending_fetch();
        for fetch in [first, second] {
            let poller = poller.clone();
            spawner
                .spawn_local(async move {
                    poller.tick(fetch).await;
                })
                .unwrap();
        }
        pool.run_until_stalled();
        assert!(applied.borrow().is_empty());

        // The later request resolves first, then the earlier one overwrites it.
        second_tx.send(2).unwrap();
        pool.run_until_stalled();
        assert_eq!(*applied.borrow(), vec![2]);

        first_tx.send(1).unwrap();
        pool.run_until_stalled();
        assert_eq!(*applied.borrow(), vec![2, 1]);
    }

    #[test]
    fn test_stop_discards_in_flight_result() {
        let (poller, handle, applied) = recording_poller();
        let outcome = Rc::new(Cell::new(None));
        let mut pool = LocalPool::new();

        let (tx, fetch) = pending_fetch();
        {
            let poller = poller.clone();
            let outcome = outcome.clone();
            pool.spawner()
                .spawn_local(async move {
                    outcome.set(Some(poller.tick(fetch).await));
                })
                .unwrap();
        }
        pool.run_until_stalled();

        drop(handle);
        tx.send(5).unwrap();
        pool.run_until_stalled();

        assert!(applied.borrow().is_empty());
        assert_eq!(outcome.get(), Some(TickOutcome::Discarded));
    }

    #[test]
    fn test_no_fetch_after_stop() {
        let (poller, handle, applied) = recording_poller();
        handle.stop();
        assert!(handle.is_stopped());

        let fetched = Rc::new(Cell::new(false));
        let flag = fetched.clone();
        let outcome = block_on(poller.tick(async move {
            flag.set(true);
            Ok(1)
        }));

        assert_eq!(outcome, TickOutcome::Discarded);
        assert!(!fetched.get());
        assert!(applied.borrow().is_empty());
    }

    #[test]
    fn test_failure_keeps_polling() {
        let (poller, _handle, applied) = recording_poller();
        let errors = Rc::new(RefCell::new(Vec::<String>::new()));
        let poller = {
            let errors = errors.clone();
            poller.with_error_sink(move |err: &String| errors.borrow_mut().push(err.clone()))
        };

        let outcome = block_on(poller.tick(async { Err("connection refused".to_string()) }));
        assert_eq!(outcome, TickOutcome::Failed);
        assert_eq!(*errors.borrow(), vec!["connection refused".to_string()]);
        assert!(applied.borrow().is_empty());

        let outcome = block_on(poller.tick(async { Ok(3) }));
        assert_eq!(outcome, TickOutcome::Applied);
        assert_eq!(*applied.borrow(), vec![3]);
    }

    #[test]
    fn test_default_interval_is_one_second() {
        assert_eq!(DEFAULT_POLL_INTERVAL, Duration::from_secs(1));
    }
}
