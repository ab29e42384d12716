//! Submit lock shared by the form controllers
//!
//! The UI runs on a single-threaded event loop, so the lock only has
//! to close the window between a submit event and the first await
//! point. A `Cell` behind an `Rc` is enough; no atomics involved.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use serde_json::Value;
use thiserror::Error;

use crate::schema::{SchemaValidationError, SearchQuery};

/// Why a submit event did not reach the fetch collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Schema(#[from] SchemaValidationError),
    #[error("a submission is already in flight")]
    InFlight,
}

/// Submit lock owned by one form controller instance
#[derive(Default, Clone)]
pub struct Submission {
    in_flight: Rc<Cell<bool>>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a submission holds the lock
    pub fn is_submitting(&self) -> bool {
        self.in_flight.get()
    }

    /// Acquire the lock, or refuse if a submission is already running.
    ///
    /// The flag is set before this returns, so a second submit fired
    /// in the same event turn already observes it.
    pub fn begin(&self) -> Option<SubmitGuard> {
        if self.in_flight.get() {
            None
        } else {
            self.in_flight.set(true);
            Some(SubmitGuard { slot: Rc::clone(&self.in_flight) })
        }
    }
}

/// Releases the submit lock when dropped, whether the submission
/// resolved, rejected or panicked
pub struct SubmitGuard {
    slot: Rc<Cell<bool>>,
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.slot.set(false);
    }
}

/// Validate raw search input and acquire the submit lock
///
/// Both steps happen synchronously in the caller's turn. A validation
/// failure never touches the lock, so a rejected submit leaves the
/// form enabled.
pub fn prepare_search(lock: &Submission, input: &Value) -> Result<PreparedSearch, SubmitError> {
    let search = SearchQuery::validate(input)?;
    let guard = lock.begin().ok_or(SubmitError::InFlight)?;
    Ok(PreparedSearch { query: search.query, guard })
}

/// A validated search holding the submit lock
pub struct PreparedSearch {
    query: String,
    guard: SubmitGuard,
}

impl PreparedSearch {
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Run the fetch collaborator with the validated query, releasing
    /// the lock when it settles either way.
    ///
    /// The fetch outcome is returned untouched; there is no retry.
    pub async fn dispatch<F, Fut, E>(self, fetch: F) -> Result<(), E>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        let _guard = self.guard;
        fetch(self.query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use serde_json::json;

    fn recorded_calls() -> Rc<RefCell<Vec<String>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn valid_submit_dispatches_exactly_one_fetch() {
        for query in ["groceries", ""] {
            let lock = Submission::new();
            let calls = recorded_calls();
            let prepared = prepare_search(&lock, &json!({ "query": query })).unwrap();
            let calls2 = calls.clone();
            let result: Result<(), ()> = block_on(prepared.dispatch(move |q| {
                calls2.borrow_mut().push(q);
                async { Ok(()) }
            }));
            assert_eq!(result, Ok(()));
            assert_eq!(*calls.borrow(), [query]);
            assert!(!lock.is_submitting());
        }
    }

    #[test]
    fn invalid_input_never_reaches_the_fetch() {
        let lock = Submission::new();
        for input in [json!({}), json!({ "query": 42 })] {
            match prepare_search(&lock, &input) {
                Err(SubmitError::Schema(err)) => assert_eq!(err.field, "query"),
                other => panic!("expected schema error, got {:?}", other.map(|p| p.query().to_owned())),
            }
            assert!(!lock.is_submitting());
        }
    }

    #[test]
    fn lock_is_held_from_submit_until_the_fetch_resolves() {
        let mut pool = LocalPool::new();
        let lock = Submission::new();
        let calls = recorded_calls();
        let (settle, settled) = oneshot::channel::<Result<(), &'static str>>();

        assert!(!lock.is_submitting());
        let prepared = prepare_search(&lock, &json!({ "query": "groceries" })).unwrap();
        // Synchronously locked, before the fetch future is even polled
        assert!(lock.is_submitting());

        let calls2 = calls.clone();
        pool.spawner()
            .spawn_local(async move {
                let _ = prepared
                    .dispatch(move |q| {
                        calls2.borrow_mut().push(q);
                        async move { settled.await.unwrap() }
                    })
                    .await;
            })
            .unwrap();

        pool.run_until_stalled();
        assert!(lock.is_submitting());
        assert_eq!(*calls.borrow(), ["groceries"]);

        settle.send(Ok(())).unwrap();
        pool.run();
        assert!(!lock.is_submitting());
    }

    #[test]
    fn lock_is_released_when_the_fetch_rejects() {
        let lock = Submission::new();
        let prepared = prepare_search(&lock, &json!({ "query": "rent" })).unwrap();
        let result = block_on(prepared.dispatch(|_| async { Err("network down") }));
        assert_eq!(result, Err("network down"));
        assert!(!lock.is_submitting());
    }

    #[test]
    fn second_submit_in_flight_is_refused() {
        let mut pool = LocalPool::new();
        let lock = Submission::new();
        let calls = recorded_calls();
        let (settle, settled) = oneshot::channel::<Result<(), &'static str>>();

        let first = prepare_search(&lock, &json!({ "query": "first" })).unwrap();
        // Fired before the first fetch settles: refused, no second call
        assert_eq!(
            prepare_search(&lock, &json!({ "query": "second" })).err(),
            Some(SubmitError::InFlight)
        );

        let calls2 = calls.clone();
        pool.spawner()
            .spawn_local(async move {
                let _ = first
                    .dispatch(move |q| {
                        calls2.borrow_mut().push(q);
                        async move { settled.await.unwrap() }
                    })
                    .await;
            })
            .unwrap();
        pool.run_until_stalled();
        assert_eq!(
            prepare_search(&lock, &json!({ "query": "third" })).err(),
            Some(SubmitError::InFlight)
        );

        settle.send(Ok(())).unwrap();
        pool.run();
        assert_eq!(*calls.borrow(), ["first"]);

        // Settled: the lock is free for a manual retry
        assert!(prepare_search(&lock, &json!({ "query": "fourth" })).is_ok());
    }

    #[test]
    fn guard_releases_on_drop() {
        let lock = Submission::new();
        let guard = lock.begin().unwrap();
        assert!(lock.is_submitting());
        assert!(lock.begin().is_none());
        drop(guard);
        assert!(!lock.is_submitting());
    }
}
