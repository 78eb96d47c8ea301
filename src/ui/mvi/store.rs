//! Observable state container for MVI architecture.

use std::sync::Arc;

use tokio::sync::watch;

use super::reducer::Reducer;

/// Holds the current state of one screen and broadcasts changes.
///
/// Every mutation goes through the reducer. Subscribers are notified only
/// when the reduced state differs from the previous one.
pub struct Store<R: Reducer> {
    tx: Arc<watch::Sender<R::State>>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.tx.borrow().clone()
    }

    /// Subscribe to state changes. The receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.tx.subscribe()
    }

    /// Run the reducer. Returns true if the state changed.
    pub fn dispatch(&self, intent: R::Intent) -> bool {
        self.tx.send_if_modified(|state| apply::<R>(state, intent))
    }

    /// Run the reducer only if `guard` accepts the current state.
    ///
    /// The check, the transition and the returned snapshot all happen under
    /// the same write lock, so two callers racing on the same guard cannot
    /// both pass it and no other dispatch can slip in before the snapshot.
    /// Returns the reduced state if the intent was accepted.
    pub fn dispatch_if<G>(&self, guard: G, intent: R::Intent) -> Option<R::State>
    where
        G: FnOnce(&R::State) -> bool,
    {
        let mut accepted = None;
        self.tx.send_if_modified(|state| {
            if !guard(state) {
                return false;
            }
            let changed = apply::<R>(state, intent);
            accepted = Some(state.clone());
            changed
        });
        accepted
    }
}

fn apply<R: Reducer>(state: &mut R::State, intent: R::Intent) -> bool {
    let next = R::reduce(state.clone(), intent);
    if next == *state {
        return false;
    }
    *state = next;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mvi::{Intent, UiState};

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Counter(u32);

    impl UiState for Counter {}

    enum CounterIntent {
        Add(u32),
        Noop,
    }

    impl Intent for CounterIntent {}

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = Counter;
        type Intent = CounterIntent;

        fn reduce(state: Counter, intent: CounterIntent) -> Counter {
            match intent {
                CounterIntent::Add(n) => Counter(state.0 + n),
                CounterIntent::Noop => state,
            }
        }
    }

    #[test]
    fn dispatch_updates_state() {
        let store = Store::<CounterReducer>::default();
        assert!(store.dispatch(CounterIntent::Add(2)));
        assert_eq!(store.state(), Counter(2));
    }

    #[test]
    fn unchanged_state_does_not_notify() {
        let store = Store::<CounterReducer>::default();
        let mut rx = store.subscribe();

        assert!(!store.dispatch(CounterIntent::Noop));
        assert!(!rx.has_changed().unwrap());

        assert!(store.dispatch(CounterIntent::Add(1)));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Counter(1));
    }

    #[test]
    fn dispatch_if_respects_guard() {
        let store = Store::<CounterReducer>::new(Counter(5));

        assert_eq!(store.dispatch_if(|s| s.0 == 0, CounterIntent::Add(1)), None);
        assert_eq!(store.state(), Counter(5));

        assert_eq!(
            store.dispatch_if(|s| s.0 == 5, CounterIntent::Add(1)),
            Some(Counter(6))
        );
        assert_eq!(store.state(), Counter(6));
    }

    #[test]
    fn dispatch_if_snapshot_ignores_later_dispatches() {
        let store = Store::<CounterReducer>::default();

        let snapshot = store.dispatch_if(|_| true, CounterIntent::Add(1));
        store.dispatch(CounterIntent::Add(10));

        assert_eq!(snapshot, Some(Counter(1)));
        assert_eq!(store.state(), Counter(11));
    }

    #[test]
    fn dispatch_if_accepts_no_op_intent() {
        let store = Store::<CounterReducer>::new(Counter(4));
        let mut rx = store.subscribe();

        assert_eq!(
            store.dispatch_if(|_| true, CounterIntent::Noop),
            Some(Counter(4))
        );
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn clones_share_state() {
        let store = Store::<CounterReducer>::default();
        let other = store.clone();
        other.dispatch(CounterIntent::Add(3));
        assert_eq!(store.state(), Counter(3));
    }
}
