//! Task scope tied to a view-model's lifetime.
//!
//! Work launched through a scope stops as soon as the scope is cancelled,
//! either explicitly or by dropping the owning view-model.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;
use tokio::task::JoinHandle;

pub struct ViewModelScope {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ViewModelScope {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Cancel every task launched in this scope. Idempotent.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            tracing::debug!("View-model scope cancelled");
            self.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle {
            cancelled: Arc::clone(&self.cancelled),
            notify: Arc::clone(&self.notify),
        }
    }

    /// Spawn `fut` on the current runtime. The future is dropped without
    /// completing if the scope is cancelled first.
    pub fn launch<F>(&self, fut: F) -> JoinHandle<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = self.handle();
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = handle.cancelled() => {}
                _ = fut => {}
            }
        })
    }
}

impl Default for ViewModelScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ViewModelScope {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Lightweight handle for observing a scope's cancellation.
#[derive(Clone)]
pub struct ScopeHandle {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ScopeHandle {
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Run `f` only if the scope is still live. Launched tasks apply their
    /// result through this so a cancel that lands during the final poll
    /// still keeps the result out.
    pub fn unless_cancelled<T>(&self, f: impl FnOnce() -> T) -> Option<T> {
        if self.is_cancelled() {
            return None;
        }
        Some(f())
    }

    pub async fn cancelled(&self) {
        // Register with Notify before checking the flag, otherwise a cancel
        // between the check and the await would be missed.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}
