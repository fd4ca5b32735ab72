//! Per-call cancellation and deadline tracking.
//!
//! One [`CallContext`] is created per RPC and cloned into every task that works on the call.
//! Long-running steps either poll [`CallContext::check`] at step boundaries or wrap their
//! suspension points in [`CallContext::guard`].

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::Notify;
use tokio::time::Instant;

use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Default)]
struct Cancellation {
    cancelled: AtomicBool,
    notify: Notify,
}

#[derive(Debug, Clone, Default)]
pub struct CallContext {
    cancellation: Arc<Cancellation>,
    deadline: Option<Instant>,
}

impl CallContext {
    /// A context with no deadline.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            ..Self::default()
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// Context for an incoming call, honouring its `grpc-timeout` header.
    pub fn from_metadata(metadata: &tonic::metadata::MetadataMap) -> Self {
        match grpc_client::timeout::request_deadline(metadata) {
            Some(timeout) => Self::with_timeout(timeout),
            None => Self::new(),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Cancel the call. Every clone observes it.
    pub fn cancel(&self) {
        if !self.cancellation.cancelled.swap(true, Ordering::SeqCst) {
            self.cancellation.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.cancelled.load(Ordering::SeqCst)
    }

    pub fn deadline_exceeded(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// `Cancelled` or `DeadlineExceeded` once the call should stop.
    pub fn check(&self) -> CatalogResult<()> {
        if self.is_cancelled() {
            return Err(CatalogError::Cancelled);
        }
        if self.deadline_exceeded() {
            return Err(CatalogError::DeadlineExceeded);
        }
        Ok(())
    }

    /// Resolves once [`cancel`](Self::cancel) has been called.
    pub async fn cancelled(&self) {
        loop {
            let notified = self.cancellation.notify.notified();
            tokio::pin!(notified);
            // Register before re-reading the flag so a concurrent cancel is not missed.
            notified.as_mut().enable();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }

    /// Run `future` unless the call is cancelled or its deadline passes first.
    pub async fn guard<F: Future>(&self, future: F) -> CatalogResult<F::Output> {
        self.check()?;

        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancelled() => Err(CatalogError::Cancelled),
            _ = deadline => Err(CatalogError::DeadlineExceeded),
            output = future => Ok(output),
        }
    }
}
