//! Call context carried by every repository operation
//!
//! A `Context` combines a cancellation token with an optional deadline.
//! Repositories run each storage future through [`Context::run`], which
//! refuses to start work on a finished context and drops in-flight work as
//! soon as the context is cancelled or expires.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use super::DomainError;

#[derive(Debug, Clone, Default)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    /// Context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Some(deadline),
        }
    }

    /// Derived context: cancelled together with `self`, same deadline.
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// Derived context whose deadline is the earlier of the parent's and
    /// `now + timeout`.
    pub fn child_with_timeout(&self, timeout: Duration) -> Self {
        let candidate = Instant::now() + timeout;
        let deadline = match self.deadline {
            Some(parent) if parent < candidate => parent,
            _ => candidate,
        };
        Self {
            token: self.token.child_token(),
            deadline: Some(deadline),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Why the context is done, or `None` while it is still live.
    pub fn err(&self) -> Option<DomainError> {
        if self.token.is_cancelled() {
            return Some(DomainError::Cancelled);
        }
        if let Some(deadline) = self.deadline
            && Instant::now() >= deadline
        {
            return Some(DomainError::DeadlineExceeded);
        }
        None
    }

    /// Drives `work` unless the context finishes first.
    ///
    /// `work` is not polled at all when the context is already done, so no
    /// storage call is issued. When the context finishes mid-flight the
    /// future is dropped, which aborts the pending query.
    pub async fn run<F, T, E>(&self, work: F) -> Result<T, DomainError>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<DomainError>,
    {
        if let Some(err) = self.err() {
            return Err(err);
        }

        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(DomainError::Cancelled),
            _ = deadline => Err(DomainError::DeadlineExceeded),
            result = work => result.map_err(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn background_context_runs_work() {
        let ctx = Context::background();
        let value = ctx
            .run(async { Ok::<_, DomainError>(42) })
            .await
            .expect("work should complete");
        assert_eq!(value, 42);
        assert!(ctx.err().is_none());
    }

    #[tokio::test]
    async fn cancelled_context_never_polls_work() {
        let ctx = Context::background();
        ctx.cancel();

        let polled = Arc::new(AtomicBool::new(false));
        let flag = polled.clone();
        let result = ctx
            .run(async move {
                flag.store(true, Ordering::SeqCst);
                Ok::<_, DomainError>(())
            })
            .await;

        assert!(matches!(result, Err(DomainError::Cancelled)));
        assert!(!polled.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn expired_deadline_reports_deadline_exceeded() {
        let ctx = Context::with_timeout(Duration::ZERO);
        let result = ctx.run(async { Ok::<_, DomainError>(()) }).await;
        assert!(matches!(result, Err(DomainError::DeadlineExceeded)));
    }

    #[tokio::test]
    async fn cancellation_aborts_in_flight_work() {
        let ctx = Context::background();
        let canceller = ctx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            canceller.cancel();
        });

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            ctx.run(std::future::pending::<Result<(), DomainError>>()),
        )
        .await
        .expect("run must return promptly after cancel");

        assert!(matches!(result, Err(DomainError::Cancelled)));
    }

    #[tokio::test]
    async fn deadline_aborts_in_flight_work() {
        let ctx = Context::with_timeout(Duration::from_millis(20));
        let result = tokio::time::timeout(
            Duration::from_secs(5),
            ctx.run(std::future::pending::<Result<(), DomainError>>()),
        )
        .await
        .expect("run must return promptly at the deadline");

        assert!(matches!(result, Err(DomainError::DeadlineExceeded)));
    }

    #[test]
    fn child_is_cancelled_with_parent() {
        let parent = Context::background();
        let child = parent.child();
        parent.cancel();
        assert!(child.is_cancelled());
    }

    #[test]
    fn cancelling_child_leaves_parent_live() {
        let parent = Context::background();
        let child = parent.child();
        child.cancel();
        assert!(!parent.is_cancelled());
    }

    #[tokio::test]
    async fn child_with_timeout_keeps_earlier_parent_deadline() {
        let parent = Context::with_timeout(Duration::from_millis(10));
        let child = parent.child_with_timeout(Duration::from_secs(60));
        assert_eq!(child.deadline(), parent.deadline());
    }
}
