use tokio_util::sync::CancellationToken as AbortToken;

use crate::domain::AppError;

/// Abort signal for one user request.
///
/// Cancelling a token cancels every child derived from it; cancelling a child
/// leaves its parent running.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    inner: AbortToken,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.inner.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.is_cancelled()
    }

    /// Token scoped to part of the request, such as one branch group.
    pub fn child_token(&self) -> Self {
        Self { inner: self.inner.child_token() }
    }

    /// Fail with [`AppError::Cancelled`] once the request has been aborted.
    pub fn check(&self) -> Result<(), AppError> {
        if self.is_cancelled() { Err(AppError::Cancelled) } else { Ok(()) }
    }
}
