// ── View lifetime ──

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::error::CoreError;

/// The mounted lifetime of one view.
///
/// Dropping the scope (or calling [`unmount`](Self::unmount)) cancels the
/// token; every request routed through [`guard`](Self::guard) then
/// resolves to [`CoreError::Cancelled`].
#[derive(Debug)]
pub struct ViewScope {
    token: CancellationToken,
}

/// Cloneable remote control for unmounting a view from another task.
#[derive(Debug, Clone)]
pub struct UnmountHandle(CancellationToken);

impl UnmountHandle {
    pub(crate) fn from_token(token: CancellationToken) -> Self {
        Self(token)
    }

    pub fn unmount(&self) {
        self.0.cancel();
    }
}

impl ViewScope {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// A scope that also ends when `parent` is cancelled.
    pub fn child_of(parent: &CancellationToken) -> Self {
        Self {
            token: parent.child_token(),
        }
    }

    pub fn is_mounted(&self) -> bool {
        !self.token.is_cancelled()
    }

    pub fn unmount(&self) {
        self.token.cancel();
    }

    pub fn handle(&self) -> UnmountHandle {
        UnmountHandle(self.token.clone())
    }

    /// Race `fut` against unmount.
    ///
    /// A result that lands after unmount is discarded as well.
    pub async fn guard<T, F>(&self, fut: F) -> Result<T, CoreError>
    where
        F: Future<Output = Result<T, CoreError>>,
    {
        if self.token.is_cancelled() {
            return Err(CoreError::Cancelled);
        }
        let result = tokio::select! {
            biased;
            () = self.token.cancelled() => return Err(CoreError::Cancelled),
            result = fut => result,
        };
        if self.token.is_cancelled() {
            return Err(CoreError::Cancelled);
        }
        result
    }
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn completed_request_passes_through() {
        let scope = ViewScope::new();
        let out = scope.guard(async { Ok::<_, CoreError>(7) }).await;
        assert!(matches!(out, Ok(7)));
    }

    #[tokio::test]
    async fn unmounted_scope_refuses_new_requests() {
        let scope = ViewScope::new();
        scope.unmount();
        let out = scope.guard(async { Ok::<_, CoreError>(7) }).await;
        assert!(matches!(out, Err(CoreError::Cancelled)));
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_during_request_cancels_it() {
        let scope = ViewScope::new();
        let handle = scope.handle();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            handle.unmount();
        });
        let out = scope
            .guard(async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok::<_, CoreError>(())
            })
            .await;
        assert!(matches!(out, Err(CoreError::Cancelled)));
        assert!(!scope.is_mounted());
    }

    #[test]
    fn dropping_the_scope_unmounts() {
        let scope = ViewScope::new();
        let handle = scope.handle();
        drop(scope);
        assert!(handle.0.is_cancelled());
    }

    #[test]
    fn child_scope_follows_parent() {
        let parent = CancellationToken::new();
        let scope = ViewScope::child_of(&parent);
        parent.cancel();
        assert!(!scope.is_mounted());
    }
}
