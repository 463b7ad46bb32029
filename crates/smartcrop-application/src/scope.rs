//! Cancellation scope owned by a mounted view.

use std::future::Future;

use smartcrop_core::Result;
use tokio_util::sync::CancellationToken;

use crate::slot::SlotCell;

/// Every in-flight call of a view runs under its scope. Once the view unmounts the
/// scope is cancelled and results that arrive later are dropped.
#[derive(Debug, Clone)]
pub struct ViewScope {
    view: &'static str,
    token: CancellationToken,
}

impl ViewScope {
    pub fn new(view: &'static str) -> Self {
        Self {
            view,
            token: CancellationToken::new(),
        }
    }

    /// A scope cancelled together with this one, for embedded components.
    pub fn child(&self, view: &'static str) -> Self {
        Self {
            view,
            token: self.token.child_token(),
        }
    }

    pub fn view(&self) -> &'static str {
        self.view
    }

    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }

    pub fn cancel(&self) {
        if self.is_active() {
            tracing::debug!(view = self.view, "Unmounting, cancelling in-flight calls");
        }
        self.token.cancel();
    }

    /// Drives `call` to completion unless the scope is cancelled first.
    ///
    /// Returns `None` when the result was discarded.
    pub async fn run<T, F>(&self, call: F) -> Option<Result<T>>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => {
                tracing::debug!(view = self.view, "Discarding result of cancelled call");
                None
            }
            result = call => {
                if self.token.is_cancelled() {
                    tracing::debug!(
                        view = self.view,
                        "Discarding result that arrived after unmount"
                    );
                    None
                } else {
                    Some(result)
                }
            }
        }
    }

    /// Loads a mount slot: `begin`, run `call` under the scope, then `finish`.
    ///
    /// Does nothing if the slot refuses to begin. A discarded result leaves the slot
    /// as it was.
    pub async fn load<T, F>(&self, slot: &SlotCell<T>, call: F)
    where
        T: Clone + Send + Sync,
        F: Future<Output = Result<T>>,
    {
        if !slot.begin() {
            return;
        }
        if let Some(result) = self.run(call).await {
            slot.finish(result);
        }
    }

    /// Like [`load`](Self::load) for a slot driven by a user action.
    pub async fn act<T, F>(&self, slot: &SlotCell<T>, call: F) -> Option<Result<T>>
    where
        T: Clone + Send + Sync,
        F: Future<Output = Result<T>>,
    {
        if !slot.begin_action() {
            tracing::debug!(view = self.view, slot = slot.name(), "Action already in flight");
            return None;
        }
        let result = self.run(call).await?;
        slot.finish(result.clone());
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::Slot;
    use smartcrop_core::AdvisoryError;

    #[tokio::test]
    async fn test_run_passes_result_through() {
        let scope = ViewScope::new("test");
        let result = scope.run(async { Ok::<_, AdvisoryError>(5) }).await;
        assert_eq!(result, Some(Ok(5)));
    }

    #[tokio::test]
    async fn test_cancelled_scope_discards() {
        let scope = ViewScope::new("test");
        scope.cancel();
        assert!(!scope.is_active());

        let slot: SlotCell<u32> = SlotCell::new("value");
        scope.load(&slot, async { Ok(1) }).await;
        assert!(slot.get().is_loading(), "result must not land after unmount");
    }

    #[tokio::test]
    async fn test_child_cancelled_with_parent() {
        let parent = ViewScope::new("parent");
        let child = parent.child("child");
        parent.cancel();
        assert!(!child.is_active());
    }

    #[tokio::test]
    async fn test_act_reports_failure_and_records_it() {
        let scope = ViewScope::new("test");
        let slot: SlotCell<u32> = SlotCell::new("value");
        let result = scope
            .act(&slot, async { Err::<u32, _>(AdvisoryError::network("down")) })
            .await;
        assert!(result.unwrap().unwrap_err().is_network());
        assert!(matches!(slot.get(), Slot::Failure(_)));
    }
}
