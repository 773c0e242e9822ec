//! Auto-dismissal of the oldest notification.

use std::{sync::Arc, time::Duration};

use parking_lot::Mutex;
use tokio::{task::JoinHandle, time::Instant};

use super::{NotificationId, NotificationStore};

/// How long the head notification stays visible.
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_millis(3000);

/// Removes the head of a [`NotificationStore`] after a fixed delay.
///
/// The delay runs from the moment a new head is observed, not from when
/// the notification was created. Whenever the head changes (it was removed
/// elsewhere, or the queue drained and refilled) the pending deadline is
/// dropped and a fresh one is armed for the new head, so at most one
/// removal is ever pending. Adding behind the head leaves the deadline
/// untouched.
///
/// Dropping the handle cancels the pending removal.
///
/// Must be created inside a tokio runtime.
#[derive(Debug)]
pub struct AutoDismiss {
    armed: Arc<Mutex<Option<NotificationId>>>,
    task: JoinHandle<()>,
}

impl AutoDismiss {
    /// Starts watching `store`.
    pub fn spawn(store: NotificationStore, after: Duration) -> Self {
        let armed = Arc::new(Mutex::new(None));
        let task = tokio::spawn(watch_head(store, after, Arc::clone(&armed)));
        Self { armed, task }
    }

    /// Returns the id whose removal is currently pending, if any.
    pub fn armed_for(&self) -> Option<NotificationId> {
        *self.armed.lock()
    }
}

impl Drop for AutoDismiss {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn watch_head(
    store: NotificationStore,
    after: Duration,
    armed: Arc<Mutex<Option<NotificationId>>>,
) {
    let mut changes = store.subscribe();
    let mut pending: Option<(NotificationId, Instant)> = None;

    loop {
        let head = store.head().map(|n| n.id);
        if pending.map(|(id, _)| id) != head {
            pending = head.map(|id| (id, Instant::now() + after));
            if let Some(id) = head {
                tracing::trace!(%id, delay_ms = after.as_millis() as u64, "dismissal armed");
            }
        }
        *armed.lock() = pending.map(|(id, _)| id);

        match pending {
            Some((id, deadline)) => {
                tokio::select! {
                    _ = tokio::time::sleep_until(deadline) => {
                        pending = None;
                        store.remove(id);
                    }
                    changed = changes.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                }
            }
            None => {
                if changes.changed().await.is_err() {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationKind;

    async fn settle() {
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn head_is_removed_after_the_delay() {
        let store = NotificationStore::new();
        let first = store.add(NotificationKind::Success, "x");
        let _dismiss = AutoDismiss::spawn(store.clone(), DEFAULT_DISMISS_AFTER);
        settle().await;

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert_eq!(store.head().map(|n| n.id), Some(first));

        tokio::time::sleep(Duration::from_millis(2)).await;
        settle().await;
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn adding_behind_the_head_keeps_one_timer() {
        let store = NotificationStore::new();
        let first = store.add(NotificationKind::Success, "x");
        let second = store.add(NotificationKind::Error, "y");
        let dismiss = AutoDismiss::spawn(store.clone(), DEFAULT_DISMISS_AFTER);
        settle().await;
        assert_eq!(dismiss.armed_for(), Some(first));

        tokio::time::sleep(Duration::from_millis(1000)).await;
        store.add(NotificationKind::Info, "z");
        settle().await;
        assert_eq!(store.head().map(|n| n.id), Some(first));
        assert_eq!(dismiss.armed_for(), Some(first));

        // First deadline is still measured from t=0.
        tokio::time::sleep(Duration::from_millis(2001)).await;
        settle().await;
        assert_eq!(store.messages(), ["y", "z"]);
        assert_eq!(dismiss.armed_for(), Some(second));
    }

    #[tokio::test(start_paused = true)]
    async fn external_removal_rearms_for_the_new_head() {
        let store = NotificationStore::new();
        let first = store.add(NotificationKind::Success, "x");
        let second = store.add(NotificationKind::Error, "y");
        let dismiss = AutoDismiss::spawn(store.clone(), DEFAULT_DISMISS_AFTER);
        settle().await;

        tokio::time::sleep(Duration::from_millis(2000)).await;
        store.remove(first);
        settle().await;
        assert_eq!(dismiss.armed_for(), Some(second));

        // The stale deadline at t=3000 must not remove the new head.
        tokio::time::sleep(Duration::from_millis(1500)).await;
        settle().await;
        assert_eq!(store.messages(), ["y"]);

        tokio::time::sleep(Duration::from_millis(1501)).await;
        settle().await;
        assert!(store.is_empty());
        assert_eq!(dismiss.armed_for(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_cancels_removal() {
        let store = NotificationStore::new();
        store.add(NotificationKind::Info, "stay");
        let dismiss = AutoDismiss::spawn(store.clone(), DEFAULT_DISMISS_AFTER);
        settle().await;
        drop(dismiss);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        settle().await;
        assert_eq!(store.messages(), ["stay"]);
    }

    #[tokio::test(start_paused = true)]
    async fn idle_store_arms_on_first_add() {
        let store = NotificationStore::new();
        let dismiss = AutoDismiss::spawn(store.clone(), Duration::from_millis(100));
        settle().await;
        assert_eq!(dismiss.armed_for(), None);

        let id = store.add(NotificationKind::Warning, "late");
        settle().await;
        assert_eq!(dismiss.armed_for(), Some(id));

        tokio::time::sleep(Duration::from_millis(101)).await;
        settle().await;
        assert!(store.is_empty());
    }
}
