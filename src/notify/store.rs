//! In-memory notification queue.

use std::{fmt, sync::Arc};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Neutral information
    Info,
    /// An operation succeeded
    Success,
    /// Something needs attention
    Warning,
    /// An operation failed
    Error,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationKind::Info => write!(f, "info"),
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Warning => write!(f, "warning"),
            NotificationKind::Error => write!(f, "error"),
        }
    }
}

/// Identifier of a notification: milliseconds since the Unix epoch at
/// creation, bumped forward when the clock has not advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(i64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A short-lived status message. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique within the store that created it
    pub id: NotificationId,
    /// Severity
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Text shown to the user
    pub message: String,
}

#[derive(Debug, Default)]
struct Queue {
    items: Vec<Notification>,
    last_id: i64,
}

impl Queue {
    fn next_id(&mut self) -> NotificationId {
        let now = chrono::Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        NotificationId(self.last_id)
    }
}

#[derive(Debug)]
struct Shared {
    queue: Mutex<Queue>,
    revision: watch::Sender<u64>,
}

/// Ordered queue of notifications shared by everyone holding a handle.
///
/// Cloning the store clones the handle, not the queue. Every update is a
/// single read-modify-write under one lock, so notifications added from
/// several places in the same tick are never lost.
///
/// # Example
///
/// ```
/// use showcase_gate::notify::{NotificationKind, NotificationStore};
///
/// let store = NotificationStore::new();
///
/// let first = store.add(NotificationKind::Success, "x");
/// store.add(NotificationKind::Error, "y");
/// assert_eq!(store.messages(), ["x", "y"]);
///
/// store.remove(first);
/// assert_eq!(store.messages(), ["y"]);
/// ```
#[derive(Debug, Clone)]
pub struct NotificationStore {
    shared: Arc<Shared>,
}

impl NotificationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            shared: Arc::new(Shared {
                queue: Mutex::new(Queue::default()),
                revision,
            }),
        }
    }

    /// Appends a notification to the tail of the queue and returns its id.
    ///
    /// There is no deduplication and no cap on queue length.
    pub fn add(&self, kind: NotificationKind, message: impl Into<String>) -> NotificationId {
        let id = {
            let mut queue = self.shared.queue.lock();
            let id = queue.next_id();
            queue.items.push(Notification {
                id,
                kind,
                message: message.into(),
            });
            id
        };

        tracing::debug!(%id, %kind, "notification added");
        self.bump();
        id
    }

    /// Removes the notification with `id`. Absent ids are ignored.
    pub fn remove(&self, id: NotificationId) {
        let removed = {
            let mut queue = self.shared.queue.lock();
            let before = queue.items.len();
            queue.items.retain(|n| n.id != id);
            queue.items.len() != before
        };

        if removed {
            tracing::debug!(%id, "notification removed");
            self.bump();
        }
    }

    /// Returns the queue contents in insertion order.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.shared.queue.lock().items.clone()
    }

    /// Returns the messages in insertion order.
    pub fn messages(&self) -> Vec<String> {
        self.shared
            .queue
            .lock()
            .items
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    /// Returns the oldest notification, if any.
    pub fn head(&self) -> Option<Notification> {
        self.shared.queue.lock().items.first().cloned()
    }

    /// Returns the number of queued notifications.
    pub fn len(&self) -> usize {
        self.shared.queue.lock().items.len()
    }

    /// Returns true if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.shared.queue.lock().items.is_empty()
    }

    /// Subscribes to change signals.
    ///
    /// The receiver wakes after every add and every effective remove; read
    /// the new state with [`snapshot`](Self::snapshot) or [`head`](Self::head).
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.shared.revision.subscribe()
    }

    fn bump(&self) {
        self.shared.revision.send_modify(|rev| *rev = rev.wrapping_add(1));
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}
