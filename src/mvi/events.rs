//! Conflated one-shot event channel.
//!
//! State cells replay their latest value to every new subscriber, which
//! is wrong for signals like "navigate now": a late subscriber would
//! re-trigger the transition. This channel holds at most one pending
//! event, replaces it on every send, and hands it out exactly once.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::Notify;

struct Shared<T> {
    slot: Mutex<Option<T>>,
    notify: Notify,
}

/// Sending half. `send` never blocks: an unconsumed event is simply
/// replaced by the newer one.
pub struct EventSender<T> {
    shared: Arc<Shared<T>>,
}

/// Receiving half. Intended for a single active subscriber at a time;
/// consumption is a `take`, so each event is delivered at most once
/// overall even if several receivers exist.
pub struct EventReceiver<T> {
    shared: Arc<Shared<T>>,
}

/// Create a conflated channel with an empty slot.
pub fn channel<T: Send>() -> (EventSender<T>, EventReceiver<T>) {
    let shared = Arc::new(Shared {
        slot: Mutex::new(None),
        notify: Notify::new(),
    });
    (
        EventSender {
            shared: Arc::clone(&shared),
        },
        EventReceiver { shared },
    )
}

impl<T: Send> EventSender<T> {
    /// Enqueue an event, replacing any unconsumed one.
    pub fn send(&self, event: T) {
        *self.shared.slot.lock() = Some(event);
        self.shared.notify.notify_waiters();
    }

    /// Create another receiver sharing the same slot.
    pub fn subscribe(&self) -> EventReceiver<T> {
        EventReceiver {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Send> EventReceiver<T> {
    /// Take the pending event, if any.
    pub fn try_recv(&mut self) -> Option<T> {
        self.shared.slot.lock().take()
    }

    /// Wait for the next event.
    pub async fn recv(&mut self) -> T {
        loop {
            // Subscribe to Notify BEFORE checking the slot to avoid a
            // TOCTOU race: send() could fire between the check and the
            // await, and notify_waiters() would have no subscribers,
            // losing the wakeup.
            let notified = self.shared.notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if let Some(event) = self.shared.slot.lock().take() {
                return event;
            }
            notified.await;
        }
    }
}
