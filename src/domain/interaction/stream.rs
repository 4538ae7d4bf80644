//! Append-only subscriber lists

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

/// Callback invoked when an event stream fires
pub type Subscriber = Arc<dyn Fn() + Send + Sync>;

/// An append-only list of subscribers.
///
/// Subscribers are invoked in the order they were added. There is no way to
/// remove one: a subscription lives as long as the stream.
#[derive(Default)]
pub struct EventStream {
    subscribers: Mutex<Vec<Subscriber>>,
}

impl EventStream {
    /// Create an empty stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a subscriber
    pub fn add<F>(&self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.subscribers.lock().push(Arc::new(callback));
    }

    /// Invoke every subscriber in order.
    ///
    /// The list is snapshotted first, so a subscriber may add to this
    /// stream without deadlocking; additions take effect on the next invoke.
    pub fn invoke(&self) {
        let snapshot: Vec<Subscriber> = self.subscribers.lock().clone();
        for subscriber in snapshot {
            subscriber();
        }
    }

    /// Number of subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }
}

impl fmt::Debug for EventStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventStream")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn invoke_with_no_subscribers_is_noop() {
        let stream = EventStream::new();
        stream.invoke();
        assert_eq!(stream.subscriber_count(), 0);
    }

    #[test]
    fn subscribers_run_in_order() {
        let stream = EventStream::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        for i in 0..3 {
            let log = Arc::clone(&log);
            stream.add(move || log.lock().push(i));
        }
        stream.invoke();

        assert_eq!(*log.lock(), vec![0, 1, 2]);
    }

    #[test]
    fn every_invoke_reaches_every_subscriber() {
        let stream = EventStream::new();
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        stream.add(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });

        stream.invoke();
        stream.invoke();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn subscriber_may_subscribe_during_invoke() {
        let stream = Arc::new(EventStream::new());
        let inner = Arc::clone(&stream);
        stream.add(move || inner.add(|| {}));

        stream.invoke();
        assert_eq!(stream.subscriber_count(), 2);
    }
}
