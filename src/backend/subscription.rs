//! Subscription handles
//!
//! A `Subscription` is returned for every live listener the backend holds.
//! Dropping it (or calling `unsubscribe`) releases the listener, so a handle
//! going out of scope on any path, including `?` early returns, cannot leak.

use std::fmt;

type Release = Box<dyn FnOnce() + Send>;

/// Guard for a registered listener
#[must_use = "dropping a Subscription immediately unsubscribes the listener"]
pub struct Subscription {
    label: String,
    release: Option<Release>,
}

impl Subscription {
    /// Wrap a release action
    pub fn new(label: impl Into<String>, release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            label: label.into(),
            release: Some(Box::new(release)),
        }
    }

    /// Whether the listener is still registered
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Release the listener now
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            tracing::debug!(subscription = %self.label, "Releasing subscription");
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("label", &self.label)
            .field("active", &self.is_active())
            .finish()
    }
}

/// A group of subscriptions released together
#[derive(Debug, Default)]
pub struct SubscriptionSet {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a subscription
    pub fn push(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    /// Number of live subscriptions
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Whether the set holds no subscriptions
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Release every subscription, in registration order
    pub fn release_all(&mut self) {
        for subscription in self.subscriptions.drain(..) {
            subscription.unsubscribe();
        }
    }
}

impl Drop for SubscriptionSet {
    fn drop(&mut self) {
        self.release_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting(counter: &Arc<AtomicUsize>) -> Subscription {
        let counter = Arc::clone(counter);
        Subscription::new("test", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_drop_releases_once() {
        let released = Arc::new(AtomicUsize::new(0));
        {
            let _sub = counting(&released);
        }
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe_releases_once() {
        let released = Arc::new(AtomicUsize::new(0));
        let sub = counting(&released);
        assert!(sub.is_active());
        sub.unsubscribe();
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_set_releases_all() {
        let released = Arc::new(AtomicUsize::new(0));
        let mut set = SubscriptionSet::new();
        set.push(counting(&released));
        set.push(counting(&released));
        set.push(counting(&released));
        assert_eq!(set.len(), 3);

        set.release_all();
        assert!(set.is_empty());
        assert_eq!(released.load(Ordering::SeqCst), 3);

        drop(set);
        assert_eq!(released.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_set_drop_releases() {
        let released = Arc::new(AtomicUsize::new(0));
        {
            let mut set = SubscriptionSet::new();
            set.push(counting(&released));
            set.push(counting(&released));
        }
        assert_eq!(released.load(Ordering::SeqCst), 2);
    }
}
