//! Observable models
//!
//! A model owns some state and an [`Observable`] listing the callbacks to run
//! after each mutation. Subscribers receive no payload; they read whatever
//! they need back from the model, which is already in its post-mutation state.

use std::sync::Arc;

use parking_lot::Mutex;

/// A model subscriber
pub type Subscriber = Arc<dyn Fn() + Send + Sync>;

/// Subscriber list shared by every concrete model.
#[derive(Default)]
pub struct Observable {
    subscribers: Mutex<Vec<Subscriber>>,
}

impl Observable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_subscriber(&self, subscriber: impl Fn() + Send + Sync + 'static) {
        self.subscribers.lock().push(Arc::new(subscriber));
    }

    /// Run every subscriber in insertion order.
    pub fn notify(&self) {
        let snapshot = self.subscribers.lock().clone();
        for subscriber in &snapshot {
            subscriber();
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }
}

impl std::fmt::Debug for Observable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// State that notifies subscribers on change.
///
/// Every mutation method of an implementor must apply its change fully and
/// then call [`Model::notify`] exactly once.
pub trait Model: Send + Sync {
    fn observers(&self) -> &Observable;

    fn notify(&self) {
        self.observers().notify();
    }
}
