//! Event routing
//!
//! Maps a [`RoutingKey`] to the handlers registered under it. Inbound events
//! are delivered synchronously, on whatever task called [`EventRouter::publish`].

use std::collections::HashMap;
use std::sync::Arc;

use livetab_types::{InboundEvent, RoutingKey};
use parking_lot::RwLock;
use tracing::debug;

/// A registered event handler
pub type Handler = Arc<dyn Fn(&InboundEvent) + Send + Sync>;

/// Publish/subscribe bus keyed by `(node, interaction)`.
#[derive(Default)]
pub struct EventRouter {
    handlers: RwLock<HashMap<RoutingKey, Vec<Handler>>>,
}

impl EventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. Handlers under one key run in registration order.
    pub fn subscribe(&self, key: RoutingKey, handler: Handler) {
        debug!(key = %key, "handler registered");
        self.handlers.write().entry(key).or_default().push(handler);
    }

    /// Invoke every handler registered under `key`, returning how many ran.
    ///
    /// The handler list is snapshotted before dispatch, so a handler may
    /// subscribe further handlers without affecting the current delivery.
    /// Unknown keys are not an error.
    pub fn publish(&self, key: &RoutingKey, event: &InboundEvent) -> usize {
        let snapshot: Vec<Handler> = match self.handlers.read().get(key) {
            Some(list) => list.clone(),
            None => return 0,
        };

        for handler in &snapshot {
            handler(event);
        }
        snapshot.len()
    }

    /// Route an event under its own key.
    pub fn dispatch(&self, event: &InboundEvent) -> usize {
        self.publish(&event.routing_key(), event)
    }

    pub fn handler_count(&self, key: &RoutingKey) -> usize {
        self.handlers.read().get(key).map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for EventRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRouter")
            .field("keys", &self.handlers.read().len())
            .finish()
    }
}
