//! Application context

use std::sync::Arc;

use livetab_types::NodeId;

use crate::id::IdAllocator;
use crate::router::EventRouter;

/// Owns the identity allocator and event router for one application.
///
/// Widget constructors take a `&Ui`; the server routes inbound events
/// through the same router. Cloning is cheap and shares both.
#[derive(Debug, Clone, Default)]
pub struct Ui {
    ids: Arc<IdAllocator>,
    router: Arc<EventRouter>,
}

impl Ui {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> NodeId {
        self.ids.next()
    }

    pub fn ids(&self) -> &Arc<IdAllocator> {
        &self.ids
    }

    pub fn router(&self) -> &Arc<EventRouter> {
        &self.router
    }
}
