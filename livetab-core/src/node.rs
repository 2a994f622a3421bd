//! Node capabilities and lifecycle
//!
//! A node is anything with an identity that can render itself and be bound
//! to a session. The capabilities are separate traits so composites and
//! leaves can implement only what they need; [`Node`] is the union.

use std::sync::Arc;

use livetab_types::{InboundEvent, Interaction, NodeId, RoutingKey};
use parking_lot::Mutex;
use tracing::trace;

use crate::observable::Model;
use crate::router::EventRouter;
use crate::session::SessionHandle;
use crate::ui::Ui;

pub trait Identity {
    fn id(&self) -> NodeId;
}

pub trait Render {
    /// Markup for the current state. The outermost element carries the
    /// node's tag as its `id`.
    fn render(&self) -> String;
}

pub trait Attach {
    /// Bind this node, and every child it owns, to `session`.
    fn attach(&self, session: &SessionHandle);

    /// Unbind this node and every child it owns.
    fn detach(&self);

    /// The session this node is bound to, if attached.
    fn session(&self) -> Option<SessionHandle>;

    fn is_attached(&self) -> bool {
        self.session().is_some()
    }
}

pub trait Node: Identity + Render + Attach + Send + Sync {}

impl<T> Node for T where T: Identity + Render + Attach + Send + Sync + ?Sized {}

/// Re-render `node` and enqueue the result, if it is attached.
///
/// A detached node, or one whose session has ended, renders nothing and
/// sends nothing.
pub fn refresh<N: Node + ?Sized>(node: &N) {
    match node.session() {
        Some(session) if !session.is_closed() => session.post_update(node.id(), node.render()),
        Some(_) => trace!(node = %node.id(), "refresh skipped, session closed"),
        None => trace!(node = %node.id(), "refresh skipped, node detached"),
    }
}

/// Subscribe `node` to `model`: every mutation re-renders and pushes it.
///
/// The subscription holds the node weakly, so a model never keeps a
/// discarded node alive.
pub fn observe<M, N>(model: &M, node: &Arc<N>)
where
    M: Model + ?Sized,
    N: Node + ?Sized + 'static,
{
    let weak = Arc::downgrade(node);
    model.observers().add_subscriber(move || {
        if let Some(node) = weak.upgrade() {
            refresh(&*node);
        }
    });
}

/// Identity, routing access and attachment slot shared by every widget.
pub struct NodeCore {
    id: NodeId,
    router: Arc<EventRouter>,
    session: Mutex<Option<SessionHandle>>,
}

impl NodeCore {
    pub fn new(ui: &Ui) -> Self {
        Self {
            id: ui.next_id(),
            router: ui.router().clone(),
            session: Mutex::new(None),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tag(&self) -> String {
        self.id.tag()
    }

    pub fn attach(&self, session: &SessionHandle) {
        *self.session.lock() = Some(session.clone());
    }

    pub fn detach(&self) {
        self.session.lock().take();
    }

    pub fn session(&self) -> Option<SessionHandle> {
        self.session.lock().clone()
    }

    pub fn is_attached(&self) -> bool {
        self.session.lock().is_some()
    }

    /// Register a handler for `interaction` on this node.
    pub fn on(&self, interaction: Interaction, handler: impl Fn(&InboundEvent) + Send + Sync + 'static) {
        self.on_raw(interaction.wire_name(), handler);
    }

    /// Register a handler under an arbitrary wire event name.
    pub fn on_raw(&self, event: &str, handler: impl Fn(&InboundEvent) + Send + Sync + 'static) {
        self.router
            .subscribe(RoutingKey::new(self.id, event), Arc::new(handler));
    }
}

impl std::fmt::Debug for NodeCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeCore")
            .field("id", &self.id)
            .field("attached", &self.is_attached())
            .finish()
    }
}
