//! livetab core - the reactive synchronization engine
//!
//! This crate keeps a server-side node tree in sync with one browser tab:
//!
//! - **Identity**: [`IdAllocator`] hands out strictly increasing [`NodeId`]s
//! - **Routing**: [`EventRouter`] maps `(node, interaction)` keys to handlers
//! - **Models**: [`Observable`] state that notifies subscribers on mutation
//! - **Nodes**: the [`Identity`], [`Render`] and [`Attach`] capabilities
//! - **Sessions**: [`Session`] runs the inbound and outbound loops of one
//!   connection; attached nodes push patches through a [`SessionHandle`]
//!
//! ## Data flow
//!
//! ```text
//! client event -> Session inbound loop -> EventRouter -> handler
//!   -> model mutation -> notify -> node re-render -> SessionHandle::post_update
//!   -> Session outbound loop -> client
//! ```
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use livetab_core::{
//!     observe, outbound_queue, Attach, Identity, NodeCore, NodeId, Render, SessionHandle,
//!     StrState, Ui,
//! };
//!
//! struct Greeting {
//!     core: NodeCore,
//!     name: Arc<StrState>,
//! }
//!
//! impl Identity for Greeting {
//!     fn id(&self) -> NodeId {
//!         self.core.id()
//!     }
//! }
//!
//! impl Render for Greeting {
//!     fn render(&self) -> String {
//!         format!("<p id=\"{}\">hello {}</p>", self.core.tag(), self.name.get())
//!     }
//! }
//!
//! impl Attach for Greeting {
//!     fn attach(&self, session: &SessionHandle) {
//!         self.core.attach(session);
//!     }
//!     fn detach(&self) {
//!         self.core.detach();
//!     }
//!     fn session(&self) -> Option<SessionHandle> {
//!         self.core.session()
//!     }
//! }
//!
//! let ui = Ui::new();
//! let name = StrState::new("world");
//! let greeting = Arc::new(Greeting {
//!     core: NodeCore::new(&ui),
//!     name: name.clone(),
//! });
//! observe(&*name, &greeting);
//!
//! let (handle, mut patches) = outbound_queue();
//! greeting.attach(&handle);
//! name.set("livetab");
//!
//! let patch = patches.try_recv().unwrap();
//! assert_eq!(patch.target, greeting.id());
//! assert_eq!(patch.markup, r#"<p id="lt-1">hello livetab</p>"#);
//! ```

pub mod error;
pub mod id;
pub mod models;
pub mod node;
pub mod observable;
pub mod router;
pub mod session;
pub mod shutdown;
pub mod ui;

pub use error::{Result, SessionError};
pub use id::IdAllocator;
pub use livetab_types::{
    target_events, InboundEvent, Interaction, NodeId, Patch, Props, RoutingKey, TargetEvent,
};
pub use models::{BoolState, IntState, StrState, TableModel, TextSource};
pub use node::{observe, refresh, Attach, Identity, Node, NodeCore, Render};
pub use observable::{Model, Observable, Subscriber};
pub use router::{EventRouter, Handler};
pub use session::{
    outbound_queue, CloseReason, PatchReceiver, Session, SessionHandle, SessionOutcome,
    SessionState,
};
pub use shutdown::{Shutdown, ShutdownListener};
pub use ui::Ui;
