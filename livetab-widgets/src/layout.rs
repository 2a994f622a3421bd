//! Flex layouts
//!
//! A layout owns its children. Attaching or detaching it does the same to
//! every child, and a child added while the layout is attached is attached
//! to the same session before the layout re-renders.
//!
//! On each render the layout computes every child's size style from the
//! child's [`SizePolicy`](crate::style::SizePolicy) and the layout's
//! direction, and stores it on the child so the child's own re-renders
//! keep it.

use std::sync::Arc;

use livetab_core::{refresh, Attach, Identity, NodeId, Render, SessionHandle, Ui};
use parking_lot::RwLock;
use tracing::trace;

use crate::base::{widget_identity, Styled, Widget, WidgetBase};
use crate::style::Direction;

pub struct Layout {
    base: WidgetBase,
    direction: Direction,
    children: RwLock<Vec<Arc<dyn Widget>>>,
}

impl Layout {
    pub fn new(ui: &Ui, direction: Direction, children: Vec<Arc<dyn Widget>>) -> Arc<Self> {
        Arc::new(Self {
            base: WidgetBase::new(ui),
            direction,
            children: RwLock::new(children),
        })
    }

    /// Children side by side.
    pub fn row(ui: &Ui, children: Vec<Arc<dyn Widget>>) -> Arc<Self> {
        Self::new(ui, Direction::Row, children)
    }

    /// Children stacked top to bottom.
    pub fn column(ui: &Ui, children: Vec<Arc<dyn Widget>>) -> Arc<Self> {
        Self::new(ui, Direction::Column, children)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn children(&self) -> Vec<Arc<dyn Widget>> {
        self.children.read().clone()
    }

    pub fn len(&self) -> usize {
        self.children.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.read().is_empty()
    }

    /// Append `child`, binding it to this layout's session if there is one.
    pub fn push(&self, child: Arc<dyn Widget>) {
        {
            // Held across the session check so a concurrent detach sees the
            // new child.
            let mut children = self.children.write();
            if let Some(session) = self.session() {
                child.attach(&session);
            }
            trace!(layout = %self.id(), child = %child.id(), "child added");
            children.push(child);
        }
        refresh(self);
    }

    /// Remove the child with id `id`, detaching it. Returns the child.
    pub fn remove(&self, id: NodeId) -> Option<Arc<dyn Widget>> {
        let removed = {
            let mut children = self.children.write();
            let index = children.iter().position(|c| c.id() == id)?;
            children.remove(index)
        };
        removed.detach();
        trace!(layout = %self.id(), child = %id, "child removed");
        refresh(self);
        Some(removed)
    }

    pub fn clear(&self) {
        let removed = std::mem::take(&mut *self.children.write());
        for child in &removed {
            child.detach();
        }
        refresh(self);
    }
}

widget_identity!(Layout);

impl Attach for Layout {
    fn attach(&self, session: &SessionHandle) {
        self.base.core().attach(session);
        for child in self.children() {
            child.attach(session);
        }
    }

    fn detach(&self) {
        self.base.core().detach();
        for child in self.children() {
            child.detach();
        }
    }

    fn session(&self) -> Option<SessionHandle> {
        self.base.core().session()
    }
}

impl Render for Layout {
    fn render(&self) -> String {
        let mut inner = String::new();
        for child in self.children() {
            child
                .base()
                .set_size_style(self.direction.child_style(child.base().size()));
            inner.push_str(&child.render());
        }
        format!(
            r#"<div id="{}" style="{} {}">{}</div>"#,
            self.base.tag(),
            self.direction.container_style(),
            self.base.size_style(),
            inner
        )
    }
}
