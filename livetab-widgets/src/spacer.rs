use std::sync::Arc;

use livetab_core::{Render, Ui};

use crate::base::{leaf_attach, widget_identity, WidgetBase};

/// Empty space that takes whatever size its layout gives it.
pub struct Spacer {
    base: WidgetBase,
}

impl Spacer {
    pub fn new(ui: &Ui) -> Arc<Self> {
        Arc::new(Self {
            base: WidgetBase::new(ui),
        })
    }
}

widget_identity!(Spacer);
leaf_attach!(Spacer);

impl Render for Spacer {
    fn render(&self) -> String {
        format!(r#"<div id="{}" style="{}"></div>"#, self.base.tag(), self.base.size_style())
    }
}

/// A horizontal rule.
pub struct Divider {
    base: WidgetBase,
}

impl Divider {
    pub fn new(ui: &Ui) -> Arc<Self> {
        Arc::new(Self {
            base: WidgetBase::new(ui),
        })
    }
}

widget_identity!(Divider);
leaf_attach!(Divider);

impl Render for Divider {
    fn render(&self) -> String {
        format!(
            r#"<sl-divider id="{}" style="{} height: 32px;"></sl-divider>"#,
            self.base.tag(),
            self.base.size_style()
        )
    }
}
