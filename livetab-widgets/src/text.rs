use std::sync::Arc;

use livetab_core::{observe, Render, TextSource, Ui};

use crate::base::{html_escape, leaf_attach, widget_identity, WidgetBase};

/// A label bound to any string-like model.
pub struct Text {
    base: WidgetBase,
    source: Arc<dyn TextSource>,
}

impl Text {
    pub fn new(ui: &Ui, source: Arc<dyn TextSource>) -> Arc<Self> {
        let text = Arc::new(Self {
            base: WidgetBase::new(ui),
            source,
        });
        observe(&*text.source, &text);
        text
    }

    pub fn source(&self) -> &Arc<dyn TextSource> {
        &self.source
    }

    pub fn set_label(&self, label: &str) {
        self.source.set_text(label);
    }
}

widget_identity!(Text);
leaf_attach!(Text);

impl Render for Text {
    fn render(&self) -> String {
        format!(
            r#"<div id="{}" style="{} display: table;"><span class="label" style="{}">{}</span></div>"#,
            self.base.tag(),
            self.base.size_style(),
            self.base.text_style(),
            html_escape(&self.source.text()),
        )
    }
}
