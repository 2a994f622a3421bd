use std::sync::Arc;

use livetab_core::{observe, BoolState, Interaction, Render, Ui};

use crate::base::{html_escape, leaf_attach, widget_identity, WidgetBase};

/// A labelled on/off toggle bound to a [`BoolState`].
pub struct Switch {
    base: WidgetBase,
    model: Arc<BoolState>,
    label: String,
}

impl Switch {
    pub fn new(ui: &Ui, checked: bool, label: impl Into<String>) -> Arc<Self> {
        Self::with_model(ui, BoolState::new(checked), label)
    }

    pub fn with_model(ui: &Ui, model: Arc<BoolState>, label: impl Into<String>) -> Arc<Self> {
        let switch = Arc::new(Self {
            base: WidgetBase::new(ui),
            model,
            label: label.into(),
        });
        let m = switch.model.clone();
        switch.base.core().on(Interaction::Change, move |ev| {
            // The client reports `checked` for toggles; fall back to flipping.
            let checked = ev.prop_bool("checked").unwrap_or(!m.get());
            m.set(checked);
        });
        observe(&*switch.model, &switch);
        switch
    }

    pub fn model(&self) -> &Arc<BoolState> {
        &self.model
    }

    pub fn is_checked(&self) -> bool {
        self.model.get()
    }
}

widget_identity!(Switch);
leaf_attach!(Switch);

impl Render for Switch {
    fn render(&self) -> String {
        let checked = if self.model.get() { " checked" } else { "" };
        format!(
            concat!(
                r#"<div id="{tag}" style="{size}">"#,
                r#"<sl-switch style="{margin}"{checked}>{label}</sl-switch>"#,
                r#"<style>#{tag} sl-switch::part(base) {{{text}}}</style>"#,
                "</div>"
            ),
            tag = self.base.tag(),
            size = self.base.size_style(),
            margin = self.base.margin_style(),
            checked = checked,
            label = html_escape(&self.label),
            text = self.base.text_style(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use livetab_core::InboundEvent;

    #[test]
    fn test_checked_attribute_follows_model() {
        let ui = Ui::new();
        let switch = Switch::new(&ui, false, "Dark mode");
        assert!(!switch.render().contains(" checked"));

        switch.model().set(true);
        assert!(switch.render().contains(r#"<sl-switch style="margin: 0px;" checked>Dark mode</sl-switch>"#));
    }

    #[test]
    fn test_change_event_sets_checked() {
        let ui = Ui::new();
        let switch = Switch::new(&ui, false, "on");
        let id = switch.base.core().id();

        let on = InboundEvent::new(id, "sl-change").with_prop("checked", true);
        ui.router().publish(&on.routing_key(), &on);
        assert!(switch.is_checked());

        // Without a `checked` prop the switch flips.
        let bare = InboundEvent::new(id, "sl-change");
        ui.router().publish(&bare.routing_key(), &bare);
        assert!(!switch.is_checked());
    }
}
