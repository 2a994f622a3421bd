//! Text entry widgets
//!
//! Both widgets copy the browser's value into their model on every change
//! event before any user handler runs, so handlers can read the model.

use std::sync::Arc;

use livetab_core::{observe, Interaction, Render, Ui};
use tracing::debug;

use crate::base::{html_escape, leaf_attach, widget_identity, WidgetBase};
use crate::models::{InputKind, InputModel, TextAreaModel};

/// Single-line input.
pub struct Input {
    base: WidgetBase,
    model: Arc<InputModel>,
}

impl Input {
    pub fn new(ui: &Ui, kind: InputKind, placeholder: impl Into<String>) -> Arc<Self> {
        Self::with_model(ui, InputModel::new(kind, placeholder))
    }

    pub fn with_model(ui: &Ui, model: Arc<InputModel>) -> Arc<Self> {
        let input = Arc::new(Self {
            base: WidgetBase::new(ui),
            model,
        });
        let m = input.model.clone();
        input.base.core().on(Interaction::Change, move |ev| match ev.prop_str("value") {
            Some(value) => m.set_value(value),
            None => debug!(node = %ev.target, "change event without a value"),
        });
        observe(&*input.model, &input);
        input
    }

    pub fn model(&self) -> &Arc<InputModel> {
        &self.model
    }

    pub fn value(&self) -> String {
        self.model.value()
    }
}

widget_identity!(Input);
leaf_attach!(Input);

impl Render for Input {
    fn render(&self) -> String {
        let field = self.model.snapshot();
        format!(
            concat!(
                r#"<div id="{tag}" style="{size}">"#,
                r#"<sl-input style="{margin}" type="{kind}" placeholder="{placeholder}" value="{value}" size="medium" clearable></sl-input>"#,
                r#"<style>#{tag} sl-input::part(base) {{--sl-input-height-medium: 100%; {text}}}</style>"#,
                "</div>"
            ),
            tag = self.base.tag(),
            size = self.base.size_style(),
            margin = self.base.margin_style(),
            kind = field.kind.as_str(),
            placeholder = html_escape(&field.placeholder),
            value = html_escape(&field.value),
            text = self.base.text_style(),
        )
    }
}

/// Multi-line input.
pub struct TextArea {
    base: WidgetBase,
    model: Arc<TextAreaModel>,
}

impl TextArea {
    pub fn new(ui: &Ui, placeholder: impl Into<String>) -> Arc<Self> {
        Self::with_model(ui, TextAreaModel::new(placeholder))
    }

    pub fn with_model(ui: &Ui, model: Arc<TextAreaModel>) -> Arc<Self> {
        let area = Arc::new(Self {
            base: WidgetBase::new(ui),
            model,
        });
        let m = area.model.clone();
        area.base.core().on(Interaction::Change, move |ev| {
            if let Some(value) = ev.prop_str("value") {
                m.set_value(value);
            }
        });
        observe(&*area.model, &area);
        area
    }

    pub fn model(&self) -> &Arc<TextAreaModel> {
        &self.model
    }

    pub fn value(&self) -> String {
        self.model.value()
    }
}

widget_identity!(TextArea);
leaf_attach!(TextArea);

impl Render for TextArea {
    fn render(&self) -> String {
        format!(
            concat!(
                r#"<div id="{tag}" style="{size}">"#,
                r#"<sl-textarea style="{margin} height: 100%;" placeholder="{placeholder}" value="{value}" size="medium" resize="none"></sl-textarea>"#,
                r#"<style>#{tag} sl-textarea::part(base) {{--sl-textarea-height-medium: 100%; {text}}}</style>"#,
                "</div>"
            ),
            tag = self.base.tag(),
            size = self.base.size_style(),
            margin = self.base.margin_style(),
            placeholder = html_escape(&self.model.placeholder()),
            value = html_escape(&self.model.value()),
            text = self.base.text_style(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::WidgetExt;
    use livetab_core::{InboundEvent, StrState};

    #[test]
    fn test_change_event_updates_model_before_user_handler() {
        let ui = Ui::new();
        let seen = StrState::new("");
        let model = InputModel::new(InputKind::Text, "name");
        let m = model.clone();
        let s = seen.clone();
        let input = Input::with_model(&ui, model).on_change(move |_| s.set(m.value()));

        let event = InboundEvent::new(input.base.core().id(), "sl-change").with_prop("value", "Ada");
        ui.router().publish(&event.routing_key(), &event);

        assert_eq!(input.value(), "Ada");
        assert_eq!(seen.get(), "Ada");
    }

    #[test]
    fn test_input_render_escapes_attributes() {
        let ui = Ui::new();
        let input = Input::new(&ui, InputKind::Password, "say \"hi\"");
        let markup = input.render();
        assert!(markup.starts_with(r#"<div id="lt-1""#));
        assert!(markup.contains(r#"type="password""#));
        assert!(markup.contains(r#"placeholder="say &quot;hi&quot;""#));
    }

    #[test]
    fn test_text_area_tracks_value() {
        let ui = Ui::new();
        let area = TextArea::new(&ui, "notes");
        let event = InboundEvent::new(area.base.core().id(), "sl-change").with_prop("value", "line 1\nline 2");
        ui.router().publish(&event.routing_key(), &event);

        assert_eq!(area.value(), "line 1\nline 2");
        assert!(area.render().contains("value=\"line 1\nline 2\""));
    }
}
