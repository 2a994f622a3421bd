use std::sync::Arc;

use livetab_core::{observe, refresh, Render, Ui};
use parking_lot::RwLock;

use crate::base::{html_escape, leaf_attach, widget_identity, WidgetBase};
use crate::models::ButtonModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Primary,
    Success,
    Neutral,
    Warning,
    Danger,
}

impl ButtonVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Default => "default",
            ButtonVariant::Primary => "primary",
            ButtonVariant::Success => "success",
            ButtonVariant::Neutral => "neutral",
            ButtonVariant::Warning => "warning",
            ButtonVariant::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonShape {
    #[default]
    Default,
    Outline,
    Pill,
    Circle,
}

impl ButtonShape {
    /// Boolean attribute for this shape, if any.
    fn attribute(self) -> Option<&'static str> {
        match self {
            ButtonShape::Default => None,
            ButtonShape::Outline => Some("outline"),
            ButtonShape::Pill => Some("pill"),
            ButtonShape::Circle => Some("circle"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct ButtonOptions {
    variant: ButtonVariant,
    shape: ButtonShape,
}

pub struct Button {
    base: WidgetBase,
    model: Arc<ButtonModel>,
    options: RwLock<ButtonOptions>,
}

impl Button {
    pub fn new(ui: &Ui, label: impl Into<String>) -> Arc<Self> {
        Self::with_model(ui, ButtonModel::new(label))
    }

    pub fn with_model(ui: &Ui, model: Arc<ButtonModel>) -> Arc<Self> {
        let button = Arc::new(Self {
            base: WidgetBase::new(ui),
            model,
            options: RwLock::new(ButtonOptions::default()),
        });
        observe(&*button.model, &button);
        button
    }

    pub fn model(&self) -> &Arc<ButtonModel> {
        &self.model
    }

    pub fn variant(self: Arc<Self>, variant: ButtonVariant) -> Arc<Self> {
        self.options.write().variant = variant;
        refresh(&*self);
        self
    }

    pub fn shape(self: Arc<Self>, shape: ButtonShape) -> Arc<Self> {
        self.options.write().shape = shape;
        refresh(&*self);
        self
    }

    pub fn label(&self) -> String {
        self.model.label()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.model.set_label(label);
    }

    pub fn disable(&self) {
        self.model.disable();
    }

    pub fn enable(&self) {
        self.model.enable();
    }
}

widget_identity!(Button);
leaf_attach!(Button);

impl Render for Button {
    fn render(&self) -> String {
        let tag = self.base.tag();
        let state = self.model.snapshot();
        let options = *self.options.read();

        let mut attrs = format!(r#"variant="{}""#, options.variant.as_str());
        if let Some(shape) = options.shape.attribute() {
            attrs.push(' ');
            attrs.push_str(shape);
        }
        if state.disabled {
            attrs.push_str(" disabled");
        }
        if state.loading {
            attrs.push_str(" loading");
        }

        format!(
            concat!(
                r#"<div id="{tag}" style="{size}">"#,
                r#"<sl-button class="btn" {attrs} style="{margin} width: 100%; height: 100%;" size="medium">{label}</sl-button>"#,
                r#"<style>#{tag} sl-button::part(base) {{--sl-input-height-medium: 100%; {text}}}</style>"#,
                "</div>"
            ),
            tag = tag,
            size = self.base.size_style(),
            attrs = attrs,
            margin = self.base.margin_style(),
            label = html_escape(&state.label),
            text = self.base.text_style(),
        )
    }
}
