//! Models owned by individual widget kinds

use std::sync::Arc;

use livetab_core::{Model, Observable};
use parking_lot::RwLock;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub label: String,
    pub disabled: bool,
    pub loading: bool,
}

/// Label and enablement of a button.
#[derive(Debug, Default)]
pub struct ButtonModel {
    state: RwLock<ButtonState>,
    observers: Observable,
}

impl ButtonModel {
    pub fn new(label: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            state: RwLock::new(ButtonState {
                label: label.into(),
                ..ButtonState::default()
            }),
            observers: Observable::new(),
        })
    }

    pub fn snapshot(&self) -> ButtonState {
        self.state.read().clone()
    }

    pub fn label(&self) -> String {
        self.state.read().label.clone()
    }

    pub fn is_disabled(&self) -> bool {
        self.state.read().disabled
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.update(|s| s.label = label.into());
    }

    pub fn disable(&self) {
        self.update(|s| s.disabled = true);
    }

    pub fn enable(&self) {
        self.update(|s| s.disabled = false);
    }

    pub fn set_loading(&self, loading: bool) {
        self.update(|s| s.loading = loading);
    }

    fn update(&self, f: impl FnOnce(&mut ButtonState)) {
        f(&mut self.state.write());
        self.notify();
    }
}

impl Model for ButtonModel {
    fn observers(&self) -> &Observable {
        &self.observers
    }
}

/// The `type` attribute of a single-line input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Date,
    Email,
    Number,
    Password,
    Search,
    Tel,
    Url,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Date => "date",
            InputKind::Email => "email",
            InputKind::Number => "number",
            InputKind::Password => "password",
            InputKind::Search => "search",
            InputKind::Tel => "tel",
            InputKind::Url => "url",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldState {
    pub kind: InputKind,
    pub placeholder: String,
    pub value: String,
}

/// State of a single-line input. The widget keeps `value` in sync with
/// the browser on every change event.
#[derive(Debug, Default)]
pub struct InputModel {
    state: RwLock<FieldState>,
    observers: Observable,
}

impl InputModel {
    pub fn new(kind: InputKind, placeholder: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            state: RwLock::new(FieldState {
                kind,
                placeholder: placeholder.into(),
                value: String::new(),
            }),
            observers: Observable::new(),
        })
    }

    pub fn snapshot(&self) -> FieldState {
        self.state.read().clone()
    }

    pub fn kind(&self) -> InputKind {
        self.state.read().kind
    }

    pub fn set_kind(&self, kind: InputKind) {
        self.state.write().kind = kind;
        self.notify();
    }

    pub fn placeholder(&self) -> String {
        self.state.read().placeholder.clone()
    }

    pub fn set_placeholder(&self, placeholder: impl Into<String>) {
        self.state.write().placeholder = placeholder.into();
        self.notify();
    }

    pub fn value(&self) -> String {
        self.state.read().value.clone()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        self.state.write().value = value.into();
        self.notify();
    }
}

impl Model for InputModel {
    fn observers(&self) -> &Observable {
        &self.observers
    }
}

/// State of a multi-line text area.
#[derive(Debug, Default)]
pub struct TextAreaModel {
    placeholder: RwLock<String>,
    value: RwLock<String>,
    observers: Observable,
}

impl TextAreaModel {
    pub fn new(placeholder: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            placeholder: RwLock::new(placeholder.into()),
            value: RwLock::new(String::new()),
            observers: Observable::new(),
        })
    }

    pub fn placeholder(&self) -> String {
        self.placeholder.read().clone()
    }

    pub fn set_placeholder(&self, placeholder: impl Into<String>) {
        *self.placeholder.write() = placeholder.into();
        self.notify();
    }

    pub fn value(&self) -> String {
        self.value.read().clone()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        *self.value.write() = value.into();
        self.notify();
    }
}

impl Model for TextAreaModel {
    fn observers(&self) -> &Observable {
        &self.observers
    }
}
