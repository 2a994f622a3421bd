//! livetab widgets - Shoelace-backed UI building blocks
//!
//! Every widget is created behind an `Arc`, renders a single root element
//! whose `id` is its node tag, and re-renders itself when its model changes.
//!
//! ```ignore
//! let ui = Ui::new();
//! let count = IntState::new(0);
//! let c = count.clone();
//! let root = Layout::row(&ui, vec![
//!     Text::new(&ui, count.clone()).into_widget(),
//!     Button::new(&ui, "+").on_click(move |_| c.increment()).into_widget(),
//! ]);
//! ```

mod base;
pub mod button;
pub mod component;
pub mod input;
pub mod layout;
pub mod models;
pub mod spacer;
pub mod style;
pub mod switch;
pub mod table;
pub mod text;

pub use base::{for_each, Styled, Widget, WidgetBase, WidgetExt};
pub use button::{Button, ButtonShape, ButtonVariant};
pub use component::Component;
pub use input::{Input, TextArea};
pub use layout::Layout;
pub use models::{ButtonModel, ButtonState, FieldState, InputKind, InputModel, TextAreaModel};
pub use spacer::{Divider, Spacer};
pub use style::{Color, Direction, FontSize, Size, SizePolicy, Style, TextAlign, TextStyle, VerticalAlign};
pub use switch::Switch;
pub use table::DataTable;
pub use text::Text;

/// Version of the Shoelace component library the widgets render for.
pub const SHOELACE_VERSION: &str = "2.15.0";

/// Elements to place in the page `<head>` so the widgets' custom elements
/// and design tokens are available.
pub const HEAD_ELEMENTS: &str = r#"<link rel="stylesheet" media="(prefers-color-scheme:light)" href="https://cdn.jsdelivr.net/npm/@shoelace-style/shoelace@2.15.0/cdn/themes/light.css">
<link rel="stylesheet" media="(prefers-color-scheme:dark)" href="https://cdn.jsdelivr.net/npm/@shoelace-style/shoelace@2.15.0/cdn/themes/dark.css" onload="document.documentElement.classList.add('sl-theme-dark');">
<script type="module" src="https://cdn.jsdelivr.net/npm/@shoelace-style/shoelace@2.15.0/cdn/shoelace-autoloader.js"></script>"#;
