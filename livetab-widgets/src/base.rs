//! Common widget plumbing: the base every widget embeds and the builder API

use std::sync::Arc;

use livetab_core::{refresh, InboundEvent, Interaction, Node, NodeCore, Ui};
use parking_lot::RwLock;

use crate::style::{Color, FontSize, Size, SizePolicy, Style, TextAlign, TextStyle, VerticalAlign};

/// Identity, attachment slot and style of one widget.
#[derive(Debug)]
pub struct WidgetBase {
    core: NodeCore,
    style: RwLock<Style>,
}

impl WidgetBase {
    pub fn new(ui: &Ui) -> Self {
        Self {
            core: NodeCore::new(ui),
            style: RwLock::new(Style::default()),
        }
    }

    pub fn core(&self) -> &NodeCore {
        &self.core
    }

    pub fn tag(&self) -> String {
        self.core.tag()
    }

    pub fn style(&self) -> Style {
        self.style.read().clone()
    }

    pub fn size(&self) -> Size {
        self.style.read().size
    }

    pub fn size_style(&self) -> String {
        self.style.read().size_style.clone()
    }

    pub fn set_size_style(&self, value: String) {
        self.style.write().size_style = value;
    }

    pub fn text_style(&self) -> TextStyle {
        self.style.read().text.clone()
    }

    pub fn margin_style(&self) -> String {
        self.style.read().margin_style()
    }

    pub fn update_style(&self, f: impl FnOnce(&mut Style)) {
        f(&mut self.style.write());
    }
}

/// Access to a widget's [`WidgetBase`].
pub trait Styled {
    fn base(&self) -> &WidgetBase;
}

/// A node that can be placed in a layout.
pub trait Widget: Node + Styled {}

impl<T> Widget for T where T: Node + Styled + ?Sized {}

/// Builder methods available on every concrete widget.
///
/// Each returns the same `Arc` so calls chain off a constructor:
///
/// ```ignore
/// let title = Text::new(&ui, name).font_size(FontSize::LARGE).padding(8);
/// ```
///
/// Style changes re-render an attached widget. Size changes take effect
/// the next time the parent layout renders.
pub trait WidgetExt: Widget + Sized + 'static {
    fn into_widget(self: Arc<Self>) -> Arc<dyn Widget> {
        self
    }

    fn restyle(self: Arc<Self>, f: impl FnOnce(&mut Style)) -> Arc<Self> {
        self.base().update_style(f);
        refresh(&*self);
        self
    }

    fn size_policy(self: Arc<Self>, policy: SizePolicy) -> Arc<Self> {
        self.restyle(|s| s.size.policy = policy)
    }

    fn fixed_size(self: Arc<Self>, width: u32, height: u32) -> Arc<Self> {
        self.restyle(|s| {
            s.size = Size {
                policy: SizePolicy::Fixed,
                width,
                height,
            }
        })
    }

    fn fixed_width(self: Arc<Self>, width: u32) -> Arc<Self> {
        self.restyle(|s| {
            s.size.policy = SizePolicy::FixedWidth;
            s.size.width = width;
        })
    }

    /// Width as a percentage of the parent.
    fn fixed_ratio_width(self: Arc<Self>, percent: u32) -> Arc<Self> {
        self.restyle(|s| {
            s.size.policy = SizePolicy::FixedRatioWidth;
            s.size.width = percent;
        })
    }

    fn fixed_height(self: Arc<Self>, height: u32) -> Arc<Self> {
        self.restyle(|s| {
            s.size.policy = SizePolicy::FixedHeight;
            s.size.height = height;
        })
    }

    /// Height as a percentage of the parent.
    fn fixed_ratio_height(self: Arc<Self>, percent: u32) -> Arc<Self> {
        self.restyle(|s| {
            s.size.policy = SizePolicy::FixedRatioHeight;
            s.size.height = percent;
        })
    }

    fn text_style(self: Arc<Self>, style: TextStyle) -> Arc<Self> {
        self.restyle(|s| s.text = style)
    }

    fn align(self: Arc<Self>, align: TextAlign) -> Arc<Self> {
        self.restyle(|s| s.text.align = align)
    }

    fn vertical_align(self: Arc<Self>, align: VerticalAlign) -> Arc<Self> {
        self.restyle(|s| s.text.vertical_align = align)
    }

    fn fg_color(self: Arc<Self>, color: Color) -> Arc<Self> {
        self.restyle(|s| s.text.fg = Some(color))
    }

    fn bg_color(self: Arc<Self>, color: Color) -> Arc<Self> {
        self.restyle(|s| s.text.bg = Some(color))
    }

    fn border_color(self: Arc<Self>, color: Color) -> Arc<Self> {
        self.restyle(|s| s.text.border = Some(color))
    }

    fn border_radius(self: Arc<Self>, px: u32) -> Arc<Self> {
        self.restyle(|s| s.text.border_radius = px)
    }

    fn font_size(self: Arc<Self>, size: FontSize) -> Arc<Self> {
        self.restyle(|s| s.text.font_size = Some(size))
    }

    fn padding(self: Arc<Self>, px: u32) -> Arc<Self> {
        self.restyle(|s| s.text.padding = px)
    }

    fn margin(self: Arc<Self>, px: u32) -> Arc<Self> {
        self.restyle(|s| s.margin = px)
    }

    fn on_click(self: Arc<Self>, handler: impl Fn(&InboundEvent) + Send + Sync + 'static) -> Arc<Self> {
        self.base().core().on(Interaction::Click, handler);
        self
    }

    fn on_change(self: Arc<Self>, handler: impl Fn(&InboundEvent) + Send + Sync + 'static) -> Arc<Self> {
        self.base().core().on(Interaction::Change, handler);
        self
    }
}

impl<T> WidgetExt for T where T: Widget + Sized + 'static {}

/// Build one widget per item.
pub fn for_each<I, F>(items: I, build: F) -> Vec<Arc<dyn Widget>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Arc<dyn Widget>,
{
    items.into_iter().map(build).collect()
}

pub(crate) fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// `Identity` and `Styled` for a widget with a `base: WidgetBase` field.
macro_rules! widget_identity {
    ($ty:ty) => {
        impl livetab_core::Identity for $ty {
            fn id(&self) -> livetab_core::NodeId {
                self.base.core().id()
            }
        }

        impl $crate::base::Styled for $ty {
            fn base(&self) -> &$crate::base::WidgetBase {
                &self.base
            }
        }
    };
}

/// `Attach` for a widget with no children.
macro_rules! leaf_attach {
    ($ty:ty) => {
        impl livetab_core::Attach for $ty {
            fn attach(&self, session: &livetab_core::SessionHandle) {
                self.base.core().attach(session);
            }

            fn detach(&self) {
                self.base.core().detach();
            }

            fn session(&self) -> Option<livetab_core::SessionHandle> {
                self.base.core().session()
            }
        }
    };
}

pub(crate) use leaf_attach;
pub(crate) use widget_identity;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_base_defaults() {
        let ui = Ui::new();
        let base = WidgetBase::new(&ui);
        assert_eq!(base.size().policy, SizePolicy::Expanding);
        assert_eq!(base.size_style(), "");
        assert_eq!(base.margin_style(), "margin: 0px;");
    }
}
