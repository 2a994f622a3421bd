use std::sync::{Arc, OnceLock};

use livetab_core::{Attach, Render, SessionHandle, Ui};

use crate::base::{widget_identity, Styled, Widget, WidgetBase};

type Builder = Box<dyn Fn() -> Arc<dyn Widget> + Send + Sync>;

/// A subtree built on first use.
///
/// The builder runs at most once, the first time the component is attached
/// or rendered. The subtree is wrapped in a `display: contents` element so
/// it lays out as if it were the component's parent's direct child.
pub struct Component {
    base: WidgetBase,
    builder: Builder,
    tree: OnceLock<Arc<dyn Widget>>,
}

impl Component {
    pub fn new(ui: &Ui, builder: impl Fn() -> Arc<dyn Widget> + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            base: WidgetBase::new(ui),
            builder: Box::new(builder),
            tree: OnceLock::new(),
        })
    }

    pub fn tree(&self) -> &Arc<dyn Widget> {
        self.tree.get_or_init(|| (self.builder)())
    }

    pub fn is_built(&self) -> bool {
        self.tree.get().is_some()
    }
}

widget_identity!(Component);

impl Attach for Component {
    fn attach(&self, session: &SessionHandle) {
        self.base.core().attach(session);
        self.tree().attach(session);
    }

    fn detach(&self) {
        self.base.core().detach();
        if let Some(tree) = self.tree.get() {
            tree.detach();
        }
    }

    fn session(&self) -> Option<SessionHandle> {
        self.base.core().session()
    }
}

impl Render for Component {
    fn render(&self) -> String {
        let tree = self.tree();
        let size_style = self.base.size_style();
        if !size_style.is_empty() {
            tree.base().set_size_style(size_style);
        }
        format!(
            r#"<div id="{}" style="display: contents;">{}</div>"#,
            self.base.tag(),
            tree.render()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::base::WidgetExt;
    use crate::layout::Layout;
    use crate::text::Text;
    use livetab_core::{outbound_queue, StrState};

    #[test]
    fn test_builder_runs_once_and_lazily() {
        let ui = Ui::new();
        let builds = Arc::new(AtomicUsize::new(0));
        let b = builds.clone();
        let inner_ui = ui.clone();
        let component = Component::new(&ui, move || {
            b.fetch_add(1, Ordering::SeqCst);
            Text::new(&inner_ui, StrState::new("lazy")).into_widget()
        });
        assert!(!component.is_built());

        let first = component.render();
        let second = component.render();

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert_eq!(first, second);
        assert!(first.starts_with(r#"<div id="lt-1" style="display: contents;"><div id="lt-2""#));
    }

    #[test]
    fn test_detach_reaches_subtree() {
        let ui = Ui::new();
        let name = StrState::new("a");
        let inner_ui = ui.clone();
        let n = name.clone();
        let component = Component::new(&ui, move || Text::new(&inner_ui, n.clone()).into_widget());
        let (handle, mut rx) = outbound_queue();

        component.attach(&handle);
        assert!(component.tree().is_attached());
        name.set("b");
        assert!(rx.try_recv().is_ok());

        component.detach();
        name.set("c");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_size_style_forwarded_to_subtree() {
        let ui = Ui::new();
        let inner_ui = ui.clone();
        let component = Component::new(&ui, move || {
            Text::new(&inner_ui, StrState::new("x")).into_widget()
        })
        .fixed_width(80);
        let row = Layout::row(&ui, vec![component.clone().into_widget()]);

        assert!(row.render().contains("flex: 0 0 80px; height: 100%; width: 80px; display: table;"));
    }
}
