use std::fmt::Write as _;
use std::sync::Arc;

use livetab_core::{observe, Render, TableModel, Ui};

use crate::base::{html_escape, leaf_attach, widget_identity, WidgetBase};

/// A read-only table over a [`TableModel`].
pub struct DataTable {
    base: WidgetBase,
    model: Arc<TableModel>,
}

impl DataTable {
    pub fn new(ui: &Ui, model: Arc<TableModel>) -> Arc<Self> {
        let table = Arc::new(Self {
            base: WidgetBase::new(ui),
            model,
        });
        observe(&*table.model, &table);
        table
    }

    pub fn model(&self) -> &Arc<TableModel> {
        &self.model
    }

    fn body(&self) -> String {
        let mut html = String::from("<thead><tr>");
        for label in self.model.header() {
            let _ = write!(html, "<th>{}</th>", html_escape(&label));
        }
        html.push_str("</tr></thead><tbody>");
        for row in self.model.rows() {
            html.push_str("<tr>");
            for cell in row {
                let _ = write!(html, "<td>{}</td>", html_escape(&cell));
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody>");
        html
    }
}

widget_identity!(DataTable);
leaf_attach!(DataTable);

impl Render for DataTable {
    fn render(&self) -> String {
        format!(
            r#"<div id="{}" style="{} {} width: auto; height: auto;"><table style="{} width: 100%; height: 100%;">{}</table></div>"#,
            self.base.tag(),
            self.base.margin_style(),
            self.base.size_style(),
            self.base.text_style(),
            self.body(),
        )
    }
}
