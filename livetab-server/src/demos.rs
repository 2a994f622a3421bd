//! Small applications exercising the widget kit.

use std::sync::Arc;

use livetab_core::{IntState, TableModel, Ui};
use livetab_widgets::{
    Button, ButtonVariant, Color, DataTable, FontSize, Input, InputKind, Layout, Text, WidgetExt,
};
use tracing::debug;

/// A number with buttons to change it.
pub fn counter(ui: &Ui) -> Arc<Layout> {
    let count = IntState::new(0);
    let (inc, dec, reset) = (count.clone(), count.clone(), count.clone());

    let display = Text::new(ui, count)
        .font_size(FontSize::XXXX_LARGE)
        .fg_color(Color::PRIMARY);
    let buttons = Layout::row(
        ui,
        vec![
            Button::new(ui, "-").on_click(move |_| dec.decrement()).into_widget(),
            Button::new(ui, "Reset")
                .variant(ButtonVariant::Neutral)
                .on_click(move |_| reset.set(0))
                .into_widget(),
            Button::new(ui, "+")
                .variant(ButtonVariant::Primary)
                .on_click(move |_| inc.increment())
                .into_widget(),
        ],
    )
    .fixed_height(48);

    Layout::column(ui, vec![display.into_widget(), buttons.into_widget()])
}

/// A text field that appends rows to a table.
pub fn todo(ui: &Ui) -> Arc<Layout> {
    let items = TableModel::new(vec!["#".to_string(), "Todo".to_string()], Vec::new());
    let input = Input::new(ui, InputKind::Text, "What needs doing?");
    let field = input.model().clone();
    let rows = items.clone();

    let add = Button::new(ui, "Add")
        .variant(ButtonVariant::Primary)
        .on_click(move |_| {
            let value = field.value();
            if value.trim().is_empty() {
                debug!("ignoring empty todo");
                return;
            }
            let number = rows.row_count() + 1;
            rows.add_row(vec![number.to_string(), value]);
            field.set_value("");
        })
        .fixed_width(96);

    let entry = Layout::row(ui, vec![input.into_widget(), add.into_widget()]).fixed_height(48);
    let table = DataTable::new(ui, items).padding(4);

    Layout::column(ui, vec![entry.into_widget(), table.into_widget()])
}
