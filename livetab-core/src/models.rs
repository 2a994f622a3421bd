//! Concrete state models
//!
//! Each mutation applies its change under the model's lock, releases the
//! lock, and only then notifies, so subscribers can read the new state.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::observable::{Model, Observable};

/// A model that can be displayed as, and updated from, a string.
pub trait TextSource: Model {
    fn text(&self) -> String;
    fn set_text(&self, value: &str);
}

/// Shared string state.
#[derive(Debug, Default)]
pub struct StrState {
    value: RwLock<String>,
    observers: Observable,
}

impl StrState {
    pub fn new(value: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            value: RwLock::new(value.into()),
            observers: Observable::new(),
        })
    }

    pub fn get(&self) -> String {
        self.value.read().clone()
    }

    pub fn set(&self, value: impl Into<String>) {
        *self.value.write() = value.into();
        self.notify();
    }
}

impl Model for StrState {
    fn observers(&self) -> &Observable {
        &self.observers
    }
}

impl TextSource for StrState {
    fn text(&self) -> String {
        self.get()
    }

    fn set_text(&self, value: &str) {
        self.set(value);
    }
}

/// Shared integer state with arithmetic helpers.
#[derive(Debug, Default)]
pub struct IntState {
    value: RwLock<i64>,
    observers: Observable,
}

impl IntState {
    pub fn new(value: i64) -> Arc<Self> {
        Arc::new(Self {
            value: RwLock::new(value),
            observers: Observable::new(),
        })
    }

    pub fn get(&self) -> i64 {
        *self.value.read()
    }

    pub fn set(&self, value: i64) {
        *self.value.write() = value;
        self.notify();
    }

    pub fn increment(&self) {
        self.add(1);
    }

    pub fn decrement(&self) {
        self.sub(1);
    }

    pub fn add(&self, n: i64) {
        self.apply(|v| v.wrapping_add(n));
    }

    pub fn sub(&self, n: i64) {
        self.apply(|v| v.wrapping_sub(n));
    }

    pub fn mul(&self, n: i64) {
        self.apply(|v| v.wrapping_mul(n));
    }

    /// Integer division. Dividing by zero is ignored: the value stays put
    /// and subscribers are not notified.
    pub fn div(&self, n: i64) {
        if n == 0 {
            tracing::debug!("ignoring division by zero");
            return;
        }
        self.apply(|v| v.wrapping_div(n));
    }

    /// Parse and store; unparsable input stores `0`.
    pub fn set_from_str(&self, value: &str) {
        self.set(value.trim().parse().unwrap_or(0));
    }

    fn apply(&self, f: impl FnOnce(i64) -> i64) {
        {
            let mut value = self.value.write();
            *value = f(*value);
        }
        self.notify();
    }
}

impl Model for IntState {
    fn observers(&self) -> &Observable {
        &self.observers
    }
}

impl TextSource for IntState {
    fn text(&self) -> String {
        self.get().to_string()
    }

    fn set_text(&self, value: &str) {
        self.set_from_str(value);
    }
}

/// Shared flag.
#[derive(Debug, Default)]
pub struct BoolState {
    value: RwLock<bool>,
    observers: Observable,
}

impl BoolState {
    pub fn new(value: bool) -> Arc<Self> {
        Arc::new(Self {
            value: RwLock::new(value),
            observers: Observable::new(),
        })
    }

    pub fn get(&self) -> bool {
        *self.value.read()
    }

    pub fn set(&self, value: bool) {
        *self.value.write() = value;
        self.notify();
    }

    pub fn toggle(&self) {
        {
            let mut value = self.value.write();
            *value = !*value;
        }
        self.notify();
    }
}

impl Model for BoolState {
    fn observers(&self) -> &Observable {
        &self.observers
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TableData {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Tabular state: one header row plus data rows.
#[derive(Debug, Default)]
pub struct TableModel {
    data: RwLock<TableData>,
    observers: Observable,
}

impl TableModel {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Arc<Self> {
        Arc::new(Self {
            data: RwLock::new(TableData { header, rows }),
            observers: Observable::new(),
        })
    }

    pub fn header(&self) -> Vec<String> {
        self.data.read().header.clone()
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.data.read().rows.clone()
    }

    pub fn row_count(&self) -> usize {
        self.data.read().rows.len()
    }

    pub fn set_header(&self, header: Vec<String>) {
        self.data.write().header = header;
        self.notify();
    }

    pub fn set_rows(&self, rows: Vec<Vec<String>>) {
        self.data.write().rows = rows;
        self.notify();
    }

    pub fn add_row(&self, row: Vec<String>) {
        self.data.write().rows.push(row);
        self.notify();
    }
}

impl Model for TableModel {
    fn observers(&self) -> &Observable {
        &self.observers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_subscribers_see_post_mutation_state() {
        let state = StrState::new("before");
        let seen = Arc::new(Mutex::new(Vec::new()));
        for _ in 0..2 {
            let s = state.clone();
            let seen = seen.clone();
            state.observers().add_subscriber(move || seen.lock().push(s.get()));
        }

        state.set("after");
        assert_eq!(*seen.lock(), vec!["after".to_string(), "after".to_string()]);
    }

    #[test]
    fn test_each_mutation_notifies_once() {
        let state = IntState::new(10);
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        state.observers().add_subscriber(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });

        state.increment();
        state.decrement();
        state.add(5);
        state.sub(3);
        state.mul(4);
        state.div(2);
        assert_eq!(state.get(), 24);
        assert_eq!(count.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn test_div_by_zero_is_ignored() {
        let state = IntState::new(7);
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        state.observers().add_subscriber(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });

        state.div(0);
        assert_eq!(state.get(), 7);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_int_from_str() {
        let state = IntState::new(1);
        state.set_text(" 42 ");
        assert_eq!(state.get(), 42);
        state.set_text("forty-two");
        assert_eq!(state.get(), 0);
        assert_eq!(state.text(), "0");
    }

    #[test]
    fn test_bool_toggle() {
        let flag = BoolState::new(false);
        flag.toggle();
        assert!(flag.get());
        flag.set(false);
        assert!(!flag.get());
    }

    #[test]
    fn test_table_add_row() {
        let table = TableModel::new(vec!["name".into()], vec![]);
        let rows_seen = Arc::new(Mutex::new(Vec::new()));
        let t = table.clone();
        let r = rows_seen.clone();
        table.observers().add_subscriber(move || r.lock().push(t.row_count()));

        table.add_row(vec!["a".into()]);
        table.add_row(vec!["b".into()]);
        assert_eq!(*rows_seen.lock(), vec![1, 2]);
        assert_eq!(table.rows(), vec![vec!["a".to_string()], vec!["b".to_string()]]);
    }
}
