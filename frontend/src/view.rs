//! Signal-backed handles the controller renders into. Writing a signal
//! re-renders whatever component reads it.

use dioxus::prelude::*;
use event_list_core::{FilterToggles, TableRow, TableView, ToggleEmphasis};

#[derive(Clone, Copy, PartialEq)]
pub struct SignalTable {
    rows: Signal<Vec<TableRow>>,
}

impl SignalTable {
    pub fn new(rows: Signal<Vec<TableRow>>) -> Self {
        Self { rows }
    }
}

impl TableView for SignalTable {
    fn replace_rows(&self, rows: Vec<TableRow>) {
        let mut target = self.rows;
        target.set(rows);
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct SignalToggles {
    emphasis: Signal<ToggleEmphasis>,
}

impl SignalToggles {
    pub fn new(emphasis: Signal<ToggleEmphasis>) -> Self {
        Self { emphasis }
    }
}

impl FilterToggles for SignalToggles {
    fn set_emphasis(&self, emphasis: ToggleEmphasis) {
        let mut target = self.emphasis;
        target.set(emphasis);
    }
}
