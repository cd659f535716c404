#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use budget_tracker::{
    controller::View,
    errors::LedgerError,
    ledger::{AggregateSnapshot, Entry, ItemRef},
};

/// Every call a [`View`] received, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Reset(String),
    Added(Entry),
    Removed(ItemRef),
    Percentages(Vec<(u64, Option<u32>)>),
    Totals(AggregateSnapshot),
    Error(LedgerError),
    ClearInput,
}

#[derive(Debug, Default)]
pub struct RecordingView {
    pub events: Vec<ViewEvent>,
}

impl RecordingView {
    pub fn take(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.events)
    }
}

impl View for RecordingView {
    fn reset(&mut self, month_label: &str) {
        self.events.push(ViewEvent::Reset(month_label.to_string()));
    }

    fn add_list_item(&mut self, entry: &Entry) {
        self.events.push(ViewEvent::Added(entry.clone()));
    }

    fn remove_list_item(&mut self, item: ItemRef) {
        self.events.push(ViewEvent::Removed(item));
    }

    fn update_percentages(&mut self, expenses: &[Entry]) {
        self.events.push(ViewEvent::Percentages(
            expenses
                .iter()
                .map(|entry| (entry.id(), entry.percentage()))
                .collect(),
        ));
    }

    fn display_totals(&mut self, totals: &AggregateSnapshot) {
        self.events.push(ViewEvent::Totals(*totals));
    }

    fn show_error(&mut self, error: &LedgerError) {
        self.events.push(ViewEvent::Error(error.clone()));
    }

    fn clear_input(&mut self) {
        self.events.push(ViewEvent::ClearInput);
    }
}

/// The CLI binary in script mode with its config rooted at `home`.
pub fn script_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("budget_tracker_cli").expect("binary builds");
    cmd.env("BUDGET_TRACKER_CLI_SCRIPT", "1")
        .env("BUDGET_TRACKER_HOME", home)
        .env_remove("RUST_LOG");
    cmd
}
