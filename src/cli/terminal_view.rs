//! Line-oriented [`View`] that prints rows and totals to the terminal.

use crate::{
    cli::output,
    controller::View,
    currency::{format_minor_units, format_percentage, CurrencySettings},
    errors::LedgerError,
    ledger::{AggregateSnapshot, Entry, ItemRef},
};

pub struct TerminalView {
    currency: CurrencySettings,
    month_label: String,
}

impl TerminalView {
    pub fn new(currency: CurrencySettings) -> Self {
        Self {
            currency,
            month_label: String::new(),
        }
    }

    pub fn currency(&self) -> &CurrencySettings {
        &self.currency
    }

    pub fn set_currency(&mut self, currency: CurrencySettings) {
        self.currency = currency;
    }

    pub fn month_label(&self) -> &str {
        &self.month_label
    }
}

impl View for TerminalView {
    fn reset(&mut self, month_label: &str) {
        self.month_label = month_label.to_string();
        output::section(format!("Budget for {month_label}"));
    }

    fn add_list_item(&mut self, entry: &Entry) {
        output::success(format!("Added {}", render_row(entry, &self.currency)));
    }

    fn remove_list_item(&mut self, item: ItemRef) {
        output::success(format!("Removed {item}"));
    }

    fn update_percentages(&mut self, expenses: &[Entry]) {
        for entry in expenses {
            let share = entry.percentage().unwrap_or_default();
            output::row(format!(
                "{:<14} {:>5}",
                entry.item_ref().to_string(),
                format_percentage(share)
            ));
        }
    }

    fn display_totals(&mut self, totals: &AggregateSnapshot) {
        for line in render_totals(totals, &self.currency) {
            output::row(line);
        }
    }

    fn show_error(&mut self, error: &LedgerError) {
        output::error(error);
    }

    fn clear_input(&mut self) {}
}

/// One list row: row id, description, amount, and share for expenses.
pub fn render_row(entry: &Entry, currency: &CurrencySettings) -> String {
    let mut line = format!(
        "{:<14} {:<24} {:>14}",
        entry.item_ref().to_string(),
        entry.description(),
        format_minor_units(entry.value(), currency)
    );
    if let Some(share) = entry.percentage() {
        line.push_str(&format!(" {:>5}", format_percentage(share)));
    }
    line
}

pub fn render_totals(totals: &AggregateSnapshot, currency: &CurrencySettings) -> Vec<String> {
    vec![
        format!("Balance   {}", format_minor_units(totals.balance, currency)),
        format!(
            "Income    {}",
            format_minor_units(totals.total_income, currency)
        ),
        format!(
            "Expenses  {} ({})",
            format_minor_units(totals.total_expense, currency),
            format_percentage(totals.expense_percentage)
        ),
    ]
}
