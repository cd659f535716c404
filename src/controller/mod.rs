//! Coordinating layer between raw form input, the [`Ledger`], and a [`View`].

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::{
    currency::format_budget_month,
    errors::{LedgerError, Result},
    ledger::{AggregateSnapshot, Entry, EntryKind, ItemRef, Ledger},
};

/// Input triple as captured by a form: type tag, description, amount text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    pub kind_tag: String,
    pub description: String,
    pub amount: String,
}

impl RawInput {
    pub fn new(
        kind_tag: impl Into<String>,
        description: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            kind_tag: kind_tag.into(),
            description: description.into(),
            amount: amount.into(),
        }
    }
}

/// Rendering surface driven by [`BudgetController`].
pub trait View {
    /// Clears lists and totals and shows the budget month.
    fn reset(&mut self, month_label: &str);
    fn add_list_item(&mut self, entry: &Entry);
    fn remove_list_item(&mut self, item: ItemRef);
    /// Redraws the share shown next to each expense row.
    fn update_percentages(&mut self, expenses: &[Entry]);
    fn display_totals(&mut self, totals: &AggregateSnapshot);
    fn show_error(&mut self, error: &LedgerError);
    fn clear_input(&mut self);
}

pub struct BudgetController<V: View> {
    ledger: Ledger,
    view: V,
}

impl<V: View> BudgetController<V> {
    pub fn new(view: V) -> Self {
        Self::with_ledger(Ledger::new(), view)
    }

    pub fn with_ledger(ledger: Ledger, view: V) -> Self {
        Self { ledger, view }
    }

    pub fn init(&mut self, today: NaiveDate) {
        let month = format_budget_month(today);
        info!(%month, "budget session started");
        self.view.reset(&month);
        self.view.display_totals(&self.ledger.snapshot());
    }

    /// Validates and records a new line item, then pushes the changes to the view.
    pub fn add_item(&mut self, input: &RawInput) -> Result<Entry> {
        let description = input.description.trim();
        if description.is_empty() {
            return Err(LedgerError::EmptyInput("description"));
        }
        if input.amount.trim().is_empty() {
            return Err(LedgerError::EmptyInput("amount"));
        }
        let kind: EntryKind = input.kind_tag.parse()?;

        let entry = match self.ledger.add_entry(kind, description, &input.amount) {
            Ok(entry) => entry,
            Err(err) => {
                self.view.show_error(&err);
                return Err(err);
            }
        };

        self.view.add_list_item(&entry);
        if kind == EntryKind::Expense {
            self.view.update_percentages(self.ledger.list_expenses());
        }
        self.refresh_totals();
        debug!(item = %entry.item_ref(), "item added");
        Ok(entry)
    }

    pub fn delete_item(&mut self, item: ItemRef) -> Result<AggregateSnapshot> {
        let snapshot = match self.ledger.remove_entry(item.kind, item.id) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                self.view.show_error(&err);
                return Err(err);
            }
        };

        self.view.remove_list_item(item);
        if item.kind == EntryKind::Expense {
            self.view.update_percentages(self.ledger.list_expenses());
        }
        self.view.clear_input();
        self.view.display_totals(&snapshot);
        debug!(%item, "item deleted");
        Ok(snapshot)
    }

    /// Deletes by row id (`income-3`, `expense-2`).
    pub fn delete_row(&mut self, row_id: &str) -> Result<AggregateSnapshot> {
        let item: ItemRef = row_id.parse()?;
        self.delete_item(item)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_parts(self) -> (Ledger, V) {
        (self.ledger, self.view)
    }

    fn refresh_totals(&mut self) {
        self.view.clear_input();
        self.view.display_totals(&self.ledger.snapshot());
    }
}
