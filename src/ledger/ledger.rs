use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::entry::{Entry, EntryKind};
use crate::currency::parse_amount;
use crate::errors::{LedgerError, Result};

/// Aggregate figures handed to a view after every mutation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AggregateSnapshot {
    pub total_income: i64,
    pub total_expense: i64,
    pub balance: i64,
    pub expense_percentage: u32,
}

/// Owns the income and expense collections and their running totals.
///
/// `total_income` and `total_expense` always equal the sum of the values in
/// the matching collection. Entry ids are allocated per collection from a
/// high-water mark, so an id is never handed out twice.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    income: Vec<Entry>,
    expenses: Vec<Entry>,
    total_income: i64,
    total_expense: i64,
    last_income_id: u64,
    last_expense_id: u64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `amount_text`, then appends a new entry and updates totals.
    ///
    /// On error nothing is mutated.
    pub fn add_entry(
        &mut self,
        kind: EntryKind,
        description: impl Into<String>,
        amount_text: &str,
    ) -> Result<Entry> {
        let value = parse_amount(amount_text).inspect_err(|err| {
            warn!(%kind, error = %err, "rejected amount");
        })?;
        let new_total = self
            .total(kind)
            .checked_add(value)
            .ok_or_else(|| LedgerError::InvalidAmount(amount_text.trim().to_string()))?;

        let id = self.next_id(kind);
        let mut entry = Entry::new(id, kind, description.into(), value);
        match kind {
            EntryKind::Income => {
                self.total_income = new_total;
                self.last_income_id = id;
                self.income.push(entry.clone());
            }
            EntryKind::Expense => {
                self.total_expense = new_total;
                self.last_expense_id = id;
                entry.set_percentage(percentage_of(value, new_total));
                self.expenses.push(entry.clone());
                self.recompute_expense_percentages();
            }
        }

        debug!(%kind, id, value, "entry added");
        self.debug_check_totals();
        Ok(entry)
    }

    /// Removes the entry `id` from the `kind` collection.
    pub fn remove_entry(&mut self, kind: EntryKind, id: u64) -> Result<AggregateSnapshot> {
        let entries = match kind {
            EntryKind::Income => &mut self.income,
            EntryKind::Expense => &mut self.expenses,
        };
        let Some(position) = entries.iter().position(|entry| entry.id() == id) else {
            warn!(%kind, id, "remove requested for unknown entry");
            return Err(LedgerError::NotFound { kind, id });
        };
        let removed = entries.remove(position);

        match kind {
            EntryKind::Income => self.total_income -= removed.value(),
            EntryKind::Expense => {
                self.total_expense -= removed.value();
                self.recompute_expense_percentages();
            }
        }

        debug!(%kind, id, value = removed.value(), "entry removed");
        self.debug_check_totals();
        Ok(self.snapshot())
    }

    /// Sets each expense's share of total expense. Idempotent.
    pub fn recompute_expense_percentages(&mut self) {
        let total = self.total_expense;
        for entry in &mut self.expenses {
            entry.set_percentage(percentage_of(entry.value(), total));
        }
    }

    pub fn snapshot(&self) -> AggregateSnapshot {
        AggregateSnapshot {
            total_income: self.total_income,
            total_expense: self.total_expense,
            balance: self.balance(),
            expense_percentage: self.expense_percentage(),
        }
    }

    pub fn list_income(&self) -> &[Entry] {
        &self.income
    }

    pub fn list_expenses(&self) -> &[Entry] {
        &self.expenses
    }

    pub fn entries(&self, kind: EntryKind) -> &[Entry] {
        match kind {
            EntryKind::Income => &self.income,
            EntryKind::Expense => &self.expenses,
        }
    }

    pub fn entry(&self, kind: EntryKind, id: u64) -> Option<&Entry> {
        self.entries(kind).iter().find(|entry| entry.id() == id)
    }

    pub fn total(&self, kind: EntryKind) -> i64 {
        match kind {
            EntryKind::Income => self.total_income,
            EntryKind::Expense => self.total_expense,
        }
    }

    pub fn balance(&self) -> i64 {
        self.total_income - self.total_expense
    }

    /// Total expense as a rounded share of total income, `0` without income.
    pub fn expense_percentage(&self) -> u32 {
        percentage_of(self.total_expense, self.total_income)
    }

    pub fn len(&self) -> usize {
        self.income.len() + self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty()
    }

    /// Sums both collections from scratch as `(income, expense)`.
    pub fn recalculated_totals(&self) -> (i64, i64) {
        let sum = |entries: &[Entry]| entries.iter().map(Entry::value).sum::<i64>();
        (sum(&self.income), sum(&self.expenses))
    }

    fn next_id(&self, kind: EntryKind) -> u64 {
        match kind {
            EntryKind::Income => self.last_income_id + 1,
            EntryKind::Expense => self.last_expense_id + 1,
        }
    }

    fn debug_check_totals(&self) {
        debug_assert_eq!(
            self.recalculated_totals(),
            (self.total_income, self.total_expense),
            "running totals drifted from entries"
        );
    }
}

/// `part / whole * 100` rounded half up; `0` when `whole` is not positive.
pub(crate) fn percentage_of(part: i64, whole: i64) -> u32 {
    if whole <= 0 {
        return 0;
    }
    let part = i128::from(part.max(0));
    let whole = i128::from(whole);
    let rounded = (part * 100 + whole / 2) / whole;
    u32::try_from(rounded).unwrap_or(u32::MAX)
}
