//! Income/expense entries, running totals, and derived budget figures.

pub mod entry;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use entry::{Entry, EntryKind, ItemRef};
pub use ledger::{AggregateSnapshot, Ledger};
