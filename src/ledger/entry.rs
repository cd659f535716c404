use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Which collection an entry belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }

    pub fn short_tag(self) -> &'static str {
        match self {
            EntryKind::Income => "inc",
            EntryKind::Expense => "exp",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "inc" | "income" | "+" => Ok(EntryKind::Income),
            "exp" | "expense" | "-" => Ok(EntryKind::Expense),
            _ => Err(LedgerError::InvalidKind(value.trim().to_string())),
        }
    }
}

/// One income or expense line item. Only a [`Ledger`](super::Ledger) creates entries.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Entry {
    id: u64,
    kind: EntryKind,
    description: String,
    value: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    percentage: Option<u32>,
}

impl Entry {
    pub(crate) fn new(id: u64, kind: EntryKind, description: String, value: i64) -> Self {
        let percentage = match kind {
            EntryKind::Income => None,
            EntryKind::Expense => Some(0),
        };
        Self {
            id,
            kind,
            description,
            value,
            percentage,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Amount in minor units.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Share of total expense; `None` for income entries.
    pub fn percentage(&self) -> Option<u32> {
        self.percentage
    }

    pub fn item_ref(&self) -> ItemRef {
        ItemRef::new(self.kind, self.id)
    }

    pub(crate) fn set_percentage(&mut self, percentage: u32) {
        if self.kind == EntryKind::Expense {
            self.percentage = Some(percentage);
        }
    }
}

/// Row identifier shared between the ledger and a view, rendered as `income-3` or `expense-2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemRef {
    pub kind: EntryKind,
    pub id: u64,
}

impl ItemRef {
    pub fn new(kind: EntryKind, id: u64) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind, self.id)
    }
}

impl FromStr for ItemRef {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || LedgerError::InvalidItemRef(value.to_string());
        let (prefix, id) = value.trim().split_once('-').ok_or_else(invalid)?;
        let kind = match prefix {
            "income" => EntryKind::Income,
            "expense" => EntryKind::Expense,
            _ => return Err(invalid()),
        };
        let id = id.parse::<u64>().map_err(|_| invalid())?;
        Ok(Self { kind, id })
    }
}
