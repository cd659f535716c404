//! Amount parsing into minor units and display formatting for money values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

/// Minor units (pence, cents) per major unit.
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

const MAX_FRACTION_DIGITS: usize = 2;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum NegativeStyle {
    #[default]
    Sign,
    Parentheses,
}

/// Display preferences for money values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrencySettings {
    pub code: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    #[serde(default)]
    pub negative_style: NegativeStyle,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self {
            code: "GBP".into(),
            decimal_separator: '.',
            grouping_separator: ',',
            negative_style: NegativeStyle::Sign,
        }
    }
}

impl CurrencySettings {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into().to_uppercase(),
            ..Self::default()
        }
    }

    pub fn symbol(&self) -> String {
        symbol_for(&self.code)
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        _ => code.into(),
    }
}

/// Parses a major-unit decimal string such as `"1200.00"` into minor units.
///
/// Accepts an optional leading `+`, whole units, and at most two fractional
/// digits. Anything that would leave a residual fraction of a minor unit, or
/// that is negative, empty, or overflowing, is an [`LedgerError::InvalidAmount`].
pub fn parse_amount(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    let invalid = || LedgerError::InvalidAmount(trimmed.to_string());

    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    if !whole.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(invalid());
    }

    let fraction = match fraction {
        Some(digits) => {
            if digits.is_empty()
                || digits.len() > MAX_FRACTION_DIGITS
                || !digits.chars().all(|ch| ch.is_ascii_digit())
            {
                return Err(invalid());
            }
            digits
        }
        None => "",
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }

    let major = if whole.is_empty() {
        0
    } else {
        whole.parse::<i64>().map_err(|_| invalid())?
    };
    let minor = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
        _ => fraction.parse::<i64>().map_err(|_| invalid())?,
    };

    major
        .checked_mul(MINOR_UNITS_PER_MAJOR)
        .and_then(|value| value.checked_add(minor))
        .ok_or_else(invalid)
}

/// Formats minor units as a grouped major-unit amount with the currency symbol.
pub fn format_minor_units(value: i64, settings: &CurrencySettings) -> String {
    let magnitude = value.unsigned_abs();
    let per_major = MINOR_UNITS_PER_MAJOR.unsigned_abs();
    let whole = group_digits(&(magnitude / per_major).to_string(), settings.grouping_separator);
    let body = format!(
        "{}{}{}{:02}",
        settings.symbol(),
        whole,
        settings.decimal_separator,
        magnitude % per_major
    );
    if value >= 0 {
        return body;
    }
    match settings.negative_style {
        NegativeStyle::Sign => format!("-{body}"),
        NegativeStyle::Parentheses => format!("({body})"),
    }
}

pub fn format_percentage(value: u32) -> String {
    format!("{value}%")
}

/// Label for the budget header, e.g. `October 2026`.
pub fn format_budget_month(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}
