use serde::Serialize;

use crate::domain::{Entry, EntryKind};

/// Derived totals for the month in view. Recomputed on demand, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MonthSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub profit: f64,
}

impl MonthSummary {
    /// Reduces a set of entries into totals. Profit may be negative.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let mut summary = Self::default();
        for entry in entries {
            match entry.kind {
                EntryKind::Income => summary.total_income += entry.amount,
                EntryKind::Expense => summary.total_expenses += entry.amount,
            }
        }
        summary.profit = summary.total_income - summary.total_expenses;
        summary
    }
}
