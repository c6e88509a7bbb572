//! Owned ledger state and the operations the rendering layer calls.

pub mod summary;

use tracing::debug;
use uuid::Uuid;

use crate::domain::{Displayable, Entry, EntryKind, Period};
use crate::errors::LedgerError;

pub use summary::MonthSummary;

/// The full entry sequence plus the month currently browsed.
///
/// Entries keep insertion order and are append-only except for explicit
/// deletes. The selected period starts on the current month and is never
/// persisted. Persistence itself is the caller's job: save after each
/// successful mutation, load once at startup.
#[derive(Debug, Clone)]
pub struct BudgetLedger {
    entries: Vec<Entry>,
    selected_period: Period,
}

impl BudgetLedger {
    /// Creates an empty ledger viewing the current month.
    pub fn new() -> Self {
        Self::from_entries(Vec::new())
    }

    /// Wraps a previously persisted entry sequence. The sequence is trusted
    /// as-is; only newly created entries are validated.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            selected_period: Period::current(),
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn selected_period(&self) -> Period {
        self.selected_period
    }

    /// Jumps the view to an arbitrary month.
    pub fn select_period(&mut self, period: Period) {
        self.selected_period = period;
    }

    /// Moves the viewed month by `delta`, rolling the year as needed.
    pub fn shift_month(&mut self, delta: i32) {
        self.selected_period = self.selected_period.shift(delta);
        debug!(period = %self.selected_period.label(), "period shifted");
    }

    /// Validates and appends a new entry stamped with the real creation time,
    /// regardless of which month is being browsed. Returns the new id; on
    /// invalid input the ledger is left unchanged.
    pub fn add_entry(
        &mut self,
        description: impl Into<String>,
        amount: f64,
        kind: EntryKind,
    ) -> Result<Uuid, LedgerError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(LedgerError::InvalidEntry(
                "description must not be empty".into(),
            ));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidEntry(format!(
                "amount must be a positive number, got {amount}"
            )));
        }
        let entry = Entry::new(description, amount, kind);
        let id = entry.id;
        debug!(label = %entry.display_label(), amount, "entry added");
        self.entries.push(entry);
        Ok(id)
    }

    /// The original widget's submit path: parses the amount text and silently
    /// drops any invalid input, keeping the ledger unchanged.
    pub fn add_entry_from_input(
        &mut self,
        description: &str,
        amount_text: &str,
        kind: EntryKind,
    ) -> Option<Uuid> {
        let amount: f64 = amount_text.trim().parse().ok()?;
        self.add_entry(description, amount, kind).ok()
    }

    /// Removes the entry with the given id, returning it. Unknown ids are a
    /// no-op.
    pub fn remove_entry(&mut self, id: Uuid) -> Option<Entry> {
        let position = self.entries.iter().position(|entry| entry.id == id)?;
        let removed = self.entries.remove(position);
        debug!(label = %removed.display_label(), "entry removed");
        Some(removed)
    }

    /// Removes the entry shown at `index` in the month-filtered view.
    ///
    /// Resolution matches the original widget: the row is looked up in the
    /// filtered view, then the first entry in the full sequence with the same
    /// description, timestamp, and amount is removed. With duplicate rows the
    /// first match in sequence order wins. Out of range or no match is a
    /// no-op.
    pub fn remove_filtered(&mut self, index: usize) -> Option<Entry> {
        let target = self.filtered_entries().get(index).map(|entry| (*entry).clone())?;
        let position = self
            .entries
            .iter()
            .position(|entry| entry.same_row(&target))?;
        let removed = self.entries.remove(position);
        debug!(label = %removed.display_label(), "entry removed by row");
        Some(removed)
    }

    /// The subsequence of entries falling in the selected month, in original
    /// relative order.
    pub fn filtered_entries(&self) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|entry| self.selected_period.contains(entry.occurred_at))
            .collect()
    }

    /// Income, expense, and profit totals over the filtered view.
    pub fn summary(&self) -> MonthSummary {
        MonthSummary::from_entries(self.filtered_entries())
    }
}

impl Default for BudgetLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn backdated(
        description: &str,
        amount: f64,
        kind: EntryKind,
        year: i32,
        month: u32,
        day: u32,
    ) -> Entry {
        let at = Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap();
        Entry::new_at(description, amount, kind, at)
    }

    fn march_ledger() -> BudgetLedger {
        let mut ledger = BudgetLedger::from_entries(vec![
            backdated("Salary", 1000.0, EntryKind::Income, 2024, 3, 1),
            backdated("Rent", 400.0, EntryKind::Expense, 2024, 3, 5),
            backdated("Bonus", 250.0, EntryKind::Income, 2024, 2, 20),
        ]);
        ledger.select_period(Period::new(2024, 3));
        ledger
    }

    #[test]
    fn add_entry_appends_and_shows_in_current_month() {
        let mut ledger = BudgetLedger::new();
        let id = ledger.add_entry("Salary", 1000.0, EntryKind::Income).unwrap();
        assert_eq!(ledger.entry_count(), 1);
        // Stamped with the creation time, so it lands in the current month.
        assert_eq!(ledger.filtered_entries()[0].id, id);
    }

    #[test]
    fn add_entry_rejects_empty_description() {
        let mut ledger = BudgetLedger::new();
        let err = ledger
            .add_entry("   ", 10.0, EntryKind::Expense)
            .expect_err("blank description must be rejected");
        assert!(matches!(err, LedgerError::InvalidEntry(_)));
        assert_eq!(ledger.entry_count(), 0);
    }

    #[test]
    fn add_entry_rejects_non_positive_and_non_finite_amounts() {
        let mut ledger = BudgetLedger::new();
        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(ledger.add_entry("Rent", amount, EntryKind::Expense).is_err());
        }
        assert_eq!(ledger.entry_count(), 0);
    }

    #[test]
    fn add_entry_from_input_drops_unparseable_amounts() {
        let mut ledger = BudgetLedger::new();
        assert!(ledger
            .add_entry_from_input("Rent", "not-a-number", EntryKind::Expense)
            .is_none());
        assert!(ledger
            .add_entry_from_input("Rent", "-12", EntryKind::Expense)
            .is_none());
        assert_eq!(ledger.entry_count(), 0);

        let id = ledger.add_entry_from_input("Rent", " 400.0 ", EntryKind::Expense);
        assert!(id.is_some());
        assert_eq!(ledger.entry_count(), 1);
    }

    #[test]
    fn stamped_entry_hidden_when_browsing_another_month() {
        let mut ledger = BudgetLedger::new();
        ledger.add_entry("Salary", 1000.0, EntryKind::Income).unwrap();
        ledger.shift_month(1);
        assert!(ledger.filtered_entries().is_empty());
        ledger.shift_month(-1);
        assert_eq!(ledger.filtered_entries().len(), 1);
    }

    #[test]
    fn filtered_entries_keep_insertion_order_within_month() {
        let ledger = march_ledger();
        let view = ledger.filtered_entries();
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].description, "Salary");
        assert_eq!(view[1].description, "Rent");
    }

    #[test]
    fn summary_matches_worked_example() {
        let mut ledger = march_ledger();
        let march = ledger.summary();
        assert_eq!(march.total_income, 1000.0);
        assert_eq!(march.total_expenses, 400.0);
        assert_eq!(march.profit, 600.0);

        ledger.select_period(Period::new(2024, 4));
        assert_eq!(ledger.summary(), MonthSummary::default());
    }

    #[test]
    fn remove_entry_by_unknown_id_is_noop() {
        let mut ledger = march_ledger();
        assert!(ledger.remove_entry(Uuid::new_v4()).is_none());
        assert_eq!(ledger.entry_count(), 3);
    }

    #[test]
    fn remove_filtered_deletes_the_displayed_row() {
        let mut ledger = march_ledger();
        let removed = ledger.remove_filtered(1).expect("row 1 exists");
        assert_eq!(removed.description, "Rent");
        assert_eq!(ledger.entry_count(), 2);
        // February's entry is untouched.
        ledger.select_period(Period::new(2024, 2));
        assert_eq!(ledger.filtered_entries().len(), 1);
    }

    #[test]
    fn remove_filtered_out_of_range_is_noop() {
        let mut ledger = march_ledger();
        assert!(ledger.remove_filtered(5).is_none());
        assert_eq!(ledger.entry_count(), 3);
    }

    #[test]
    fn remove_filtered_with_duplicates_takes_first_in_sequence() {
        let at = Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap();
        let first = Entry::new_at("Coffee", 4.5, EntryKind::Expense, at);
        let second = Entry::new_at("Coffee", 4.5, EntryKind::Expense, at);
        let first_id = first.id;
        let mut ledger = BudgetLedger::from_entries(vec![first, second]);
        ledger.select_period(Period::new(2024, 3));

        // Asking for row 1 still removes the first structural match.
        let removed = ledger.remove_filtered(1).unwrap();
        assert_eq!(removed.id, first_id);
        assert_eq!(ledger.entry_count(), 1);
    }

    #[test]
    fn deleting_only_entry_empties_the_month() {
        let mut ledger = BudgetLedger::from_entries(vec![
            backdated("Rent", 400.0, EntryKind::Expense, 2024, 3, 5),
            backdated("Bonus", 250.0, EntryKind::Income, 2024, 2, 20),
        ]);
        ledger.select_period(Period::new(2024, 3));
        ledger.remove_filtered(0).unwrap();
        assert!(ledger.filtered_entries().is_empty());
        ledger.select_period(Period::new(2024, 2));
        assert_eq!(ledger.filtered_entries().len(), 1);
    }

    #[test]
    fn profit_identity_holds_for_any_sequence() {
        let mut ledger = BudgetLedger::from_entries(vec![
            backdated("Salary", 1000.0, EntryKind::Income, 2024, 3, 1),
            backdated("Rent", 400.0, EntryKind::Expense, 2024, 3, 5),
            backdated("Groceries", 123.45, EntryKind::Expense, 2024, 3, 9),
        ]);
        ledger.select_period(Period::new(2024, 3));
        let summary = ledger.summary();
        assert_eq!(summary.profit, summary.total_income - summary.total_expenses);
    }

    #[test]
    fn expense_only_month_has_zero_income() {
        let mut ledger = BudgetLedger::from_entries(vec![
            backdated("Rent", 400.0, EntryKind::Expense, 2024, 3, 5),
            backdated("Groceries", 80.0, EntryKind::Expense, 2024, 3, 9),
        ]);
        ledger.select_period(Period::new(2024, 3));
        assert_eq!(ledger.summary().total_income, 0.0);
    }
}
