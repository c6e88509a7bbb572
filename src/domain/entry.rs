use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};

/// Whether an entry adds to or draws from the month's balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

/// One recorded income or expense transaction.
///
/// The wire field names `type` and `date` match the persisted slot layout.
/// Records written before ids were introduced carry no `id` field; those get
/// a fresh one assigned on load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(rename = "date")]
    pub occurred_at: DateTime<Utc>,
}

impl Entry {
    /// Creates an entry stamped with the current time.
    pub fn new(description: impl Into<String>, amount: f64, kind: EntryKind) -> Self {
        Self::new_at(description, amount, kind, Utc::now())
    }

    /// Creates an entry with an explicit timestamp.
    pub fn new_at(
        description: impl Into<String>,
        amount: f64,
        kind: EntryKind,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            kind,
            occurred_at,
        }
    }

    /// Returns the signed amount (positive for income, negative for expense).
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            EntryKind::Income => self.amount,
            EntryKind::Expense => -self.amount,
        }
    }

    /// True when two entries would render as the same row: equal description,
    /// timestamp, and amount. Ids are deliberately ignored.
    pub fn same_row(&self, other: &Entry) -> bool {
        self.description == other.description
            && self.occurred_at == other.occurred_at
            && self.amount == other.amount
    }
}

impl Identifiable for Entry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Entry {
    fn display_label(&self) -> String {
        format!("entry:{} [{:?}]", self.id, self.kind)
    }
}
