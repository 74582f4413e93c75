use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Cents;

pub type TransactionId = Uuid;

/// One ledger entry, owned by a user account.
/// Transactions are immutable once recorded - there is no update or delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    /// Owning user account
    pub user_id: String,
    /// Display label for the counterparty (never empty)
    pub vendor: String,
    /// Signed amount in cents: positive = income, negative = expense.
    /// Zero is a degenerate no-op entry that must not change totals.
    pub amount_cents: Cents,
    /// When the transaction was recorded; listings are most-recent-first
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        user_id: impl Into<String>,
        vendor: impl Into<String>,
        amount_cents: Cents,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            vendor: vendor.into(),
            amount_cents,
            created_at,
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount_cents > 0
    }

    pub fn is_expense(&self) -> bool {
        self.amount_cents < 0
    }
}
