use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Cents;

/// A user's declared financial profile: at most one active record per user.
/// Saves fully overwrite the previous record (upsert, never a partial merge).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialProfile {
    pub user_id: String,
    /// Monthly income, non-negative
    pub income_cents: Cents,
    /// Total outstanding debt, non-negative
    pub debt_cents: Cents,
    /// Target savings amount, non-negative
    pub savings_goal_cents: Cents,
    pub updated_at: DateTime<Utc>,
}

impl FinancialProfile {
    pub fn new(
        user_id: impl Into<String>,
        income_cents: Cents,
        debt_cents: Cents,
        savings_goal_cents: Cents,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            income_cents,
            debt_cents,
            savings_goal_cents,
            updated_at: Utc::now(),
        }
    }
}
