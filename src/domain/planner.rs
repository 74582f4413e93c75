use std::fmt;

use serde::{Deserialize, Serialize};

use super::Cents;

/// Share of monthly income allocated to debt repayment, in percent.
const DEBT_ALLOCATION_PCT: Cents = 30;

/// Share of monthly income allocated to savings, in percent.
const SAVINGS_ALLOCATION_PCT: Cents = 20;

/// Recommended monthly allocation of income.
/// Never persisted - recomputed fresh from the profile on each call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Up to 30% of income, capped at the debt actually owed
    pub debt_payment: Cents,
    /// Up to 20% of income, capped at the stated savings goal
    pub savings: Cents,
    /// Remainder of income after debt and savings allocations
    pub expenses: Cents,
}

/// Derive a monthly allocation plan from a financial profile.
///
/// Total over all inputs: never fails, never divides. With non-negative
/// inputs the two allocations together cannot exceed 50% of income, so
/// `expenses` is non-negative. Rejecting negative inputs is the caller's
/// concern; the result for them is well-defined but semantically meaningless.
pub fn recommend(income: Cents, debt: Cents, savings_goal: Cents) -> Plan {
    let debt_payment = debt.min(income * DEBT_ALLOCATION_PCT / 100);
    let savings = savings_goal.min(income * SAVINGS_ALLOCATION_PCT / 100);
    let expenses = income - (debt_payment + savings);

    Plan {
        debt_payment,
        savings,
        expenses,
    }
}

/// Estimated number of months to eliminate debt at the recommended
/// monthly debt payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoffHorizon {
    /// No outstanding debt: nothing to pay off
    DebtFree,
    /// Debt cleared after this many monthly payments
    Months(i64),
    /// Debt outstanding but the allocation is zero: payoff never happens
    NotAchievable,
}

/// Compute the payoff horizon for a given debt and monthly payment.
///
/// The zero-payment cases are reported explicitly instead of dividing:
/// a zero debt is "debt-free" and a zero payment against outstanding debt
/// is "not achievable", never an infinite or undefined number of months.
pub fn payoff_horizon(debt: Cents, debt_payment: Cents) -> PayoffHorizon {
    if debt <= 0 {
        PayoffHorizon::DebtFree
    } else if debt_payment <= 0 {
        PayoffHorizon::NotAchievable
    } else {
        PayoffHorizon::Months((debt + debt_payment - 1) / debt_payment)
    }
}

impl fmt::Display for PayoffHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayoffHorizon::DebtFree => write!(f, "debt-free"),
            PayoffHorizon::Months(months) => write!(f, "{} months", months),
            PayoffHorizon::NotAchievable => write!(f, "not achievable"),
        }
    }
}
