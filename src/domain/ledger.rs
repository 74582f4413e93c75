use serde::{Deserialize, Serialize};

use super::{Cents, Transaction};

/// Summary totals derived from a user's full ledger.
/// Never persisted - recomputed fresh from the transaction list on each call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all positive amounts
    pub income: Cents,
    /// Sum of all negative amounts (stays negative or zero)
    pub expense: Cents,
    /// income + expense
    pub net: Cents,
}

impl Totals {
    pub const ZERO: Totals = Totals {
        income: 0,
        expense: 0,
        net: 0,
    };

    /// Pairwise sum of two totals. `aggregate` is additive:
    /// aggregating a concatenation equals combining the parts.
    pub fn combine(self, other: Totals) -> Totals {
        Totals {
            income: self.income + other.income,
            expense: self.expense + other.expense,
            net: self.net + other.net,
        }
    }
}

/// Reduce a ledger to income/expense/net totals.
///
/// Pure and total: any well-formed transaction list is accepted, the input
/// order does not affect the result, and an empty ledger yields all zeros.
pub fn aggregate(transactions: &[Transaction]) -> Totals {
    transactions.iter().fold(Totals::ZERO, |totals, tx| {
        let amount = tx.amount_cents;
        Totals {
            income: totals.income + amount.max(0),
            expense: totals.expense + amount.min(0),
            net: totals.net + amount,
        }
    })
}
