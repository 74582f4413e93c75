use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::FinanceService;
use crate::domain::{PayoffHorizon, Plan, Totals, Transaction};

/// Ledger snapshot for JSON export: the full transaction list plus the
/// totals derived from it at export time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub user_id: String,
    pub totals: Totals,
    pub transactions: Vec<Transaction>,
}

/// Plan snapshot for JSON export: the profile inputs plus the derived
/// allocation and payoff horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub user_id: String,
    pub income_cents: i64,
    pub debt_cents: i64,
    pub savings_goal_cents: i64,
    pub plan: Plan,
    pub horizon: PayoffHorizon,
}

/// Exporter for converting a user's data to CSV or JSON.
pub struct Exporter<'a> {
    service: &'a FinanceService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a FinanceService) -> Self {
        Self { service }
    }

    /// Export a user's transactions to CSV format, most recent first.
    pub async fn export_transactions_csv<W: Write>(
        &self,
        user_id: &str,
        writer: W,
    ) -> Result<usize> {
        let transactions = self.service.list_transactions(user_id, None).await?;
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["id", "vendor", "amount_cents", "created_at"])?;

        let mut count = 0;
        for tx in &transactions {
            csv_writer.write_record(&[
                tx.id.to_string(),
                tx.vendor.clone(),
                tx.amount_cents.to_string(),
                tx.created_at.to_rfc3339(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export a user's full ledger with derived totals as JSON.
    pub async fn export_ledger_json<W: Write>(
        &self,
        user_id: &str,
        mut writer: W,
    ) -> Result<LedgerSnapshot> {
        let summary = self.service.get_dashboard(user_id).await?;

        let snapshot = LedgerSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            user_id: user_id.to_string(),
            totals: summary.totals,
            transactions: summary.transactions,
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }

    /// Export a user's recommended plan as JSON.
    pub async fn export_plan_json<W: Write>(
        &self,
        user_id: &str,
        mut writer: W,
    ) -> Result<PlanSnapshot> {
        let summary = self.service.get_plan(user_id).await?;

        let snapshot = PlanSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            user_id: user_id.to_string(),
            income_cents: summary.profile.income_cents,
            debt_cents: summary.profile.debt_cents,
            savings_goal_cents: summary.profile.savings_goal_cents,
            plan: summary.plan,
            horizon: summary.horizon,
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }
}
