mod common;

use anyhow::Result;
use common::{test_service, SampleLedger};
use finplan::domain::PayoffHorizon;
use finplan::io::{Exporter, LedgerSnapshot, PlanSnapshot};

#[tokio::test]
async fn test_export_transactions_csv() -> Result<()> {
    let (service, _temp) = test_service().await?;
    SampleLedger::record_basic(&service, "alice").await?;

    let exporter = Exporter::new(&service);
    let mut buffer = Vec::new();
    let count = exporter.export_transactions_csv("alice", &mut buffer).await?;

    assert_eq!(count, 3);

    let output = String::from_utf8(buffer)?;
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "id,vendor,amount_cents,created_at");
    assert_eq!(lines.len(), 4); // header + 3 records

    // Most recent first
    assert!(lines[1].contains("Coffee Shop"));
    assert!(lines[1].contains("-1000"));
    assert!(lines[3].contains("Employer"));

    Ok(())
}

#[tokio::test]
async fn test_export_ledger_json_roundtrip() -> Result<()> {
    let (service, _temp) = test_service().await?;
    SampleLedger::record_basic(&service, "alice").await?;

    let exporter = Exporter::new(&service);
    let mut buffer = Vec::new();
    exporter.export_ledger_json("alice", &mut buffer).await?;

    let snapshot: LedgerSnapshot = serde_json::from_slice(&buffer)?;
    assert_eq!(snapshot.user_id, "alice");
    assert_eq!(snapshot.transactions.len(), 3);
    assert_eq!(snapshot.totals.income, 10000);
    assert_eq!(snapshot.totals.expense, -5000);
    assert_eq!(snapshot.totals.net, 5000);

    Ok(())
}

#[tokio::test]
async fn test_export_plan_json() -> Result<()> {
    let (service, _temp) = test_service().await?;
    service
        .save_profile("alice", 200000, 1000000, 500000)
        .await?;

    let exporter = Exporter::new(&service);
    let mut buffer = Vec::new();
    exporter.export_plan_json("alice", &mut buffer).await?;

    let snapshot: PlanSnapshot = serde_json::from_slice(&buffer)?;
    assert_eq!(snapshot.plan.debt_payment, 60000);
    assert_eq!(snapshot.plan.savings, 40000);
    assert_eq!(snapshot.plan.expenses, 100000);
    assert_eq!(snapshot.horizon, PayoffHorizon::Months(17));

    Ok(())
}
