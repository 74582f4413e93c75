mod common;

use anyhow::Result;
use common::{parse_date, test_service, SampleLedger};
use finplan::application::AppError;

#[tokio::test]
async fn test_dashboard_totals() -> Result<()> {
    let (service, _temp) = test_service().await?;
    SampleLedger::record_basic(&service, "alice").await?;

    let summary = service.get_dashboard("alice").await?;

    assert_eq!(summary.totals.income, 10000);
    assert_eq!(summary.totals.expense, -5000);
    assert_eq!(summary.totals.net, 5000);
    assert_eq!(summary.transactions.len(), 3);

    Ok(())
}

#[tokio::test]
async fn test_dashboard_empty_ledger() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let summary = service.get_dashboard("alice").await?;

    assert_eq!(summary.totals.income, 0);
    assert_eq!(summary.totals.expense, 0);
    assert_eq!(summary.totals.net, 0);
    assert!(summary.transactions.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_transactions_listed_most_recent_first() -> Result<()> {
    let (service, _temp) = test_service().await?;

    service
        .record_transaction("alice", "First", 100, parse_date("2024-01-01"))
        .await?;
    service
        .record_transaction("alice", "Third", 300, parse_date("2024-01-03"))
        .await?;
    service
        .record_transaction("alice", "Second", 200, parse_date("2024-01-02"))
        .await?;

    let transactions = service.list_transactions("alice", None).await?;

    let vendors: Vec<&str> = transactions.iter().map(|t| t.vendor.as_str()).collect();
    assert_eq!(vendors, vec!["Third", "Second", "First"]);

    Ok(())
}

#[tokio::test]
async fn test_transactions_limit() -> Result<()> {
    let (service, _temp) = test_service().await?;
    SampleLedger::record_basic(&service, "alice").await?;

    let transactions = service.list_transactions("alice", Some(2)).await?;
    assert_eq!(transactions.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_ledgers_are_per_user() -> Result<()> {
    let (service, _temp) = test_service().await?;

    SampleLedger::record_basic(&service, "alice").await?;
    service
        .record_transaction("bob", "Salary", 50000, parse_date("2024-01-01"))
        .await?;

    let alice = service.get_dashboard("alice").await?;
    let bob = service.get_dashboard("bob").await?;

    assert_eq!(alice.totals.net, 5000);
    assert_eq!(bob.totals.net, 50000);
    assert_eq!(bob.transactions.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_zero_amount_transaction_is_noop_for_totals() -> Result<()> {
    let (service, _temp) = test_service().await?;
    SampleLedger::record_basic(&service, "alice").await?;

    let before = service.get_dashboard("alice").await?.totals;

    service
        .record_transaction("alice", "Placeholder", 0, parse_date("2024-01-20"))
        .await?;

    let after = service.get_dashboard("alice").await?;
    assert_eq!(after.totals, before);
    assert_eq!(after.transactions.len(), 4); // still listed, just not counted

    Ok(())
}

#[tokio::test]
async fn test_empty_vendor_rejected() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let result = service
        .record_transaction("alice", "   ", 100, parse_date("2024-01-01"))
        .await;

    assert!(matches!(result, Err(AppError::EmptyVendor)));

    // Nothing reached the ledger
    let transactions = service.list_transactions("alice", None).await?;
    assert!(transactions.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_recorded_vendor_is_trimmed() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let tx = service
        .record_transaction("alice", "  Coffee Shop  ", -450, parse_date("2024-01-01"))
        .await?;

    assert_eq!(tx.vendor, "Coffee Shop");

    Ok(())
}
