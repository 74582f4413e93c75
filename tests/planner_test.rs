mod common;

use anyhow::Result;
use common::test_service;
use finplan::application::AppError;
use finplan::domain::PayoffHorizon;

#[tokio::test]
async fn test_plan_standard_profile() -> Result<()> {
    let (service, _temp) = test_service().await?;

    // income 2000.00, debt 10000.00, savings goal 5000.00
    service
        .save_profile("alice", 200000, 1000000, 500000)
        .await?;

    let summary = service.get_plan("alice").await?;

    assert_eq!(summary.plan.debt_payment, 60000);
    assert_eq!(summary.plan.savings, 40000);
    assert_eq!(summary.plan.expenses, 100000);
    assert_eq!(summary.horizon, PayoffHorizon::Months(17));

    Ok(())
}

#[tokio::test]
async fn test_plan_no_debt_reports_debt_free() -> Result<()> {
    let (service, _temp) = test_service().await?;

    // income 1000.00, no debt, savings goal 200.00
    service.save_profile("alice", 100000, 0, 20000).await?;

    let summary = service.get_plan("alice").await?;

    assert_eq!(summary.plan.debt_payment, 0);
    assert_eq!(summary.plan.savings, 20000);
    assert_eq!(summary.plan.expenses, 80000);
    assert_eq!(summary.horizon, PayoffHorizon::DebtFree);

    Ok(())
}

#[tokio::test]
async fn test_plan_zero_income_with_debt_not_achievable() -> Result<()> {
    let (service, _temp) = test_service().await?;

    service.save_profile("alice", 0, 50000, 0).await?;

    let summary = service.get_plan("alice").await?;

    assert_eq!(summary.plan.debt_payment, 0);
    assert_eq!(summary.plan.savings, 0);
    assert_eq!(summary.plan.expenses, 0);
    assert_eq!(summary.horizon, PayoffHorizon::NotAchievable);

    Ok(())
}

#[tokio::test]
async fn test_plan_without_profile_fails() -> Result<()> {
    let (service, _temp) = test_service().await?;

    let result = service.get_plan("alice").await;
    assert!(matches!(result, Err(AppError::ProfileNotFound(_))));

    Ok(())
}

#[tokio::test]
async fn test_plan_reflects_latest_profile() -> Result<()> {
    let (service, _temp) = test_service().await?;

    service
        .save_profile("alice", 200000, 1000000, 500000)
        .await?;
    service.save_profile("alice", 100000, 0, 20000).await?;

    let summary = service.get_plan("alice").await?;
    assert_eq!(summary.horizon, PayoffHorizon::DebtFree);
    assert_eq!(summary.plan.savings, 20000);

    Ok(())
}
