// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use finplan::application::FinanceService;
use tempfile::TempDir;

/// Helper to create a test service with a temporary database
pub async fn test_service() -> Result<(FinanceService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test.db");
    let service = FinanceService::init(db_path.to_str().unwrap()).await?;
    Ok((service, temp_dir))
}

/// Helper to parse a date string into DateTime<Utc>
pub fn parse_date(date_str: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

/// Test fixture: a small mixed ledger for one user
pub struct SampleLedger;

impl SampleLedger {
    /// Record one income and two expenses: 100.00, -40.00, -10.00
    pub async fn record_basic(service: &FinanceService, user: &str) -> Result<()> {
        service
            .record_transaction(user, "Employer", 10000, parse_date("2024-01-05"))
            .await?;
        service
            .record_transaction(user, "Groceries", -4000, parse_date("2024-01-10"))
            .await?;
        service
            .record_transaction(user, "Coffee Shop", -1000, parse_date("2024-01-12"))
            .await?;
        Ok(())
    }
}
