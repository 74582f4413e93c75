use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::domain::{Cents, FinancialProfile, Transaction};

use super::MIGRATION_001_INITIAL;

/// Repository for persisting and querying transactions and profiles.
/// Plays the role of both external stores: the ledger store (transactions
/// keyed by user) and the profile store (one financial profile per user).
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given SQLite connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to a SQLite database at the given URL.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url)
            .await
            .context("Failed to connect to database")?;
        Ok(Self::new(pool))
    }

    /// Run database migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(MIGRATION_001_INITIAL)
            .execute(&self.pool)
            .await
            .context("Failed to run migration 001")?;
        Ok(())
    }

    /// Initialize a new database (connect + migrate).
    pub async fn init(database_url: &str) -> Result<Self> {
        let repo = Self::connect(database_url).await?;
        repo.migrate().await?;
        Ok(repo)
    }

    // ========================
    // Ledger store
    // ========================

    /// Insert a new transaction for a user. The store assigns the ID and
    /// returns the stored record; transactions are immutable afterwards.
    pub async fn insert_transaction(
        &self,
        user_id: &str,
        vendor: &str,
        amount_cents: Cents,
        created_at: DateTime<Utc>,
    ) -> Result<Transaction> {
        let transaction = Transaction::new(user_id, vendor, amount_cents, created_at);

        sqlx::query(
            r#"
            INSERT INTO transactions (id, user_id, vendor, amount_cents, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(transaction.id.to_string())
        .bind(&transaction.user_id)
        .bind(&transaction.vendor)
        .bind(transaction.amount_cents)
        .bind(transaction.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .context("Failed to insert transaction")?;

        Ok(transaction)
    }

    /// List a user's transactions, most recent first.
    pub async fn list_transactions(
        &self,
        user_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Transaction>> {
        let mut query = String::from(
            "SELECT id, user_id, vendor, amount_cents, created_at \
             FROM transactions WHERE user_id = ? ORDER BY created_at DESC",
        );

        if let Some(lim) = limit {
            query.push_str(&format!(" LIMIT {}", lim));
        }

        let rows = sqlx::query(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .context("Failed to list transactions")?;

        rows.iter().map(Self::row_to_transaction).collect()
    }

    // ========================
    // Profile store
    // ========================

    /// Get a user's financial profile, if one has been saved.
    pub async fn get_profile(&self, user_id: &str) -> Result<Option<FinancialProfile>> {
        let row = sqlx::query(
            r#"
            SELECT user_id, income_cents, debt_cents, savings_goal_cents, updated_at
            FROM financial_profiles
            WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch profile")?;

        match row {
            Some(row) => Ok(Some(Self::row_to_profile(&row)?)),
            None => Ok(None),
        }
    }

    /// Save a user's financial profile, fully overwriting any previous
    /// record for that user (never a partial merge).
    pub async fn upsert_profile(&self, profile: &FinancialProfile) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO financial_profiles (user_id, income_cents, debt_cents, savings_goal_cents, updated_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT (user_id) DO UPDATE SET
                income_cents = excluded.income_cents,
                debt_cents = excluded.debt_cents,
                savings_goal_cents = excluded.savings_goal_cents,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&profile.user_id)
        .bind(profile.income_cents)
        .bind(profile.debt_cents)
        .bind(profile.savings_goal_cents)
        .bind(profile.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .context("Failed to upsert profile")?;
        Ok(())
    }

    fn row_to_transaction(row: &sqlx::sqlite::SqliteRow) -> Result<Transaction> {
        let id_str: String = row.get("id");
        let created_at_str: String = row.get("created_at");

        Ok(Transaction {
            id: Uuid::parse_str(&id_str).context("Invalid transaction ID")?,
            user_id: row.get("user_id"),
            vendor: row.get("vendor"),
            amount_cents: row.get("amount_cents"),
            created_at: DateTime::parse_from_rfc3339(&created_at_str)
                .context("Invalid created_at timestamp")?
                .with_timezone(&Utc),
        })
    }

    fn row_to_profile(row: &sqlx::sqlite::SqliteRow) -> Result<FinancialProfile> {
        let updated_at_str: String = row.get("updated_at");

        Ok(FinancialProfile {
            user_id: row.get("user_id"),
            income_cents: row.get("income_cents"),
            debt_cents: row.get("debt_cents"),
            savings_goal_cents: row.get("savings_goal_cents"),
            updated_at: DateTime::parse_from_rfc3339(&updated_at_str)
                .context("Invalid updated_at timestamp")?
                .with_timezone(&Utc),
        })
    }
}
