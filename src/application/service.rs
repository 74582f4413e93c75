use chrono::{DateTime, Utc};

use crate::domain::{
    aggregate, payoff_horizon, recommend, Cents, FinancialProfile, PayoffHorizon, Plan, Totals,
    Transaction,
};
use crate::storage::Repository;

use super::AppError;

/// Application service providing high-level operations for the dashboard
/// and planner. This is the primary interface for any client (CLI, API,
/// TUI, etc.) and the boundary where all input validation happens: the
/// domain functions behind it assume well-formed input and never fail.
pub struct FinanceService {
    repo: Repository,
}

/// Summary totals plus the ledger they were derived from.
pub struct DashboardSummary {
    pub totals: Totals,
    pub transactions: Vec<Transaction>,
}

/// Recommended allocation plus the profile it was derived from.
pub struct PlanSummary {
    pub profile: FinancialProfile,
    pub plan: Plan,
    pub horizon: PayoffHorizon,
}

impl FinanceService {
    /// Create a new service with the given repository.
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Initialize a new database at the given path.
    pub async fn init(database_path: &str) -> Result<Self, AppError> {
        let db_url = format!("sqlite:{}?mode=rwc", database_path);
        let repo = Repository::init(&db_url).await?;
        Ok(Self::new(repo))
    }

    /// Connect to an existing database.
    pub async fn connect(database_path: &str) -> Result<Self, AppError> {
        let db_url = format!("sqlite:{}", database_path);
        let repo = Repository::connect(&db_url).await?;
        Ok(Self::new(repo))
    }

    // ========================
    // Ledger operations
    // ========================

    /// Record a new transaction. Any signed amount is accepted, including
    /// zero; an empty vendor is rejected here, before the ledger sees it.
    pub async fn record_transaction(
        &self,
        user_id: &str,
        vendor: &str,
        amount_cents: Cents,
        created_at: DateTime<Utc>,
    ) -> Result<Transaction, AppError> {
        let vendor = vendor.trim();
        if vendor.is_empty() {
            return Err(AppError::EmptyVendor);
        }

        let transaction = self
            .repo
            .insert_transaction(user_id, vendor, amount_cents, created_at)
            .await?;
        Ok(transaction)
    }

    /// List a user's transactions, most recent first.
    pub async fn list_transactions(
        &self,
        user_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Transaction>, AppError> {
        Ok(self.repo.list_transactions(user_id, limit).await?)
    }

    /// Fetch the full ledger and reduce it to summary totals.
    /// Totals are recomputed fresh from a complete snapshot on every call;
    /// nothing is cached between invocations.
    pub async fn get_dashboard(&self, user_id: &str) -> Result<DashboardSummary, AppError> {
        let transactions = self.repo.list_transactions(user_id, None).await?;
        let totals = aggregate(&transactions);

        Ok(DashboardSummary {
            totals,
            transactions,
        })
    }

    // ========================
    // Profile operations
    // ========================

    /// Save a user's financial profile, replacing any previous one.
    /// Negative values are rejected here; the recommender itself accepts
    /// anything numeric.
    pub async fn save_profile(
        &self,
        user_id: &str,
        income_cents: Cents,
        debt_cents: Cents,
        savings_goal_cents: Cents,
    ) -> Result<FinancialProfile, AppError> {
        for (field, value) in [
            ("Income", income_cents),
            ("Debt", debt_cents),
            ("Savings goal", savings_goal_cents),
        ] {
            if value < 0 {
                return Err(AppError::NegativeAmount { field, value });
            }
        }

        let profile = FinancialProfile::new(user_id, income_cents, debt_cents, savings_goal_cents);
        self.repo.upsert_profile(&profile).await?;
        Ok(profile)
    }

    /// Get a user's financial profile.
    pub async fn get_profile(&self, user_id: &str) -> Result<FinancialProfile, AppError> {
        self.repo
            .get_profile(user_id)
            .await?
            .ok_or_else(|| AppError::ProfileNotFound(user_id.to_string()))
    }

    /// Read the profile back and derive the recommended allocation and
    /// payoff horizon from it.
    pub async fn get_plan(&self, user_id: &str) -> Result<PlanSummary, AppError> {
        let profile = self.get_profile(user_id).await?;

        let plan = recommend(
            profile.income_cents,
            profile.debt_cents,
            profile.savings_goal_cents,
        );
        let horizon = payoff_horizon(profile.debt_cents, plan.debt_payment);

        Ok(PlanSummary {
            profile,
            plan,
            horizon,
        })
    }
}
