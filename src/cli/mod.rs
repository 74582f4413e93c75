use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};

use crate::application::FinanceService;
use crate::domain::{format_cents, parse_cents, PayoffHorizon, Transaction};

/// Finplan - Personal Finance Dashboard & Planner
#[derive(Parser)]
#[command(name = "finplan")]
#[command(about = "A local-first personal finance dashboard and debt/savings planner")]
#[command(version)]
pub struct Cli {
    /// Database file path
    #[arg(short, long, default_value = "finplan.db")]
    pub database: String,

    /// User account the command operates on
    #[arg(short, long, global = true, default_value = "default")]
    pub user: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new database
    Init,

    /// Record a transaction (positive = income, negative = expense)
    Add {
        /// Signed amount (e.g., "1200" for income, "-40.50" for an expense)
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Vendor or counterparty label
        #[arg(short, long)]
        vendor: String,

        /// Date of the transaction (ISO 8601 format: YYYY-MM-DD, defaults to now)
        #[arg(long)]
        date: Option<String>,
    },

    /// List recent transactions, most recent first
    Transactions {
        /// Maximum number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show income/expense/net totals and the transaction list
    Dashboard,

    /// Financial profile commands
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Show the recommended monthly allocation and payoff horizon
    Plan,

    /// Export data to CSV or JSON
    Export {
        /// What to export: transactions, ledger, plan
        export_type: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Save your financial profile (fully replaces the previous one)
    Set {
        /// Monthly income (e.g., "2000" or "2000.00")
        #[arg(short, long)]
        income: String,

        /// Total outstanding debt
        #[arg(short, long)]
        debt: String,

        /// Target savings amount
        #[arg(short, long)]
        savings_goal: String,
    },

    /// Show the saved financial profile
    Show,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Init => {
                FinanceService::init(&self.database).await?;
                println!("Database initialized: {}", self.database);
            }

            Commands::Add {
                amount,
                vendor,
                date,
            } => {
                let service = FinanceService::connect(&self.database).await?;
                let amount_cents = parse_cents(&amount)
                    .context("Invalid amount format. Use '50.00' or '-40'")?;

                let created_at = match date {
                    Some(date_str) => parse_date(&date_str).with_context(|| {
                        format!("Invalid date format '{}'. Use YYYY-MM-DD", date_str)
                    })?,
                    None => Utc::now(),
                };

                let tx = service
                    .record_transaction(&self.user, &vendor, amount_cents, created_at)
                    .await?;

                println!(
                    "Recorded transaction: {} {} ({})",
                    format_cents(tx.amount_cents),
                    tx.vendor,
                    tx.id
                );
            }

            Commands::Transactions { limit } => {
                let service = FinanceService::connect(&self.database).await?;
                let transactions = service.list_transactions(&self.user, limit).await?;
                print_transaction_table(&transactions);
            }

            Commands::Dashboard => {
                let service = FinanceService::connect(&self.database).await?;
                let summary = service.get_dashboard(&self.user).await?;

                println!("Dashboard for {}", self.user);
                println!("  Total Income:   {}", format_cents(summary.totals.income));
                println!("  Total Expense:  {}", format_cents(summary.totals.expense));
                println!("  Net Balance:    {}", format_cents(summary.totals.net));
                println!();
                print_transaction_table(&summary.transactions);
            }

            Commands::Profile(profile_cmd) => {
                let service = FinanceService::connect(&self.database).await?;
                run_profile_command(&service, &self.user, profile_cmd).await?;
            }

            Commands::Plan => {
                let service = FinanceService::connect(&self.database).await?;
                let summary = service.get_plan(&self.user).await?;

                println!("Recommended monthly allocation:");
                println!("  Debt Payment:   {}", format_cents(summary.plan.debt_payment));
                println!("  Savings:        {}", format_cents(summary.plan.savings));
                println!("  Expenses:       {}", format_cents(summary.plan.expenses));
                println!();

                match summary.horizon {
                    PayoffHorizon::DebtFree => {
                        println!("You have no outstanding debt. Nothing to pay off!");
                    }
                    PayoffHorizon::Months(months) => {
                        println!("At this rate, your debt could be gone in {} months.", months);
                    }
                    PayoffHorizon::NotAchievable => {
                        println!(
                            "The current allocation cannot reduce your debt. \
                             Increase your income to make progress."
                        );
                    }
                }
            }

            Commands::Export {
                export_type,
                output,
            } => {
                let service = FinanceService::connect(&self.database).await?;
                run_export_command(&service, &self.user, &export_type, output.as_deref()).await?;
            }
        }

        Ok(())
    }
}

async fn run_profile_command(
    service: &FinanceService,
    user: &str,
    cmd: ProfileCommands,
) -> Result<()> {
    match cmd {
        ProfileCommands::Set {
            income,
            debt,
            savings_goal,
        } => {
            let income_cents = parse_cents(&income).context("Invalid income format")?;
            let debt_cents = parse_cents(&debt).context("Invalid debt format")?;
            let savings_goal_cents =
                parse_cents(&savings_goal).context("Invalid savings goal format")?;

            let profile = service
                .save_profile(user, income_cents, debt_cents, savings_goal_cents)
                .await?;

            println!("Profile saved for {}:", user);
            println!("  Monthly Income: {}", format_cents(profile.income_cents));
            println!("  Total Debt:     {}", format_cents(profile.debt_cents));
            println!("  Savings Goal:   {}", format_cents(profile.savings_goal_cents));
        }

        ProfileCommands::Show => {
            let profile = service.get_profile(user).await?;

            println!("Financial profile for {}", profile.user_id);
            println!("  Monthly Income: {}", format_cents(profile.income_cents));
            println!("  Total Debt:     {}", format_cents(profile.debt_cents));
            println!("  Savings Goal:   {}", format_cents(profile.savings_goal_cents));
            println!(
                "  Updated:        {}",
                profile.updated_at.format("%Y-%m-%d %H:%M:%S")
            );
        }
    }

    Ok(())
}

async fn run_export_command(
    service: &FinanceService,
    user: &str,
    export_type: &str,
    output: Option<&str>,
) -> Result<()> {
    use crate::io::Exporter;
    use std::fs::File;
    use std::io::{stdout, Write};

    let exporter = Exporter::new(service);

    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    };

    match export_type {
        "transactions" => {
            let count = exporter.export_transactions_csv(user, writer).await?;
            if output.is_some() {
                eprintln!("Exported {} transactions", count);
            }
        }
        "ledger" => {
            let snapshot = exporter.export_ledger_json(user, writer).await?;
            if output.is_some() {
                eprintln!(
                    "Exported ledger: {} transactions, net {}",
                    snapshot.transactions.len(),
                    format_cents(snapshot.totals.net)
                );
            }
        }
        "plan" => {
            let snapshot = exporter.export_plan_json(user, writer).await?;
            if output.is_some() {
                eprintln!("Exported plan (payoff horizon: {})", snapshot.horizon);
            }
        }
        _ => {
            anyhow::bail!(
                "Invalid export type '{}'. Valid types: transactions, ledger, plan",
                export_type
            );
        }
    }

    Ok(())
}

fn print_transaction_table(transactions: &[Transaction]) {
    if transactions.is_empty() {
        println!("No transactions found.");
        return;
    }

    println!("{:<24} {:>12} {:<12}", "VENDOR", "AMOUNT", "DATE");
    println!("{}", "-".repeat(50));
    for tx in transactions {
        println!(
            "{:<24} {:>12} {:<12}",
            truncate(&tx.vendor, 24),
            format_cents(tx.amount_cents),
            tx.created_at.format("%Y-%m-%d")
        );
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

fn parse_date(date_str: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")?;
    let datetime = date
        .and_hms_opt(0, 0, 0)
        .context("Invalid time components")?;
    Ok(datetime.and_utc())
}
