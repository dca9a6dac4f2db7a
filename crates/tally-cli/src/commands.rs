//! CLI command implementations

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use tracing::info;

use tally_core::{
    category_breakdown, compute_summary, derive_insights, income_expense_ratio,
    income_expense_series, load_profile, TimeRange, Transaction,
};

/// Resolve the reference date: an explicit --now wins, else today
pub fn resolve_now(now: Option<&str>) -> Result<NaiveDate> {
    match now {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .context("Invalid --now date format (use YYYY-MM-DD)"),
        None => Ok(Utc::now().date_naive()),
    }
}

/// Load a transaction file, reporting dropped records
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let screened = tally_core::load_transactions(path)
        .with_context(|| format!("Cannot load {}", path.display()))?;
    if screened.skipped > 0 {
        info!(
            skipped = screened.skipped,
            file = %path.display(),
            "Dropped malformed transactions"
        );
    }
    Ok(screened.transactions)
}

pub fn cmd_chart(file: &Path, range: &str, now: Option<&str>, json: bool) -> Result<()> {
    let range = TimeRange::from_str(range)?;
    let now = resolve_now(now)?;
    let transactions = load_transactions(file)?;

    let series = income_expense_series(&transactions, range, now);

    if json {
        println!("{}", serde_json::to_string_pretty(&series)?);
        return Ok(());
    }

    println!();
    println!("📈 Income vs Expenses ({})", range);
    println!("   ─────────────────────────────────────");

    if series.income.is_empty() {
        println!("   No transactions in this range.");
        println!();
        return Ok(());
    }

    println!("   {:>4}  {:>12}  {:>12}", "x", "income", "expenses");
    for (inc, exp) in series.income.iter().zip(&series.expenses) {
        println!("   {:>4}  {:>12.2}  {:>12.2}", inc.x, inc.y, exp.y);
    }
    println!();
    Ok(())
}

pub fn cmd_summary(file: &Path, json: bool) -> Result<()> {
    let transactions = load_transactions(file)?;
    let summary = compute_summary(&transactions);
    let breakdown = category_breakdown(&transactions);

    if json {
        let output = serde_json::json!({
            "summary": summary,
            "categories": breakdown,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    println!("📊 Financial Summary");
    println!("   ─────────────────────────────────────");
    println!("   Income:        {:>12.2}", summary.income_total);
    println!("   Expenses:      {:>12.2}", summary.expenses_total);
    println!("   Savings rate:  {:>11.1}%", summary.savings_rate);
    match income_expense_ratio(&summary) {
        Some(ratio) => println!("   Income/expense ratio: {:.2}", ratio),
        None => println!("   Income/expense ratio: n/a (no expenses)"),
    }

    if !summary.top_expense_category.is_empty() {
        println!(
            "   Top category:  {} ({:.2})",
            summary.top_expense_category, summary.top_expense_amount
        );
    }

    if !breakdown.is_empty() {
        println!();
        println!("   By category:");
        for spending in &breakdown {
            println!(
                "   {:<20} {:>10.2}  {:>5.1}%",
                spending.category, spending.amount, spending.percentage
            );
        }
    }
    println!();
    Ok(())
}

pub fn cmd_insights(file: &Path, profile: Option<&Path>, json: bool) -> Result<()> {
    let transactions = load_transactions(file)?;
    let profile = load_profile(profile)?;
    let insights = derive_insights(&transactions, &profile, Utc::now());

    if json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
        return Ok(());
    }

    println!();
    println!("💡 Insights");
    println!("   ─────────────────────────────────────");

    if insights.is_empty() {
        println!("   Nothing to report. Add more transactions to get insights.");
        println!();
        return Ok(());
    }

    for insight in &insights {
        println!("   [{}] {}", insight.kind, insight.title);
        println!("       {}", insight.description);
        println!();
    }
    Ok(())
}
