//! Financial summary metrics over the full transaction set
//!
//! Unlike the chart path, nothing here is windowed: totals, savings rate,
//! and the category breakdown always cover every supplied transaction.

use std::collections::HashMap;

use crate::models::{CategorySpending, FinancialSummary, Transaction, TransactionKind};

/// Compute scalar derived metrics over all supplied transactions
///
/// `savings_rate` is `(income − expenses) / income × 100` when income is
/// positive and exactly 0.0 otherwise; it may be negative and is never
/// clamped. The top expense category is the one with the strictly greatest
/// total; ties resolve to whichever category first appears in the input
/// sequence. With no expense transactions the category is empty and the
/// amount 0.
pub fn compute_summary(transactions: &[Transaction]) -> FinancialSummary {
    let mut income_total = 0.0;
    let mut expenses_total = 0.0;

    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => income_total += tx.amount,
            TransactionKind::Expense => expenses_total += tx.amount,
        }
    }

    let savings_rate = if income_total > 0.0 {
        ((income_total - expenses_total) / income_total) * 100.0
    } else {
        0.0
    };

    let mut top_expense_category = String::new();
    let mut top_expense_amount = 0.0;
    for (category, total) in category_totals(transactions) {
        if total > top_expense_amount {
            top_expense_category = category;
            top_expense_amount = total;
        }
    }

    FinancialSummary {
        income_total,
        expenses_total,
        savings_rate,
        top_expense_category,
        top_expense_amount,
    }
}

/// Per-category expense totals in first-seen category order
///
/// The order is what makes the top-category tie-break deterministic, so the
/// accumulation keeps a side list of categories in order of first
/// appearance rather than iterating the map.
fn category_totals(transactions: &[Transaction]) -> Vec<(String, f64)> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for tx in transactions {
        if tx.kind != TransactionKind::Expense {
            continue;
        }
        let entry = totals.entry(tx.category.as_str()).or_insert_with(|| {
            order.push(tx.category.as_str());
            0.0
        });
        *entry += tx.amount;
    }

    order
        .into_iter()
        .map(|category| (category.to_string(), totals[category]))
        .collect()
}

/// Per-category expense totals with each category's share of all expenses
///
/// Categories appear in first-seen order. Percentages are 0.0 when the
/// expense total is zero.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategorySpending> {
    let totals = category_totals(transactions);
    let overall: f64 = totals.iter().map(|(_, amount)| amount).sum();

    totals
        .into_iter()
        .map(|(category, amount)| CategorySpending {
            category,
            amount,
            percentage: if overall > 0.0 {
                (amount / overall) * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Income-to-expense ratio for presentation
///
/// The naive `income / expenses` guarded only by positive income divides by
/// zero whenever expenses are zero, so that case is surfaced as `None` and
/// the caller decides how to present it. Zero income reports `Some(0.0)`.
/// A non-finite value is never produced.
pub fn income_expense_ratio(summary: &FinancialSummary) -> Option<f64> {
    if summary.income_total <= 0.0 {
        return Some(0.0);
    }
    if summary.expenses_total <= 0.0 {
        return None;
    }
    Some(summary.income_total / summary.expenses_total)
}
