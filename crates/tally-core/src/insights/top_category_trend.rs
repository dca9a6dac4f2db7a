//! Top category trend rule
//!
//! Fires when a single expense category carries a significant share of all
//! spending.

use crate::models::Insight;
use crate::Result;

use super::engine::{InsightRule, RuleContext};
use super::types::InsightType;

/// Minimum share of total expenses before the trend is worth surfacing
const SIGNIFICANT_SHARE_PERCENT: f64 = 30.0;

pub struct TopCategoryTrendRule;

impl TopCategoryTrendRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TopCategoryTrendRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for TopCategoryTrendRule {
    fn id(&self) -> &'static str {
        "top_category_trend"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Insight>> {
        let summary = ctx.summary;
        if summary.expenses_total <= 0.0 || summary.top_expense_category.is_empty() {
            return Ok(vec![]);
        }

        let share = (summary.top_expense_amount / summary.expenses_total) * 100.0;
        if share < SIGNIFICANT_SHARE_PERCENT {
            return Ok(vec![]);
        }

        Ok(vec![Insight {
            id: format!("trend:top-category:{}", summary.top_expense_category),
            kind: InsightType::Trend,
            title: format!("Most of your spending is {}", summary.top_expense_category),
            description: format!(
                "{} accounts for {:.1}% of your expenses. \
                 Keeping an eye on it has the biggest impact on your budget.",
                summary.top_expense_category, share
            ),
            date: ctx.generated_at,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FinancialSummary, UserProfile};
    use chrono::{TimeZone, Utc};

    fn ctx_with<'a>(
        summary: &'a FinancialSummary,
        profile: &'a UserProfile,
    ) -> RuleContext<'a> {
        RuleContext {
            transactions: &[],
            profile,
            summary,
            generated_at: Utc.with_ymd_and_hms(2025, 4, 15, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_fires_on_dominant_category() {
        let summary = FinancialSummary {
            income_total: 0.0,
            expenses_total: 200.0,
            top_expense_category: "rent".to_string(),
            top_expense_amount: 120.0,
            ..Default::default()
        };
        let profile = UserProfile::default();
        let insights = TopCategoryTrendRule::new()
            .evaluate(&ctx_with(&summary, &profile))
            .unwrap();
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].id, "trend:top-category:rent");
        assert!(insights[0].description.contains("60.0%"));
    }

    #[test]
    fn test_silent_below_threshold_or_without_expenses() {
        let spread_out = FinancialSummary {
            expenses_total: 200.0,
            top_expense_category: "food".to_string(),
            top_expense_amount: 40.0,
            ..Default::default()
        };
        let profile = UserProfile::default();
        assert!(TopCategoryTrendRule::new()
            .evaluate(&ctx_with(&spread_out, &profile))
            .unwrap()
            .is_empty());

        let empty = FinancialSummary::default();
        assert!(TopCategoryTrendRule::new()
            .evaluate(&ctx_with(&empty, &profile))
            .unwrap()
            .is_empty());
    }
}
