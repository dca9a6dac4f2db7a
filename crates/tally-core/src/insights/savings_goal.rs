//! Savings goal recommendation rule
//!
//! Fires when the user is saving at or above their goal and has a surplus
//! worth putting to work.

use crate::models::Insight;
use crate::Result;

use super::engine::{InsightRule, RuleContext};
use super::types::InsightType;
use super::DEFAULT_SAVINGS_GOAL_PERCENT;

pub struct SavingsGoalRule;

impl SavingsGoalRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SavingsGoalRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for SavingsGoalRule {
    fn id(&self) -> &'static str {
        "savings_goal"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Insight>> {
        let summary = ctx.summary;
        if summary.income_total <= 0.0 {
            return Ok(vec![]);
        }

        let goal = ctx
            .profile
            .savings_goal_percent
            .unwrap_or(DEFAULT_SAVINGS_GOAL_PERCENT);
        if summary.savings_rate < goal {
            return Ok(vec![]);
        }

        let surplus = summary.income_total - summary.expenses_total;
        let currency = ctx.profile.currency.as_deref().unwrap_or("$");

        Ok(vec![Insight {
            id: "recommendation:savings-goal".to_string(),
            kind: InsightType::Recommendation,
            title: "You're hitting your savings goal".to_string(),
            description: format!(
                "You're saving {:.1}% of your income, ahead of your {:.0}% goal. \
                 Consider moving the {currency}{surplus:.2} surplus into savings or investments.",
                summary.savings_rate, goal
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
    fn test_fires_at_or_above_goal() {
        let summary = FinancialSummary {
            income_total: 1000.0,
            expenses_total: 700.0,
            savings_rate: 30.0,
            ..Default::default()
        };
        let profile = UserProfile {
            currency: Some("€".to_string()),
            ..Default::default()
        };
        let insights = SavingsGoalRule::new()
            .evaluate(&ctx_with(&summary, &profile))
            .unwrap();
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightType::Recommendation);
        assert!(insights[0].description.contains("€300.00"));
    }

    #[test]
    fn test_silent_below_goal() {
        let summary = FinancialSummary {
            income_total: 1000.0,
            expenses_total: 900.0,
            savings_rate: 10.0,
            ..Default::default()
        };
        let profile = UserProfile::default();
        assert!(SavingsGoalRule::new()
            .evaluate(&ctx_with(&summary, &profile))
            .unwrap()
            .is_empty());
    }
}
