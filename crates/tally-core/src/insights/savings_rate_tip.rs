//! Savings rate tip rule
//!
//! Fires when the user is saving something, but less than their goal
//! (profile `savings_goal_percent`, defaulting to 20%).

use crate::models::Insight;
use crate::Result;

use super::engine::{InsightRule, RuleContext};
use super::types::InsightType;
use super::DEFAULT_SAVINGS_GOAL_PERCENT;

pub struct SavingsRateTipRule;

impl SavingsRateTipRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SavingsRateTipRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for SavingsRateTipRule {
    fn id(&self) -> &'static str {
        "savings_rate_tip"
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
        // Negative rates are the overspending alert's territory
        if summary.savings_rate < 0.0 || summary.savings_rate >= goal {
            return Ok(vec![]);
        }

        Ok(vec![Insight {
            id: "tip:savings-rate".to_string(),
            kind: InsightType::Tip,
            title: "Savings rate below goal".to_string(),
            description: format!(
                "You're saving {:.1}% of your income against a {:.0}% goal. \
                 Trimming your top expense category is usually the fastest way to close the gap.",
                summary.savings_rate, goal
            ),
            date: ctx.generated_at,
        }])
    }
}
