//! Overspending alert rule
//!
//! Fires when expenses exceed income over the full transaction set.

use crate::models::Insight;
use crate::Result;

use super::engine::{InsightRule, RuleContext};
use super::types::InsightType;

pub struct OverspendingAlertRule;

impl OverspendingAlertRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OverspendingAlertRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for OverspendingAlertRule {
    fn id(&self) -> &'static str {
        "overspending_alert"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Insight>> {
        let summary = ctx.summary;
        if summary.expenses_total <= summary.income_total {
            return Ok(vec![]);
        }

        let overshoot = summary.expenses_total - summary.income_total;
        let currency = ctx.profile.currency.as_deref().unwrap_or("$");

        Ok(vec![Insight {
            id: "alert:overspending".to_string(),
            kind: InsightType::Alert,
            title: "Spending exceeds income".to_string(),
            description: format!(
                "Your expenses are {currency}{overshoot:.2} higher than your income. \
                 Review your largest categories to bring spending back in line."
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
    fn test_fires_when_expenses_exceed_income() {
        let summary = FinancialSummary {
            income_total: 100.0,
            expenses_total: 160.0,
            savings_rate: -60.0,
            ..Default::default()
        };
        let profile = UserProfile::default();
        let insights = OverspendingAlertRule::new()
            .evaluate(&ctx_with(&summary, &profile))
            .unwrap();
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightType::Alert);
        assert!(insights[0].description.contains("$60.00"));
    }

    #[test]
    fn test_silent_when_balanced() {
        let summary = FinancialSummary {
            income_total: 100.0,
            expenses_total: 100.0,
            ..Default::default()
        };
        let profile = UserProfile::default();
        let insights = OverspendingAlertRule::new()
            .evaluate(&ctx_with(&summary, &profile))
            .unwrap();
        assert!(insights.is_empty());
    }
}
