//! Insight engine - rule orchestration, ranking, and deduplication

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::models::{FinancialSummary, Insight, Transaction, UserProfile};
use crate::summary::compute_summary;
use crate::Result;

use super::{
    OverspendingAlertRule, SavingsGoalRule, SavingsRateTipRule, TopCategoryTrendRule,
};

/// Everything a rule may look at
///
/// Rules receive their inputs explicitly; there is no ambient state, so the
/// whole derivation is a pure function of this context.
pub struct RuleContext<'a> {
    pub transactions: &'a [Transaction],
    pub profile: &'a UserProfile,
    pub summary: &'a FinancialSummary,
    /// Caller-supplied generation timestamp; freeze it in tests for
    /// byte-identical reruns
    pub generated_at: DateTime<Utc>,
}

/// A single deterministic trigger over aggregated facts
pub trait InsightRule: Send + Sync {
    /// Stable identifier used in diagnostics
    fn id(&self) -> &'static str;

    /// Evaluate the trigger and emit zero or more insights
    fn evaluate(&self, ctx: &RuleContext<'_>) -> Result<Vec<Insight>>;
}

/// The main insight engine
///
/// Holds a fixed-size rule set per invocation; `register` is the
/// caller-configurable extension point.
pub struct InsightEngine {
    rules: Vec<Box<dyn InsightRule>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in rule set
    pub fn new() -> Self {
        let mut engine = Self { rules: vec![] };

        engine.register(Box::new(OverspendingAlertRule::new()));
        engine.register(Box::new(SavingsRateTipRule::new()));
        engine.register(Box::new(TopCategoryTrendRule::new()));
        engine.register(Box::new(SavingsGoalRule::new()));

        engine
    }

    /// Create an engine with no rules registered
    pub fn empty() -> Self {
        Self { rules: vec![] }
    }

    /// Register an insight rule
    pub fn register(&mut self, rule: Box<dyn InsightRule>) {
        self.rules.push(rule);
    }

    /// Run every rule and produce the ranked, deduplicated insight list
    ///
    /// An empty transaction set yields an empty list; no insight is ever
    /// fabricated from absent data. A failing rule is logged and skipped so
    /// one bad rule cannot blank the whole list. Output order is
    /// deterministic: ranking weight descending, then insight id ascending.
    pub fn derive(
        &self,
        transactions: &[Transaction],
        profile: &UserProfile,
        generated_at: DateTime<Utc>,
    ) -> Vec<Insight> {
        if transactions.is_empty() {
            return Vec::new();
        }

        let summary = compute_summary(transactions);
        let ctx = RuleContext {
            transactions,
            profile,
            summary: &summary,
            generated_at,
        };

        let mut insights = Vec::new();
        for rule in &self.rules {
            match rule.evaluate(&ctx) {
                Ok(batch) => {
                    tracing::debug!(rule = rule.id(), count = batch.len(), "Rule evaluated");
                    insights.extend(batch);
                }
                Err(e) => {
                    tracing::warn!(rule = rule.id(), error = %e, "Rule evaluation failed");
                }
            }
        }

        // Dedup by id, first occurrence wins
        let mut seen = HashSet::new();
        insights.retain(|insight| seen.insert(insight.id.clone()));

        insights.sort_by(|a, b| {
            b.kind
                .priority()
                .cmp(&a.kind.priority())
                .then_with(|| a.id.cmp(&b.id))
        });

        insights
    }

    /// Ids of the registered rules
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }
}

/// Convenience wrapper around the default engine
pub fn derive_insights(
    transactions: &[Transaction],
    profile: &UserProfile,
    generated_at: DateTime<Utc>,
) -> Vec<Insight> {
    InsightEngine::new().derive(transactions, profile, generated_at)
}
