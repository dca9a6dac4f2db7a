//! Insight engine - deterministic rule evaluation over aggregated facts
//!
//! Instead of waiting for users to ask the right questions, the engine runs
//! a fixed rule set against the transaction data, the financial summary,
//! and the user profile, and surfaces what's actionable or concerning as a
//! ranked, deduplicated list of insight records.
//!
//! ## Built-in rules
//!
//! - **Overspending alert** - expenses exceed income
//! - **Savings rate tip** - saving something, but below the goal
//! - **Top category trend** - one category dominates spending
//! - **Savings goal recommendation** - at/above goal, surplus to invest
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_core::insights::InsightEngine;
//!
//! let engine = InsightEngine::new();
//! let insights = engine.derive(&transactions, &profile, Utc::now());
//! ```
//!
//! The engine is a pure function of its arguments: identical inputs with a
//! frozen generation timestamp yield identical output sequences.

pub mod engine;
pub mod overspending_alert;
pub mod savings_goal;
pub mod savings_rate_tip;
pub mod top_category_trend;
pub mod types;

pub use engine::{derive_insights, InsightEngine, InsightRule, RuleContext};
pub use overspending_alert::OverspendingAlertRule;
pub use savings_goal::SavingsGoalRule;
pub use savings_rate_tip::SavingsRateTipRule;
pub use top_category_trend::TopCategoryTrendRule;
pub use types::InsightType;

/// Savings rate target used when the profile does not set one
pub const DEFAULT_SAVINGS_GOAL_PERCENT: f64 = 20.0;
