//! Tally Core Library
//!
//! Transaction analytics and insight derivation for the Tally personal
//! finance tool:
//! - Time window resolution (weekly/monthly/yearly chart ranges)
//! - Transaction bucketing and chart series projection
//! - Financial summary metrics (savings rate, top category, breakdown)
//! - Rule-based insight engine (alerts, tips, trends, recommendations)
//! - Transaction/profile file parsing (CSV, JSON)
//! - Ingestion screening for malformed records
//!
//! Every component is a synchronous, side-effect-free pure function of its
//! arguments: nothing here owns state across calls, mutates its inputs, or
//! reads ambient context. Re-invocation on updated input is the only
//! refresh mechanism.

pub mod chart;
pub mod error;
pub mod import;
pub mod insights;
pub mod models;
pub mod screen;
pub mod summary;
pub mod window;

pub use chart::{bucket_key, bucket_transactions, income_expense_series, project_series};
pub use error::{Error, Result};
pub use import::{load_profile, load_transactions, parse_csv, parse_json};
pub use insights::{derive_insights, InsightEngine, InsightRule, InsightType, RuleContext};
pub use models::{
    BucketKey, CategorySpending, ChartPoint, ChartSeries, FinancialSummary, Granularity, Insight,
    TimeBucket, TimeRange, Transaction, TransactionKind, UserProfile,
};
pub use screen::{screen_transactions, Screened};
pub use summary::{category_breakdown, compute_summary, income_expense_ratio};
pub use window::{resolve_window, ResolvedWindow};
