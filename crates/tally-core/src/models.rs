//! Domain models for Tally

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Whether a transaction adds to or draws from the user's funds
///
/// Sign is carried here, never by `Transaction::amount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(Error::InvalidKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single financial transaction supplied by the caller
///
/// `amount` is a non-negative magnitude; `kind` carries the sign.
/// `category` is required (non-empty) when `kind` is `Expense`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub kind: TransactionKind,
    #[serde(default)]
    pub category: String,
}

impl Transaction {
    /// Check the ingestion invariants; malformed records are screened out,
    /// never silently coerced into a bucket
    pub fn is_well_formed(&self) -> bool {
        if !(self.amount >= 0.0) {
            return false;
        }
        if self.kind == TransactionKind::Expense && self.category.trim().is_empty() {
            return false;
        }
        true
    }
}

/// Calendar unit used to key chart buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Month,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
        }
    }
}

impl std::str::FromStr for Granularity {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "month" => Ok(Self::Month),
            _ => Err(Error::InvalidGranularity(s.to_string())),
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Selectable chart range
///
/// Unrecognized tokens are a caller contract violation: `FromStr` fails
/// loudly instead of defaulting, so a bad token can never silently shift
/// the charted window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Weekly,
    Monthly,
    Yearly,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl std::str::FromStr for TimeRange {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(Error::InvalidRange(s.to_string())),
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Canonical identifier for one aggregation cell
///
/// Keys have calendar identity: two transactions on the same day (or in the
/// same month, under month granularity) map to the same key regardless of
/// input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketKey {
    Day(NaiveDate),
    Month { year: i32, month: u32 },
}

impl BucketKey {
    /// The instant this key represents; buckets are sorted by this
    ///
    /// Keys built by the bucketer always hold a real calendar month, but
    /// the fields are public and serde-constructible, so an out-of-range
    /// month sorts first instead of panicking.
    pub fn starts_at(&self) -> NaiveDate {
        match *self {
            Self::Day(date) => date,
            Self::Month { year, month } => {
                NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
            }
        }
    }
}

impl std::fmt::Display for BucketKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
        }
    }
}

/// One aggregation cell of the chart window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeBucket {
    pub key: BucketKey,
    pub income: f64,
    pub expenses: f64,
}

impl TimeBucket {
    pub fn new(key: BucketKey) -> Self {
        Self {
            key,
            income: 0.0,
            expenses: 0.0,
        }
    }
}

/// A plot-ready coordinate: `x` is the 1-based position in the sorted
/// bucket sequence, `y` the aggregated value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: usize,
    pub y: f64,
}

/// Parallel income/expense series sharing one x domain
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartSeries {
    pub income: Vec<ChartPoint>,
    pub expenses: Vec<ChartPoint>,
}

/// Scalar metrics derived from the full (unwindowed) transaction set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub income_total: f64,
    pub expenses_total: f64,
    /// Percentage of income retained after expenses. May be negative;
    /// exactly 0.0 when there is no income.
    pub savings_rate: f64,
    /// Empty when there are no expense transactions
    pub top_expense_category: String,
    pub top_expense_amount: f64,
}

/// Per-category expense total with its share of all expenses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpending {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
}

/// Demographic/preference fields the insight rule set draws on
///
/// Treated as an opaque input bag: rules pick what they need and ignore
/// the rest. All fields are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: Option<String>,
    pub monthly_income: Option<f64>,
    /// Target savings rate in percent (rules default to 20 when unset)
    pub savings_goal_percent: Option<f64>,
    pub currency: Option<String>,
}

/// A derived, classified observation about the user's finances
///
/// Value object: every engine invocation produces a fresh ordered sequence;
/// no identity persists across calls except as re-derived from identical
/// inputs and an identical generation timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub id: String,
    pub kind: crate::insights::InsightType,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
}
