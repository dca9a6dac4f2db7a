//! Chart data path: bucketing and series projection
//!
//! Transactions inside the resolved window are accumulated into calendar
//! buckets (day or month), the buckets are sorted by the instant their key
//! represents, and the sorted sequence is projected into two plot-ready
//! coordinate series that share one x domain.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{
    BucketKey, ChartPoint, ChartSeries, Granularity, TimeBucket, TimeRange, Transaction,
    TransactionKind,
};
use crate::window::{resolve_window, ResolvedWindow};

/// Canonicalize a date into its bucket key for the given granularity
pub fn bucket_key(date: NaiveDate, granularity: Granularity) -> BucketKey {
    match granularity {
        Granularity::Day => BucketKey::Day(date),
        Granularity::Month => BucketKey::Month {
            year: date.year(),
            month: date.month(),
        },
    }
}

/// Group windowed transactions into ordered time buckets
///
/// Retains transactions with `window.start <= date <= window.end` (inclusive
/// on both ends), accumulates income/expense sums per bucket key, and
/// returns the buckets sorted ascending by the instant each key represents,
/// independent of input order. An empty retained set yields an empty Vec.
pub fn bucket_transactions(
    transactions: &[Transaction],
    window: &ResolvedWindow,
) -> Vec<TimeBucket> {
    let mut grouped: HashMap<BucketKey, TimeBucket> = HashMap::new();

    for tx in transactions {
        if tx.date < window.start || tx.date > window.end {
            continue;
        }

        let key = bucket_key(tx.date, window.granularity);
        let bucket = grouped.entry(key).or_insert_with(|| TimeBucket::new(key));
        match tx.kind {
            TransactionKind::Income => bucket.income += tx.amount,
            TransactionKind::Expense => bucket.expenses += tx.amount,
        }
    }

    let mut buckets: Vec<TimeBucket> = grouped.into_values().collect();
    buckets.sort_by_key(|b| b.key.starts_at());
    buckets
}

/// Project ordered buckets into parallel income/expense series
///
/// Point *i* has `x = i + 1`. Both series always have one point per bucket,
/// so a bucket with only expense activity still contributes an income point
/// of 0 (and vice versa).
pub fn project_series(buckets: &[TimeBucket]) -> ChartSeries {
    let mut series = ChartSeries {
        income: Vec::with_capacity(buckets.len()),
        expenses: Vec::with_capacity(buckets.len()),
    };

    for (i, bucket) in buckets.iter().enumerate() {
        series.income.push(ChartPoint {
            x: i + 1,
            y: bucket.income,
        });
        series.expenses.push(ChartPoint {
            x: i + 1,
            y: bucket.expenses,
        });
    }

    series
}

/// Full chart path: resolve the window, bucket, and project
pub fn income_expense_series(
    transactions: &[Transaction],
    range: TimeRange,
    now: NaiveDate,
) -> ChartSeries {
    let window = resolve_window(range, now);
    let buckets = bucket_transactions(transactions, &window);
    project_series(&buckets)
}
