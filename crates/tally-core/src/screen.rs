//! Ingestion screening for malformed transactions
//!
//! A malformed record (negative amount, or an expense without a category)
//! must never be coerced into a valid-looking bucket. Screening drops such
//! records up front and reports how many were skipped; every skip is also
//! logged so the loss is visible.

use tracing::warn;

use crate::models::Transaction;

/// Result of screening a raw transaction batch
#[derive(Debug, Clone)]
pub struct Screened {
    /// Transactions that passed every invariant, in input order
    pub transactions: Vec<Transaction>,
    /// Number of records dropped
    pub skipped: usize,
}

/// Drop malformed transactions, keeping input order for the survivors
pub fn screen_transactions(raw: Vec<Transaction>) -> Screened {
    let total = raw.len();
    let transactions: Vec<Transaction> = raw
        .into_iter()
        .filter(|tx| {
            let ok = tx.is_well_formed();
            if !ok {
                warn!(
                    id = %tx.id,
                    amount = tx.amount,
                    kind = %tx.kind,
                    "Skipping malformed transaction"
                );
            }
            ok
        })
        .collect();

    let skipped = total - transactions.len();
    Screened {
        transactions,
        skipped,
    }
}
