//! Transaction and profile file parsing
//!
//! CSV files use the header `id,date,kind,amount,category` with
//! `YYYY-MM-DD` dates; JSON files hold an array of transaction objects.
//! Path-based loading picks the format by file extension and screens the
//! batch so malformed records never reach the analytics.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::error::{Error, Result};
use crate::models::{Transaction, UserProfile};
use crate::screen::{screen_transactions, Screened};

/// Parse CSV transaction data
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut transactions = Vec::new();
    for record in reader.deserialize() {
        let tx: Transaction = record?;
        transactions.push(tx);
    }
    Ok(transactions)
}

/// Parse a JSON array of transactions
pub fn parse_json<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load and screen a transaction file, choosing the format by extension
pub fn load_transactions(path: &Path) -> Result<Screened> {
    let raw = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => parse_csv(File::open(path)?)?,
        Some("json") => parse_json(File::open(path)?)?,
        _ => {
            return Err(Error::InvalidData(format!(
                "Unsupported transaction file type: {} (expected .csv or .json)",
                path.display()
            )))
        }
    };

    Ok(screen_transactions(raw))
}

/// Load a user profile, or default when no file is given
pub fn load_profile(path: Option<&Path>) -> Result<UserProfile> {
    match path {
        None => Ok(UserProfile::default()),
        Some(path) => Ok(serde_json::from_reader(File::open(path)?)?),
    }
}
