use std::fs::File;
use std::io::{BufReader, Read};

use anyhow::Context;
use csv::{ReaderBuilder, Trim};
use tracing::warn;

use crate::models::Transaction;

/// A read-only, fully loaded copy of the transaction table.
///
/// Rows that fail to deserialize or violate the record invariants are logged
/// and skipped rather than aborting the load; the source data is synthetic
/// and occasionally sloppy, and a missing row only perturbs the reports.
pub struct Snapshot {
    transactions: Vec<Transaction>,
}

impl Snapshot {
    /// Loads a snapshot from a CSV file on disk.
    pub fn from_path(path: &str) -> anyhow::Result<Self> {
        let file = File::open(path).with_context(|| format!("opening CSV at path: {path}"))?;

        Ok(Self::from_reader(BufReader::new(file)))
    }

    /// Loads a snapshot from any CSV byte stream.
    pub fn from_reader<R: Read>(reader: R) -> Self {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut transactions = Vec::new();

        for result in csv_reader.deserialize::<Transaction>() {
            match result {
                Ok(transaction) => match transaction.validate() {
                    Ok(()) => transactions.push(transaction),
                    Err(error) => warn!("Skipping invalid row: {error}"),
                },
                Err(error) => warn!("CSV deserialization error: {error}"),
            }
        }

        Self { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl From<Vec<Transaction>> for Snapshot {
    fn from(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }
}
