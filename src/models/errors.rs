use thiserror::Error;

use crate::models::Transaction;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Amount [{amount}] is negative for transaction [{transaction_id}]")]
    NegativeAmount {
        transaction_id: String,
        amount: String,
    },
    #[error("Hour of day [{hour_of_day}] is out of range for transaction [{transaction_id}]")]
    HourOutOfRange {
        transaction_id: String,
        hour_of_day: u8,
    },
    #[error("Weekend flag disagrees with timestamp [{timestamp}] for transaction [{transaction_id}]")]
    WeekendMismatch {
        transaction_id: String,
        timestamp: String,
    },
}

impl RecordError {
    pub fn negative_amount(tx: &Transaction) -> Self {
        Self::NegativeAmount {
            transaction_id: tx.transaction_id.clone(),
            amount: tx.amount.to_string(),
        }
    }

    pub fn hour_out_of_range(tx: &Transaction) -> Self {
        Self::HourOutOfRange {
            transaction_id: tx.transaction_id.clone(),
            hour_of_day: tx.hour_of_day,
        }
    }

    pub fn weekend_mismatch(tx: &Transaction) -> Self {
        Self::WeekendMismatch {
            transaction_id: tx.transaction_id.clone(),
            timestamp: tx.timestamp.to_string(),
        }
    }
}
