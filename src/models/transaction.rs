use chrono::{Datelike, NaiveDateTime, Weekday};
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer};

use crate::models::errors::RecordError;

/// Represents a single row from the input CSV snapshot.
///
/// The source table is fully denormalized: every row carries the categorical
/// attributes of both parties alongside the derived calendar fields. The
/// derived fields (`day_of_week`, `hour_of_day`, `is_weekend`) are stored in
/// the CSV and cross-checked against `timestamp` during validation.
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub sender_age_group: String,
    pub sender_state: String,
    pub sender_bank: String,
    pub receiver_age_group: String,
    pub receiver_bank: String,
    pub amount: Decimal,
    #[serde(deserialize_with = "bool_from_flag")]
    pub fraud_flag: bool,
    pub merchant_category: String,
    pub device_type: String,
    pub network_type: String,
    pub transaction_type: String,
    pub transaction_status: String,
    #[serde(deserialize_with = "datetime_from_str")]
    pub timestamp: NaiveDateTime,
    pub day_of_week: String,
    pub hour_of_day: u8,
    #[serde(deserialize_with = "bool_from_flag")]
    pub is_weekend: bool,
}

impl Transaction {
    /// Checks the row invariants the reports rely on.
    ///
    /// # Errors
    /// Returns `RecordError` if:
    /// - `amount` is negative.
    /// - `hour_of_day` is outside 0-23.
    /// - `is_weekend` disagrees with the weekday derived from `timestamp`.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.amount.is_sign_negative() {
            return Err(RecordError::negative_amount(self));
        }

        if self.hour_of_day > 23 {
            return Err(RecordError::hour_out_of_range(self));
        }

        let weekend = matches!(self.timestamp.weekday(), Weekday::Sat | Weekday::Sun);

        if self.is_weekend != weekend {
            return Err(RecordError::weekend_mismatch(self));
        }

        Ok(())
    }
}

/// Deserializes the 0/1 indicator columns (`fraud_flag`, `is_weekend`).
fn bool_from_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match u8::deserialize(deserializer)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(de::Error::custom(format!(
            "flag column must be 0 or 1, got {other}"
        ))),
    }
}

/// Deserializes timestamps in the source's space-separated format, accepting
/// the `T`-separated variant as well.
fn datetime_from_str<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    NaiveDateTime::parse_from_str(&value, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(&value, "%Y-%m-%dT%H:%M:%S"))
        .map_err(de::Error::custom)
}
