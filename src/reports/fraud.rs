use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Transaction;
use crate::reports::rates::percentage;
use crate::types::{AmountBand, DayPart};

#[derive(Debug, Clone, Serialize)]
pub struct FraudBankPair {
    pub sender_bank: String,
    pub receiver_bank: String,
    pub fraud_count: u64,
}

/// Top-10 (sender bank, receiver bank) pairs by fraud count, globally.
pub fn top_fraud_bank_pairs(transactions: &[Transaction]) -> Vec<FraudBankPair> {
    let mut counts: HashMap<(String, String), u64> = HashMap::new();

    for tx in transactions.iter().filter(|tx| tx.fraud_flag) {
        *counts
            .entry((tx.sender_bank.clone(), tx.receiver_bank.clone()))
            .or_default() += 1;
    }

    let mut pairs: Vec<FraudBankPair> = counts
        .into_iter()
        .map(|((sender_bank, receiver_bank), fraud_count)| FraudBankPair {
            sender_bank,
            receiver_bank,
            fraud_count,
        })
        .collect();

    pairs.sort_by(|a, b| {
        b.fraud_count
            .cmp(&a.fraud_count)
            .then_with(|| a.sender_bank.cmp(&b.sender_bank))
            .then_with(|| a.receiver_bank.cmp(&b.receiver_bank))
    });
    pairs.truncate(10);

    pairs
}

#[derive(Debug, Clone, Serialize)]
pub struct StateFraudRate {
    pub sender_state: String,
    pub total_txns: u64,
    pub fraud_txns: u64,
    pub fraud_percent: Option<Decimal>,
}

/// Fraud percentage per sender state, highest first.
pub fn fraud_rate_by_state(transactions: &[Transaction]) -> Vec<StateFraudRate> {
    let mut rows: Vec<StateFraudRate> =
        fraud_tallies(transactions, |tx| tx.sender_state.clone())
            .into_iter()
            .map(|(sender_state, (total_txns, fraud_txns))| StateFraudRate {
                sender_state,
                total_txns,
                fraud_txns,
                fraud_percent: percentage(fraud_txns, total_txns),
            })
            .collect();

    rows.sort_by(|a, b| {
        b.fraud_percent
            .cmp(&a.fraud_percent)
            .then_with(|| a.sender_state.cmp(&b.sender_state))
    });

    rows
}

#[derive(Debug, Clone, Serialize)]
pub struct BankRiskProfile {
    pub sender_bank: String,
    pub total_txns: u64,
    pub fraud_txns: u64,
    pub fraud_rate: Option<Decimal>,
    pub risk_category: String,
}

/// Fraud rate per sender bank with a three-tier risk label, highest rate
/// first. Rates above 5% are high risk, above 1% medium, anything else low.
pub fn bank_risk_profile(transactions: &[Transaction]) -> Vec<BankRiskProfile> {
    let mut rows: Vec<BankRiskProfile> =
        fraud_tallies(transactions, |tx| tx.sender_bank.clone())
            .into_iter()
            .map(|(sender_bank, (total_txns, fraud_txns))| {
                let fraud_rate = percentage(fraud_txns, total_txns);

                let risk_category = match fraud_rate {
                    Some(rate) if rate > Decimal::from(5) => "High Risk",
                    Some(rate) if rate > Decimal::ONE => "Medium Risk",
                    _ => "Low Risk",
                };

                BankRiskProfile {
                    sender_bank,
                    total_txns,
                    fraud_txns,
                    fraud_rate,
                    risk_category: risk_category.to_string(),
                }
            })
            .collect();

    rows.sort_by(|a, b| {
        b.fraud_rate
            .cmp(&a.fraud_rate)
            .then_with(|| a.sender_bank.cmp(&b.sender_bank))
    });

    rows
}

#[derive(Debug, Clone, Serialize)]
pub struct DaypartFraudProfile {
    pub time_bucket: String,
    pub weekday_txns: u64,
    pub weekday_fraud: u64,
    pub weekday_fraud_percent: Option<Decimal>,
    pub weekend_txns: u64,
    pub weekend_fraud: u64,
    pub weekend_fraud_percent: Option<Decimal>,
}

#[derive(Default)]
struct DaypartTally {
    weekday_txns: u64,
    weekday_fraud: u64,
    weekend_txns: u64,
    weekend_fraud: u64,
}

/// Weekday versus weekend fraud per time-of-day bucket, in the fixed bucket
/// order Morning, Afternoon, Evening, Night.
///
/// A bucket with rows on only one side of the weekday/weekend split reports
/// an absent percentage for the empty side.
pub fn fraud_by_daypart(transactions: &[Transaction]) -> Vec<DaypartFraudProfile> {
    let mut tallies: BTreeMap<DayPart, DaypartTally> = BTreeMap::new();

    for tx in transactions {
        let tally = tallies.entry(DayPart::from_hour(tx.hour_of_day)).or_default();

        if tx.is_weekend {
            tally.weekend_txns += 1;
            tally.weekend_fraud += u64::from(tx.fraud_flag);
        } else {
            tally.weekday_txns += 1;
            tally.weekday_fraud += u64::from(tx.fraud_flag);
        }
    }

    tallies
        .into_iter()
        .map(|(bucket, tally)| DaypartFraudProfile {
            time_bucket: bucket.label().to_string(),
            weekday_txns: tally.weekday_txns,
            weekday_fraud: tally.weekday_fraud,
            weekday_fraud_percent: percentage(tally.weekday_fraud, tally.weekday_txns),
            weekend_txns: tally.weekend_txns,
            weekend_fraud: tally.weekend_fraud,
            weekend_fraud_percent: percentage(tally.weekend_fraud, tally.weekend_txns),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct AgeGroupFraudBands {
    pub sender_age_group: String,
    pub band_1k_to_10k: u64,
    pub band_10k_to_20k: u64,
    pub band_20k_to_30k: u64,
    pub band_above_30k: u64,
}

/// Fraud counts per sender age group, cross-tabulated into the fixed amount
/// bands. Fraudulent amounts outside every band still create the age group's
/// row but count toward no band.
pub fn fraud_amount_bands_by_age_group(transactions: &[Transaction]) -> Vec<AgeGroupFraudBands> {
    let mut bands: BTreeMap<String, [u64; 4]> = BTreeMap::new();

    for tx in transactions.iter().filter(|tx| tx.fraud_flag) {
        let counts = bands.entry(tx.sender_age_group.clone()).or_default();

        match AmountBand::classify(tx.amount) {
            Some(AmountBand::From1kTo10k) => counts[0] += 1,
            Some(AmountBand::From10kTo20k) => counts[1] += 1,
            Some(AmountBand::From20kTo30k) => counts[2] += 1,
            Some(AmountBand::Above30k) => counts[3] += 1,
            None => {}
        }
    }

    bands
        .into_iter()
        .map(|(sender_age_group, counts)| AgeGroupFraudBands {
            sender_age_group,
            band_1k_to_10k: counts[0],
            band_10k_to_20k: counts[1],
            band_20k_to_30k: counts[2],
            band_above_30k: counts[3],
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusFraudRate {
    pub transaction_status: String,
    pub total_txns: u64,
    pub fraud_txns: u64,
    pub fraud_percent: Option<Decimal>,
}

/// Fraud percentage per transaction status, highest first.
pub fn fraud_rate_by_status(transactions: &[Transaction]) -> Vec<StatusFraudRate> {
    let mut rows: Vec<StatusFraudRate> =
        fraud_tallies(transactions, |tx| tx.transaction_status.clone())
            .into_iter()
            .map(|(transaction_status, (total_txns, fraud_txns))| StatusFraudRate {
                transaction_status,
                total_txns,
                fraud_txns,
                fraud_percent: percentage(fraud_txns, total_txns),
            })
            .collect();

    rows.sort_by(|a, b| {
        b.fraud_percent
            .cmp(&a.fraud_percent)
            .then_with(|| a.transaction_status.cmp(&b.transaction_status))
    });

    rows
}

/// (total, fraud) row counts per group key.
fn fraud_tallies<F>(transactions: &[Transaction], key: F) -> HashMap<String, (u64, u64)>
where
    F: Fn(&Transaction) -> String,
{
    let mut tallies: HashMap<String, (u64, u64)> = HashMap::new();

    for tx in transactions {
        let tally = tallies.entry(key(tx)).or_default();
        tally.0 += 1;
        tally.1 += u64::from(tx.fraud_flag);
    }

    tallies
}
