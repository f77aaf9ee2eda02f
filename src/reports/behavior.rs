use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Transaction;
use crate::reports::ranking::{rank_within_groups, RankMethod};
use crate::reports::rates::percentage;
use crate::types::weekday_ordinal;

#[derive(Debug, Clone, Serialize)]
pub struct DevicePreference {
    pub rank: u32,
    pub sender_age_group: String,
    pub device_type: String,
    pub txn_count: u64,
    pub usage_label: String,
}

/// Top-2 devices per sender age group by transaction count, tagging the most
/// used one.
pub fn device_preference_by_age_group(transactions: &[Transaction]) -> Vec<DevicePreference> {
    let mut counts: HashMap<(String, String), u64> = HashMap::new();

    for tx in transactions {
        *counts
            .entry((tx.sender_age_group.clone(), tx.device_type.clone()))
            .or_default() += 1;
    }

    rank_within_groups(counts, 2, RankMethod::Competition)
        .into_iter()
        .map(|row| DevicePreference {
            rank: row.rank,
            sender_age_group: row.group,
            device_type: row.key,
            txn_count: row.value,
            usage_label: if row.rank == 1 {
                "Preferred Device".to_string()
            } else {
                "Secondary".to_string()
            },
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct DeviceNetworkUsage {
    pub device_type: String,
    pub network_type: String,
    pub txn_count: u64,
}

/// Non-fraud transaction counts per (device, network) pair, grouped by device
/// and busiest network first.
pub fn device_network_usage(transactions: &[Transaction]) -> Vec<DeviceNetworkUsage> {
    let mut counts: HashMap<(String, String), u64> = HashMap::new();

    for tx in transactions.iter().filter(|tx| !tx.fraud_flag) {
        *counts
            .entry((tx.device_type.clone(), tx.network_type.clone()))
            .or_default() += 1;
    }

    let mut rows: Vec<DeviceNetworkUsage> = counts
        .into_iter()
        .map(|((device_type, network_type), txn_count)| DeviceNetworkUsage {
            device_type,
            network_type,
            txn_count,
        })
        .collect();

    rows.sort_by(|a, b| {
        a.device_type
            .cmp(&b.device_type)
            .then_with(|| b.txn_count.cmp(&a.txn_count))
            .then_with(|| a.network_type.cmp(&b.network_type))
    });

    rows
}

#[derive(Debug, Clone, Serialize)]
pub struct HourlyActivity {
    pub day_of_week: String,
    pub hour_of_day: u8,
    pub txn_count: u64,
    pub rank: u32,
    pub activity_label: String,
}

/// The three busiest hours of each weekday, dense-ranked by transaction
/// count, in Monday..Sunday order.
pub fn peak_hours_by_weekday(transactions: &[Transaction]) -> Vec<HourlyActivity> {
    let mut counts: HashMap<((usize, String), u8), u64> = HashMap::new();

    for tx in transactions {
        let day = (weekday_ordinal(&tx.day_of_week), tx.day_of_week.clone());
        *counts.entry((day, tx.hour_of_day)).or_default() += 1;
    }

    rank_within_groups(counts, 3, RankMethod::Dense)
        .into_iter()
        .map(|row| HourlyActivity {
            day_of_week: row.group.1,
            hour_of_day: row.key,
            txn_count: row.value,
            rank: row.rank,
            activity_label: if row.rank == 1 {
                "Peak Hour".to_string()
            } else {
                "Active Hour".to_string()
            },
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct AgeGroupAffinity {
    pub sender_age_group: String,
    pub receiver_age_group: String,
    pub txn_count: u64,
    pub pct_of_total: Decimal,
    pub segment: String,
}

/// Share of all transactions flowing between each (sender, receiver) age
/// group pair, largest share first.
pub fn age_group_affinity(transactions: &[Transaction]) -> Vec<AgeGroupAffinity> {
    let grand_total = transactions.len() as u64;
    let mut counts: HashMap<(String, String), u64> = HashMap::new();

    for tx in transactions {
        *counts
            .entry((tx.sender_age_group.clone(), tx.receiver_age_group.clone()))
            .or_default() += 1;
    }

    let mut rows = Vec::new();

    for ((sender_age_group, receiver_age_group), txn_count) in counts {
        let Some(pct_of_total) = percentage(txn_count, grand_total) else {
            continue;
        };

        let segment = if pct_of_total >= Decimal::from(8) {
            "High Value"
        } else if pct_of_total >= Decimal::from(4) {
            "Mid Value"
        } else {
            "Low Value"
        };

        rows.push(AgeGroupAffinity {
            sender_age_group,
            receiver_age_group,
            txn_count,
            pct_of_total,
            segment: segment.to_string(),
        });
    }

    rows.sort_by(|a, b| {
        b.pct_of_total
            .cmp(&a.pct_of_total)
            .then_with(|| a.sender_age_group.cmp(&b.sender_age_group))
            .then_with(|| a.receiver_age_group.cmp(&b.receiver_age_group))
    });

    rows
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionTypeSuccess {
    pub transaction_type: String,
    pub total_txns: u64,
    pub successful_txns: u64,
    pub success_rate: Option<Decimal>,
}

/// Success rate per transaction type, highest first.
pub fn success_rate_by_type(transactions: &[Transaction]) -> Vec<TransactionTypeSuccess> {
    let mut tallies: HashMap<String, (u64, u64)> = HashMap::new();

    for tx in transactions {
        let tally = tallies.entry(tx.transaction_type.clone()).or_default();
        tally.0 += 1;
        tally.1 += u64::from(tx.transaction_status == "SUCCESS");
    }

    let mut rows: Vec<TransactionTypeSuccess> = tallies
        .into_iter()
        .map(|(transaction_type, (total_txns, successful_txns))| TransactionTypeSuccess {
            transaction_type,
            total_txns,
            successful_txns,
            success_rate: percentage(successful_txns, total_txns),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.success_rate
            .cmp(&a.success_rate)
            .then_with(|| a.transaction_type.cmp(&b.transaction_type))
    });

    rows
}
