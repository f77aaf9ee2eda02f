use std::collections::{BTreeMap, HashMap};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::Transaction;
use crate::reports::ranking::{rank_within_groups, RankMethod};
use crate::reports::rates::average;
use crate::types::MonthKey;

#[derive(Debug, Clone, Serialize)]
pub struct StateMerchantRevenue {
    pub rank: u32,
    pub sender_state: String,
    pub merchant_category: String,
    pub total_revenue: Decimal,
}

/// Top-3 merchant categories by total revenue within each sender state.
pub fn top_merchants_by_state(transactions: &[Transaction]) -> Vec<StateMerchantRevenue> {
    let mut totals: HashMap<(String, String), Decimal> = HashMap::new();

    for tx in transactions {
        *totals
            .entry((tx.sender_state.clone(), tx.merchant_category.clone()))
            .or_default() += tx.amount;
    }

    rank_within_groups(totals, 3, RankMethod::Competition)
        .into_iter()
        .map(|row| StateMerchantRevenue {
            rank: row.rank,
            sender_state: row.group,
            merchant_category: row.key,
            total_revenue: row.value,
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct AgeGroupMerchantSpend {
    pub rank: u32,
    pub sender_age_group: String,
    pub merchant_category: String,
    pub avg_spend: Decimal,
}

/// Top-3 merchant categories by average spend within each sender age group.
pub fn top_merchants_by_age_group(transactions: &[Transaction]) -> Vec<AgeGroupMerchantSpend> {
    let averages = grouped_averages(transactions, |tx| {
        (tx.sender_age_group.clone(), tx.merchant_category.clone())
    });

    rank_within_groups(averages, 3, RankMethod::Competition)
        .into_iter()
        .map(|row| AgeGroupMerchantSpend {
            rank: row.rank,
            sender_age_group: row.group,
            merchant_category: row.key,
            avg_spend: row.value,
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct DeviceMerchantSpend {
    pub rank: u32,
    pub device_type: String,
    pub merchant_category: String,
    pub total_spend: Decimal,
}

/// Top-3 merchant categories by total spend within each device type.
pub fn top_merchants_by_device(transactions: &[Transaction]) -> Vec<DeviceMerchantSpend> {
    let mut totals: HashMap<(String, String), Decimal> = HashMap::new();

    for tx in transactions {
        *totals
            .entry((tx.device_type.clone(), tx.merchant_category.clone()))
            .or_default() += tx.amount;
    }

    rank_within_groups(totals, 3, RankMethod::Competition)
        .into_iter()
        .map(|row| DeviceMerchantSpend {
            rank: row.rank,
            device_type: row.group,
            merchant_category: row.key,
            total_spend: row.value,
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlySpendTrend {
    pub sender_age_group: String,
    pub month: String,
    pub monthly_spend: Decimal,
    pub moving_avg: Decimal,
}

/// Trailing moving average of monthly spend per sender age group.
///
/// Each month averages itself with up to 3 preceding months of the same age
/// group; the window shrinks at the start of a group instead of padding.
pub fn monthly_spend_moving_average(transactions: &[Transaction]) -> Vec<MonthlySpendTrend> {
    let mut rows = Vec::new();

    for (age_group, months) in monthly_totals(transactions) {
        for (index, (month, spend)) in months.iter().enumerate() {
            let window = &months[index.saturating_sub(3)..=index];
            let sum: Decimal = window.iter().map(|(_, spend)| *spend).sum();
            let moving_avg = (sum / Decimal::from(window.len() as u64))
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

            rows.push(MonthlySpendTrend {
                sender_age_group: age_group.clone(),
                month: month.to_string(),
                monthly_spend: *spend,
                moving_avg,
            });
        }
    }

    rows
}

#[derive(Debug, Clone, Serialize)]
pub struct CumulativeMonthlySpend {
    pub sender_age_group: String,
    pub month: String,
    pub monthly_spend: Decimal,
    pub cumulative_spend: Decimal,
}

/// Running total of monthly spend per sender age group, chronological order.
pub fn cumulative_monthly_spend(transactions: &[Transaction]) -> Vec<CumulativeMonthlySpend> {
    let mut rows = Vec::new();

    for (age_group, months) in monthly_totals(transactions) {
        let mut running_total = Decimal::ZERO;

        for (month, spend) in months {
            running_total += spend;

            rows.push(CumulativeMonthlySpend {
                sender_age_group: age_group.clone(),
                month: month.to_string(),
                monthly_spend: spend,
                cumulative_spend: running_total,
            });
        }
    }

    rows
}

#[derive(Debug, Clone, Serialize)]
pub struct AgeGroupTypeSpender {
    pub transaction_type: String,
    pub rank: u32,
    pub sender_age_group: String,
    pub avg_spend: Decimal,
    pub spender_label: String,
}

/// Ranks sender age groups by average spend within each transaction type,
/// tagging the top rank.
pub fn top_spenders_by_type(transactions: &[Transaction]) -> Vec<AgeGroupTypeSpender> {
    let averages = grouped_averages(transactions, |tx| {
        (tx.transaction_type.clone(), tx.sender_age_group.clone())
    });

    rank_within_groups(averages, u32::MAX, RankMethod::Competition)
        .into_iter()
        .map(|row| AgeGroupTypeSpender {
            transaction_type: row.group,
            rank: row.rank,
            sender_age_group: row.key,
            avg_spend: row.value,
            spender_label: if row.rank == 1 {
                "Top Spender".to_string()
            } else {
                "Regular".to_string()
            },
        })
        .collect()
}

/// Average amount per (group, sub-key) pair.
fn grouped_averages<F>(
    transactions: &[Transaction],
    key: F,
) -> HashMap<(String, String), Decimal>
where
    F: Fn(&Transaction) -> (String, String),
{
    let mut accumulators: HashMap<(String, String), (Decimal, u64)> = HashMap::new();

    for tx in transactions {
        let entry = accumulators.entry(key(tx)).or_default();
        entry.0 += tx.amount;
        entry.1 += 1;
    }

    accumulators
        .into_iter()
        .map(|(key, (sum, count))| (key, average(sum, count)))
        .collect()
}

/// Spend rolled up by (sender age group, calendar month), both ascending.
fn monthly_totals(transactions: &[Transaction]) -> BTreeMap<String, Vec<(MonthKey, Decimal)>> {
    let mut totals: BTreeMap<(String, MonthKey), Decimal> = BTreeMap::new();

    for tx in transactions {
        *totals
            .entry((tx.sender_age_group.clone(), MonthKey::from(tx.timestamp)))
            .or_default() += tx.amount;
    }

    let mut grouped: BTreeMap<String, Vec<(MonthKey, Decimal)>> = BTreeMap::new();

    for ((age_group, month), spend) in totals {
        grouped.entry(age_group).or_default().push((month, spend));
    }

    grouped
}
