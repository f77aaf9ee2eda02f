pub mod behavior;
mod errors;
pub mod fraud;
pub mod ranking;
pub mod rates;
pub mod spending;

use std::io::Write;
use std::str::FromStr;

use serde::Serialize;

use crate::models::Transaction;

pub use errors::ReportError;

/// The report catalogue. Each variant is one independent, parameterless
/// computation over the full transaction snapshot; none depends on another
/// and all are pure reads, so any subset may run concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    TopMerchantsByState,
    TopMerchantsByAgeGroup,
    DevicePreferenceByAgeGroup,
    TopFraudBankPairs,
    FraudRateByState,
    BankRiskProfile,
    FraudByDaypart,
    FraudAmountBandsByAgeGroup,
    DeviceNetworkUsage,
    TopMerchantsByDevice,
    PeakHoursByWeekday,
    AgeGroupAffinity,
    MonthlySpendMovingAverage,
    CumulativeMonthlySpend,
    SuccessRateByType,
    FraudRateByStatus,
    TopSpendersByType,
}

impl Report {
    pub const ALL: [Report; 17] = [
        Report::TopMerchantsByState,
        Report::TopMerchantsByAgeGroup,
        Report::DevicePreferenceByAgeGroup,
        Report::TopFraudBankPairs,
        Report::FraudRateByState,
        Report::BankRiskProfile,
        Report::FraudByDaypart,
        Report::FraudAmountBandsByAgeGroup,
        Report::DeviceNetworkUsage,
        Report::TopMerchantsByDevice,
        Report::PeakHoursByWeekday,
        Report::AgeGroupAffinity,
        Report::MonthlySpendMovingAverage,
        Report::CumulativeMonthlySpend,
        Report::SuccessRateByType,
        Report::FraudRateByStatus,
        Report::TopSpendersByType,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Report::TopMerchantsByState => "top-merchants-by-state",
            Report::TopMerchantsByAgeGroup => "top-merchants-by-age-group",
            Report::DevicePreferenceByAgeGroup => "device-preference-by-age-group",
            Report::TopFraudBankPairs => "top-fraud-bank-pairs",
            Report::FraudRateByState => "fraud-rate-by-state",
            Report::BankRiskProfile => "bank-risk-profile",
            Report::FraudByDaypart => "fraud-by-daypart",
            Report::FraudAmountBandsByAgeGroup => "fraud-amount-bands-by-age-group",
            Report::DeviceNetworkUsage => "device-network-usage",
            Report::TopMerchantsByDevice => "top-merchants-by-device",
            Report::PeakHoursByWeekday => "peak-hours-by-weekday",
            Report::AgeGroupAffinity => "age-group-affinity",
            Report::MonthlySpendMovingAverage => "monthly-spend-moving-average",
            Report::CumulativeMonthlySpend => "cumulative-monthly-spend",
            Report::SuccessRateByType => "success-rate-by-type",
            Report::FraudRateByStatus => "fraud-rate-by-status",
            Report::TopSpendersByType => "top-spenders-by-type",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Report::TopMerchantsByState => "top-3 merchant categories by revenue per state",
            Report::TopMerchantsByAgeGroup => "top-3 merchant categories by average spend per age group",
            Report::DevicePreferenceByAgeGroup => "top-2 devices per age group by transaction count",
            Report::TopFraudBankPairs => "top-10 bank pairs by fraud count",
            Report::FraudRateByState => "fraud percentage per sender state",
            Report::BankRiskProfile => "fraud rate and risk tier per sender bank",
            Report::FraudByDaypart => "weekday vs weekend fraud per time-of-day bucket",
            Report::FraudAmountBandsByAgeGroup => "fraud counts per age group across amount bands",
            Report::DeviceNetworkUsage => "non-fraud transaction counts per device and network",
            Report::TopMerchantsByDevice => "top-3 merchant categories by spend per device",
            Report::PeakHoursByWeekday => "three busiest hours of each weekday",
            Report::AgeGroupAffinity => "transaction share per sender/receiver age group pair",
            Report::MonthlySpendMovingAverage => "trailing moving average of monthly spend per age group",
            Report::CumulativeMonthlySpend => "running total of monthly spend per age group",
            Report::SuccessRateByType => "success rate per transaction type",
            Report::FraudRateByStatus => "fraud percentage per transaction status",
            Report::TopSpendersByType => "age groups ranked by average spend per transaction type",
        }
    }

    /// Evaluates the report over the snapshot and writes it as CSV (header
    /// plus rows). An empty snapshot produces empty output.
    pub fn write_csv<W: Write>(
        &self,
        transactions: &[Transaction],
        out: W,
    ) -> Result<(), ReportError> {
        match self {
            Report::TopMerchantsByState => {
                write_rows(out, spending::top_merchants_by_state(transactions))
            }
            Report::TopMerchantsByAgeGroup => {
                write_rows(out, spending::top_merchants_by_age_group(transactions))
            }
            Report::DevicePreferenceByAgeGroup => {
                write_rows(out, behavior::device_preference_by_age_group(transactions))
            }
            Report::TopFraudBankPairs => {
                write_rows(out, fraud::top_fraud_bank_pairs(transactions))
            }
            Report::FraudRateByState => write_rows(out, fraud::fraud_rate_by_state(transactions)),
            Report::BankRiskProfile => write_rows(out, fraud::bank_risk_profile(transactions)),
            Report::FraudByDaypart => write_rows(out, fraud::fraud_by_daypart(transactions)),
            Report::FraudAmountBandsByAgeGroup => {
                write_rows(out, fraud::fraud_amount_bands_by_age_group(transactions))
            }
            Report::DeviceNetworkUsage => {
                write_rows(out, behavior::device_network_usage(transactions))
            }
            Report::TopMerchantsByDevice => {
                write_rows(out, spending::top_merchants_by_device(transactions))
            }
            Report::PeakHoursByWeekday => {
                write_rows(out, behavior::peak_hours_by_weekday(transactions))
            }
            Report::AgeGroupAffinity => write_rows(out, behavior::age_group_affinity(transactions)),
            Report::MonthlySpendMovingAverage => {
                write_rows(out, spending::monthly_spend_moving_average(transactions))
            }
            Report::CumulativeMonthlySpend => {
                write_rows(out, spending::cumulative_monthly_spend(transactions))
            }
            Report::SuccessRateByType => {
                write_rows(out, behavior::success_rate_by_type(transactions))
            }
            Report::FraudRateByStatus => write_rows(out, fraud::fraud_rate_by_status(transactions)),
            Report::TopSpendersByType => {
                write_rows(out, spending::top_spenders_by_type(transactions))
            }
        }
    }
}

impl FromStr for Report {
    type Err = ReportError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Report::ALL
            .iter()
            .find(|report| report.name() == name)
            .copied()
            .ok_or_else(|| ReportError::UnknownReport {
                name: name.to_string(),
            })
    }
}

fn write_rows<W: Write, R: Serialize>(out: W, rows: Vec<R>) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_writer(out);

    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;

    Ok(())
}
