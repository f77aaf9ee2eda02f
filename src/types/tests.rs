use super::{weekday_ordinal, AmountBand, DayPart, MonthKey};

use std::str::FromStr;

use anyhow::Result;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

#[test]
fn test_day_part_bucket_boundaries() {
    let test_cases = vec![
        (0, DayPart::Night),
        (4, DayPart::Night),
        (5, DayPart::Morning),
        (10, DayPart::Morning),
        (11, DayPart::Afternoon),
        (15, DayPart::Afternoon),
        (16, DayPart::Evening),
        (20, DayPart::Evening),
        (21, DayPart::Night),
        (23, DayPart::Night),
    ];

    for (hour, expected) in test_cases {
        assert_eq!(DayPart::from_hour(hour), expected, "hour {hour}");
    }
}

#[test]
fn test_day_part_ordering_is_the_report_order() {
    let mut parts = vec![
        DayPart::Night,
        DayPart::Morning,
        DayPart::Evening,
        DayPart::Afternoon,
    ];
    parts.sort();

    assert_eq!(
        parts,
        vec![
            DayPart::Morning,
            DayPart::Afternoon,
            DayPart::Evening,
            DayPart::Night
        ]
    );
}

#[test]
fn test_amount_band_edges() -> Result<()> {
    let test_cases = vec![
        ("999.99", None),
        ("1000", Some(AmountBand::From1kTo10k)),
        ("10000", Some(AmountBand::From1kTo10k)),
        ("10000.50", None),
        ("10001", Some(AmountBand::From10kTo20k)),
        ("20000", Some(AmountBand::From10kTo20k)),
        ("20001", Some(AmountBand::From20kTo30k)),
        ("30000", Some(AmountBand::From20kTo30k)),
        ("30001", Some(AmountBand::Above30k)),
        ("250000", Some(AmountBand::Above30k)),
        ("0", None),
    ];

    for (amount, expected) in test_cases {
        assert_eq!(
            AmountBand::classify(Decimal::from_str(amount)?),
            expected,
            "amount {amount}"
        );
    }

    Ok(())
}

#[test]
fn test_weekday_ordinal_fixed_ordering() {
    assert_eq!(weekday_ordinal("Monday"), 0);
    assert_eq!(weekday_ordinal("Sunday"), 6);
    assert_eq!(weekday_ordinal("Funday"), 7);
    assert!(weekday_ordinal("Tuesday") < weekday_ordinal("Saturday"));
}

#[test]
fn test_month_key_display_and_chronological_ordering() -> Result<()> {
    let december = NaiveDateTime::parse_from_str("2023-12-31 23:59:59", "%Y-%m-%d %H:%M:%S")?;
    let january = NaiveDateTime::parse_from_str("2024-01-01 00:00:00", "%Y-%m-%d %H:%M:%S")?;

    let december_key = MonthKey::from(december);
    let january_key = MonthKey::from(january);

    assert_eq!(december_key.to_string(), "2023-12");
    assert_eq!(january_key.to_string(), "2024-01");
    assert!(december_key < january_key);

    Ok(())
}
