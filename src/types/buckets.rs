use rust_decimal::Decimal;

/// Weekday names in report output order. Anything not in this list sorts last.
pub const WEEKDAY_ORDER: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Maps a weekday label to its position in [`WEEKDAY_ORDER`].
///
/// Unrecognized labels map to `WEEKDAY_ORDER.len()` so that callers sorting on
/// the ordinal push them past Sunday instead of dropping them.
pub fn weekday_ordinal(day: &str) -> usize {
    WEEKDAY_ORDER
        .iter()
        .position(|&name| name == day)
        .unwrap_or(WEEKDAY_ORDER.len())
}

/// Time-of-day bucket derived from `hour_of_day`.
///
/// The declaration order is the report output order, so `Ord` doubles as the
/// fixed categorical ordering (Morning, Afternoon, Evening, Night).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DayPart {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DayPart {
    /// Buckets an hour: Morning 5-10, Afternoon 11-15, Evening 16-20,
    /// Night 21-23 and 0-4.
    pub fn from_hour(hour: u8) -> Self {
        match hour {
            5..=10 => DayPart::Morning,
            11..=15 => DayPart::Afternoon,
            16..=20 => DayPart::Evening,
            _ => DayPart::Night,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayPart::Morning => "Morning",
            DayPart::Afternoon => "Afternoon",
            DayPart::Evening => "Evening",
            DayPart::Night => "Night",
        }
    }
}

/// Fixed amount bands used by the fraud cross-tabulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountBand {
    From1kTo10k,
    From10kTo20k,
    From20kTo30k,
    Above30k,
}

impl AmountBand {
    /// Classifies an amount into its band, or `None` when it falls outside
    /// every band. The bands have integer edges, so fractional amounts in the
    /// gaps (for example 10000.50) belong to no band.
    pub fn classify(amount: Decimal) -> Option<Self> {
        let band = if amount >= Decimal::from(1_000) && amount <= Decimal::from(10_000) {
            AmountBand::From1kTo10k
        } else if amount >= Decimal::from(10_001) && amount <= Decimal::from(20_000) {
            AmountBand::From10kTo20k
        } else if amount >= Decimal::from(20_001) && amount <= Decimal::from(30_000) {
            AmountBand::From20kTo30k
        } else if amount >= Decimal::from(30_001) {
            AmountBand::Above30k
        } else {
            return None;
        };

        Some(band)
    }
}
