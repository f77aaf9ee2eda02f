use rust_decimal::{Decimal, RoundingStrategy};

/// Computes `part / whole * 100` rounded half-away-from-zero to two decimal
/// places, rendered with exactly two places (`50` becomes `50.00`).
///
/// A zero denominator returns `None`: a group with no rows has no rate, and
/// absence of data is not an error. Callers serialize `None` as an empty
/// field.
pub fn percentage(part: u64, whole: u64) -> Option<Decimal> {
    if whole == 0 {
        return None;
    }

    let mut rate = (Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(whole))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rate.rescale(2);

    Some(rate)
}

/// Average of an accumulated sum, rounded the same way as [`percentage`].
///
/// Only called with counts accumulated from at least one row; a zero count
/// falls back to zero rather than dividing.
pub fn average(sum: Decimal, count: u64) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }

    let mut avg = (sum / Decimal::from(count))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    avg.rescale(2);

    avg
}
