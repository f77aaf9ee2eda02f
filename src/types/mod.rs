mod buckets;
mod calendar;
#[cfg(test)]
mod tests;

pub use buckets::{AmountBand, DayPart, weekday_ordinal, WEEKDAY_ORDER};
pub use calendar::MonthKey;
