//! Daily to weekly resampling.

use chrono::{Datelike, Duration, NaiveDate};

use crate::types::Candle;

/// The Sunday that closes the calendar week containing `date`.
pub fn week_ending(date: NaiveDate) -> NaiveDate {
    let days_to_sunday = 6 - date.weekday().num_days_from_monday() as i64;
    date + Duration::days(days_to_sunday)
}

/// Aggregate daily candles into Sunday-ending weekly candles.
///
/// Each weekly bar is labelled with its week-ending Sunday. Weeks with no
/// trading days produce no bar. Volume is summed only when every contributing
/// day carries one.
pub fn resample_weekly(daily: &[Candle]) -> Vec<Candle> {
    let mut weeks: Vec<Candle> = Vec::new();

    for candle in daily {
        let label = week_ending(candle.date);
        match weeks.last_mut() {
            Some(week) if week.date == label => {
                week.high = week.high.max(candle.high);
                week.low = week.low.min(candle.low);
                week.close = candle.close;
                week.volume = match (week.volume, candle.volume) {
                    (Some(a), Some(b)) => Some(a + b),
                    _ => None,
                };
            }
            _ => weeks.push(Candle {
                date: label,
                ..*candle
            }),
        }
    }

    weeks
}
