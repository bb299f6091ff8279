//! Day-offset timestamp helpers.

use chrono::{Duration, NaiveDateTime};
use rand::Rng;

/// `start + day` days, or `None` if the result is out of chrono's range.
pub fn day_offset(start: NaiveDateTime, day: u32) -> Option<NaiveDateTime> {
    start.checked_add_signed(Duration::days(i64::from(day)))
}

/// Pick a uniformly random day in `[0, day_count)` and offset `start` by it.
///
/// A zero-length window yields `start`.
pub fn random_day_in_window<R: Rng + ?Sized>(
    rng: &mut R,
    start: NaiveDateTime,
    day_count: u32,
) -> Option<NaiveDateTime> {
    if day_count == 0 {
        return Some(start);
    }
    day_offset(start, rng.gen_range(0..day_count))
}
