//! UTC calendar-day helpers; the daily cap resets at midnight UTC.

use time::{Date, Duration, OffsetDateTime, Time};

/// Calendar date of `now` in UTC.
pub fn utc_day(now: OffsetDateTime) -> Date {
    now.to_offset(time::UtcOffset::UTC).date()
}

/// `[midnight, next midnight)` of the UTC day containing `now`.
pub fn day_window(now: OffsetDateTime) -> (OffsetDateTime, OffsetDateTime) {
    window_of(utc_day(now))
}

/// `[midnight, next midnight)` of `day`, in UTC.
pub fn window_of(day: Date) -> (OffsetDateTime, OffsetDateTime) {
    let start = day.with_time(Time::MIDNIGHT).assume_utc();
    (start, start + Duration::days(1))
}
