use chrono::{DateTime, Days, NaiveDate, Timelike};

/// Relative day label for a daily forecast column. Comparison is by calendar
/// date only, never time-of-day.
#[must_use]
pub fn day_name(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        return "Today".to_string();
    }
    if Some(date) == today.checked_add_days(Days::new(1)) {
        return "Tomorrow".to_string();
    }
    date.format("%a").to_string()
}

/// 12-hour clock string (`"7:05 AM"`) for a Unix timestamp, read as local
/// time at the location: the timestamp is shifted by the provider's UTC
/// offset before the hour and minute are extracted, so the result is the
/// same regardless of the viewer's device timezone.
#[must_use]
pub fn format_time(unix_secs: i64, offset_secs: i32) -> String {
    let Some(shifted) = DateTime::from_timestamp(unix_secs + i64::from(offset_secs), 0) else {
        return String::new();
    };
    let (is_pm, hour) = shifted.hour12();
    let meridiem = if is_pm { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, shifted.minute(), meridiem)
}

/// Hour-only label (`"3PM"`) for the hourly strip, same offset-shift rule as
/// [`format_time`].
#[must_use]
pub fn format_hour(unix_secs: i64, offset_secs: i32) -> String {
    let Some(shifted) = DateTime::from_timestamp(unix_secs + i64::from(offset_secs), 0) else {
        return String::new();
    };
    let (is_pm, hour) = shifted.hour12();
    format!("{}{}", hour, if is_pm { "PM" } else { "AM" })
}

/// Column label for the hourly strip. The leading sample always reads
/// `"Now"` whatever its timestamp; the rest go through [`format_hour`].
#[must_use]
pub fn hour_label(index: usize, unix_secs: i64, offset_secs: i32) -> String {
    if index == 0 {
        "Now".to_string()
    } else {
        format_hour(unix_secs, offset_secs)
    }
}

/// Calendar date at the location for a Unix timestamp, used to bucket
/// forecast samples into days.
#[must_use]
pub fn local_date(unix_secs: i64, offset_secs: i32) -> Option<NaiveDate> {
    DateTime::from_timestamp(unix_secs + i64::from(offset_secs), 0).map(|dt| dt.date_naive())
}

/// Local hour (0-23) at the location, used to pick the noon reading.
#[must_use]
pub fn local_hour(unix_secs: i64, offset_secs: i32) -> Option<u32> {
    DateTime::from_timestamp(unix_secs + i64::from(offset_secs), 0).map(|dt| dt.hour())
}
