use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};

const SECONDS_PER_DAY: i64 = 86_400;

/// Local wall clock `seconds` after midnight on 1970-01-01.
///
/// The offset is applied to the wall clock, not the instant, so a DST change
/// inside the span does not shift the displayed time. Returns `None` when the
/// result is out of range or falls in a local-time gap.
pub fn seconds_to_date(seconds: i64) -> Option<DateTime<Local>> {
    let naive = local_epoch_plus(seconds)?;
    Local.from_local_datetime(&naive).earliest()
}

pub fn seconds_to_epoch_millis(seconds: i64) -> Option<i64> {
    seconds_to_date(seconds).map(|dt| dt.timestamp_millis())
}

/// Renders a second count as a clock reading: `HH:MM:SS`, prefixed with
/// `Nd ` once it spans a day or more. Negative input yields `None`.
pub fn format_duration_clock(seconds: i64) -> Option<String> {
    if seconds < 0 {
        return None;
    }
    let naive = local_epoch_plus(seconds)?;
    let clock = naive.format("%H:%M:%S").to_string();
    let days = seconds / SECONDS_PER_DAY;
    if days == 0 {
        Some(clock)
    } else {
        Some(format!("{}d {}", days, clock))
    }
}

fn local_epoch_plus(seconds: i64) -> Option<NaiveDateTime> {
    let midnight = NaiveDate::from_ymd_opt(1970, 1, 1)?.and_hms_opt(0, 0, 0)?;
    midnight.checked_add_signed(TimeDelta::try_seconds(seconds)?)
}

#[cfg(test)]
mod tests {
    use super::{format_duration_clock, seconds_to_date, seconds_to_epoch_millis};
    use chrono::{Local, TimeZone};

    #[test]
    fn seconds_to_date_counts_from_local_midnight() {
        let dt = seconds_to_date(3_725).expect("date");
        assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "1970-01-01 01:02:05");
    }

    #[test]
    fn seconds_to_epoch_millis_matches_local_conversion() {
        let expected = Local
            .with_ymd_and_hms(1970, 1, 2, 0, 0, 30)
            .earliest()
            .expect("local")
            .timestamp_millis();
        assert_eq!(seconds_to_epoch_millis(86_430), Some(expected));
    }

    #[test]
    fn seconds_to_date_rejects_out_of_range() {
        assert!(seconds_to_date(i64::MAX).is_none());
    }

    #[test]
    fn format_duration_clock_renders_hours_minutes_seconds() {
        assert_eq!(format_duration_clock(0).as_deref(), Some("00:00:00"));
        assert_eq!(format_duration_clock(3_725).as_deref(), Some("01:02:05"));
    }

    #[test]
    fn format_duration_clock_prefixes_days() {
        assert_eq!(format_duration_clock(90_061).as_deref(), Some("1d 01:01:01"));
    }

    #[test]
    fn format_duration_clock_rejects_negative() {
        assert!(format_duration_clock(-1).is_none());
    }
}
