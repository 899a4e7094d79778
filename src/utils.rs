use chrono::{DateTime, Datelike as _, Days, Duration, FixedOffset, NaiveDate, NaiveTime, Weekday};

/// Normalizes a timezone-aware clock event to its wall-clock time of day,
/// so an actual and an expected clock can be compared minute-wise
pub fn time_of_day(timestamp: &DateTime<FixedOffset>) -> NaiveTime {
    timestamp.time()
}

/// Shifts a time of day by a minute offset, e.g. widening an expected
/// clock-in by the grace period. Wraps around midnight.
pub fn shift_minutes(time: NaiveTime, minutes: i64) -> NaiveTime {
    time.overflowing_add_signed(Duration::minutes(minutes)).0
}

/// Whole minutes `actual` lies after `reference`; zero when it does not
pub fn minutes_after(actual: NaiveTime, reference: NaiveTime) -> i64 {
    (actual - reference).num_minutes().max(0)
}

/// Whole minutes `actual` lies before `reference`; zero when it does not
pub fn minutes_before(actual: NaiveTime, reference: NaiveTime) -> i64 {
    (reference - actual).num_minutes().max(0)
}

/// Whole minutes between a clock-in and a clock-out; zero for an inverted pair
pub fn span_minutes(start: NaiveTime, end: NaiveTime) -> i64 {
    (end - start).num_minutes().max(0)
}

/// Calendar days in `[start, end]` that fall on a weekday
pub fn working_days(mut start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();

    while start <= end {
        if start.weekday() != Weekday::Sat && start.weekday() != Weekday::Sun {
            days.push(start);
        }

        start = start.checked_add_days(Days::new(1)).unwrap();
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{Local, NaiveDate, TimeZone as _};

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_time_of_day() {
        let time = Local.with_ymd_and_hms(2026, 6, 10, 8, 30, 0).unwrap().fixed_offset();

        assert_eq!(time_of_day(&time), at(8, 30));
    }

    #[test]
    fn test_shift_minutes() {
        assert_eq!(shift_minutes(at(8, 0), 10), at(8, 10));
        assert_eq!(shift_minutes(at(8, 0), -10), at(7, 50));
        assert_eq!(shift_minutes(at(23, 55), 10), at(0, 5));
    }

    #[test]
    fn test_minute_deltas_clamp_at_zero() {
        assert_eq!(minutes_after(at(8, 15), at(8, 0)), 15);
        assert_eq!(minutes_after(at(7, 45), at(8, 0)), 0);
        assert_eq!(minutes_before(at(16, 30), at(17, 0)), 30);
        assert_eq!(minutes_before(at(17, 30), at(17, 0)), 0);
    }

    #[test]
    fn test_span_minutes() {
        assert_eq!(span_minutes(at(8, 0), at(17, 0)), 540);
        assert_eq!(span_minutes(at(17, 0), at(8, 0)), 0);
    }

    #[test]
    fn test_working_days() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();

        let days = working_days(start, end);

        assert_eq!(days.len(), 20);
        assert!(days.iter().all(|day| day.weekday() != Weekday::Sat && day.weekday() != Weekday::Sun));
    }
}
