//! Immutable clock snapshot fed to the encoder

use time::PrimitiveDateTime;

/// How the hour column is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourFormat {
    /// 0-23, five hour bits
    TwentyFourHour,
    /// 1-12, four hour bits plus a PM lamp
    TwelveHour,
}

impl HourFormat {
    pub const fn is_24h(self) -> bool {
        matches!(self, Self::TwentyFourHour)
    }
}

/// One reading of the wall clock.
///
/// `hour` is always the raw 24-hour value; the 12-hour wrap is applied by
/// [`TimeSample::display_hour`]. `week_day` is already normalized to 1-7
/// with Sunday as 7, see [`normalize_week_day`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeSample {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub month: u8,
    pub month_day: u8,
    pub week_day: u8,
    pub hour_format: HourFormat,
}

impl TimeSample {
    /// Builds a sample from a calendar date-time.
    pub fn from_datetime(datetime: &PrimitiveDateTime, hour_format: HourFormat) -> Self {
        Self {
            hour: datetime.hour(),
            minute: datetime.minute(),
            second: datetime.second(),
            month: u8::from(datetime.month()),
            month_day: datetime.day(),
            week_day: normalize_week_day(datetime.weekday().number_days_from_sunday()),
            hour_format,
        }
    }

    /// Hour as it should appear on the face: raw in 24h mode, 1-12 otherwise.
    pub const fn display_hour(&self) -> u8 {
        match self.hour_format {
            HourFormat::TwentyFourHour => self.hour,
            HourFormat::TwelveHour => match self.hour % 12 {
                0 => 12,
                hour => hour,
            },
        }
    }

    pub const fn is_pm(&self) -> bool {
        self.hour >= 12
    }
}

/// Maps a Sunday-based weekday (0 = Sunday .. 6 = Saturday) to 1-7,
/// Sunday becoming 7 so the three week-day lamps are never all dark.
pub const fn normalize_week_day(days_from_sunday: u8) -> u8 {
    if days_from_sunday == 0 {
        7
    } else {
        days_from_sunday
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{Date, Month, Time};

    fn sample(hour: u8, hour_format: HourFormat) -> TimeSample {
        TimeSample {
            hour,
            minute: 0,
            second: 0,
            month: 1,
            month_day: 1,
            week_day: 1,
            hour_format,
        }
    }

    #[test]
    fn test_display_hour_24h() {
        assert_eq!(sample(0, HourFormat::TwentyFourHour).display_hour(), 0);
        assert_eq!(sample(23, HourFormat::TwentyFourHour).display_hour(), 23);
    }

    #[test]
    fn test_display_hour_12h_wraps_midnight_and_noon() {
        assert_eq!(sample(0, HourFormat::TwelveHour).display_hour(), 12);
        assert_eq!(sample(12, HourFormat::TwelveHour).display_hour(), 12);
        assert_eq!(sample(13, HourFormat::TwelveHour).display_hour(), 1);
        assert_eq!(sample(11, HourFormat::TwelveHour).display_hour(), 11);
    }

    #[test]
    fn test_pm_flag_uses_raw_hour() {
        assert!(!sample(0, HourFormat::TwelveHour).is_pm());
        assert!(!sample(11, HourFormat::TwelveHour).is_pm());
        assert!(sample(12, HourFormat::TwelveHour).is_pm());
        assert!(sample(23, HourFormat::TwelveHour).is_pm());
    }

    #[test]
    fn test_normalize_week_day() {
        assert_eq!(normalize_week_day(0), 7);
        for day in 1..=6 {
            assert_eq!(normalize_week_day(day), day);
        }
    }

    #[test]
    fn test_from_datetime() {
        // Wednesday
        let date = Date::from_calendar_date(2025, Month::October, 15).unwrap();
        let time = Time::from_hms(14, 5, 9).unwrap();
        let sample = TimeSample::from_datetime(
            &PrimitiveDateTime::new(date, time),
            HourFormat::TwentyFourHour,
        );

        assert_eq!(sample.hour, 14);
        assert_eq!(sample.minute, 5);
        assert_eq!(sample.second, 9);
        assert_eq!(sample.month, 10);
        assert_eq!(sample.month_day, 15);
        assert_eq!(sample.week_day, 3);
    }

    #[test]
    fn test_from_datetime_sunday_is_seven() {
        let date = Date::from_calendar_date(2025, Month::October, 19).unwrap();
        let sample = TimeSample::from_datetime(
            &PrimitiveDateTime::new(date, Time::MIDNIGHT),
            HourFormat::TwelveHour,
        );

        assert_eq!(sample.week_day, 7);
        assert_eq!(sample.display_hour(), 12);
    }
}
