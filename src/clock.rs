//! Software wall clock for boards without an RTC

use time::{error::ComponentRange, Date, Duration, PrimitiveDateTime, Time};

use crate::time_sample::{HourFormat, TimeSample};
use crate::watch_face::TimeSource;

/// Shared state for the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockState {
    now: PrimitiveDateTime,
    hour_format: HourFormat,
}

impl ClockState {
    pub fn new(
        date: Date,
        hour: u8,
        minute: u8,
        second: u8,
        hour_format: HourFormat,
    ) -> Result<Self, ComponentRange> {
        let time = Time::from_hms(hour, minute, second)?;
        Ok(Self {
            now: PrimitiveDateTime::new(date, time),
            hour_format,
        })
    }

    pub const fn now(&self) -> PrimitiveDateTime {
        self.now
    }

    pub const fn hour_format(&self) -> HourFormat {
        self.hour_format
    }

    pub fn set_hour_format(&mut self, hour_format: HourFormat) {
        self.hour_format = hour_format;
    }

    /// Advances one second, carrying into the date.
    pub fn tick(&mut self) {
        self.now = self.now.saturating_add(Duration::SECOND);
    }

    /// Advances one minute, leaving the seconds alone.
    pub fn add_minute(&mut self) {
        self.now = self.now.saturating_add(Duration::MINUTE);
    }
}

impl TimeSource for ClockState {
    fn sample(&self) -> TimeSample {
        TimeSample::from_datetime(&self.now, self.hour_format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    fn clock(month: Month, day: u8, hour: u8, minute: u8, second: u8) -> ClockState {
        let date = Date::from_calendar_date(2025, month, day).unwrap();
        ClockState::new(date, hour, minute, second, HourFormat::TwentyFourHour).unwrap()
    }

    #[test]
    fn test_rejects_invalid_time() {
        let date = Date::from_calendar_date(2025, Month::January, 1).unwrap();
        assert!(ClockState::new(date, 24, 0, 0, HourFormat::TwentyFourHour).is_err());
        assert!(ClockState::new(date, 0, 60, 0, HourFormat::TwentyFourHour).is_err());
    }

    #[test]
    fn test_tick_rolls_over_minute() {
        let mut clock = clock(Month::October, 15, 14, 5, 59);
        clock.tick();

        let sample = clock.sample();
        assert_eq!((sample.hour, sample.minute, sample.second), (14, 6, 0));
    }

    #[test]
    fn test_tick_rolls_over_into_next_year() {
        // Wednesday 2025-12-31 23:59:59
        let mut clock = clock(Month::December, 31, 23, 59, 59);
        clock.tick();

        assert_eq!(clock.now().year(), 2026);
        let sample = clock.sample();
        assert_eq!((sample.month, sample.month_day), (1, 1));
        assert_eq!((sample.hour, sample.minute, sample.second), (0, 0, 0));
        assert_eq!(sample.week_day, 4);
    }

    #[test]
    fn test_saturday_to_sunday() {
        let mut clock = clock(Month::October, 18, 23, 59, 59);
        assert_eq!(clock.sample().week_day, 6);
        clock.tick();
        assert_eq!(clock.sample().week_day, 7);
    }

    #[test]
    fn test_add_minute_keeps_seconds() {
        let mut clock = clock(Month::October, 15, 23, 59, 30);
        clock.add_minute();

        let sample = clock.sample();
        assert_eq!((sample.hour, sample.minute, sample.second), (0, 0, 30));
        assert_eq!(sample.month_day, 16);
    }

    #[test]
    fn test_hour_format_flows_into_sample() {
        let mut clock = clock(Month::October, 15, 0, 0, 0);
        clock.set_hour_format(HourFormat::TwelveHour);

        assert_eq!(clock.hour_format(), HourFormat::TwelveHour);
        assert_eq!(clock.sample().display_hour(), 12);
    }
}
