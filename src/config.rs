//! Compile-time settings for the face and the Pico board it runs on

use time::{Date, Month};

use crate::layout::Layout;
use crate::time_sample::HourFormat;

pub const DEFAULT_HOUR_FORMAT: HourFormat = HourFormat::TwentyFourHour;

/// Layout used on the MAX7219 chain
pub const MATRIX_LAYOUT: Layout = Layout::MATRIX_32X8;

/// Power-on clock value, there is no RTC to read it from
pub const START_YEAR: i32 = 2025;
pub const START_MONTH: Month = Month::January;
pub const START_DAY: u8 = 1;
pub const START_HMS: (u8, u8, u8) = (12, 34, 56);

pub const EXTERNAL_XTAL_FREQ_HZ: u32 = 12_000_000;
pub const SPI_FREQ_HZ: u32 = 2_000_000;

pub const TICK_PERIOD_US: u32 = 1_000_000;

/// Set-button auto-repeat: first delay, then 20% shorter each step down to the floor
pub const BUTTON_REPEAT_START_US: u32 = 500_000;
pub const BUTTON_REPEAT_MIN_US: u32 = 20_000;

pub const DISPLAY_INTENSITY: u8 = 0x0;

pub fn start_date() -> Result<Date, time::error::ComponentRange> {
    Date::from_calendar_date(START_YEAR, START_MONTH, START_DAY)
}

/// Next auto-repeat delay while the button stays held.
pub const fn next_repeat_delay(delay_us: u32) -> u32 {
    if delay_us <= BUTTON_REPEAT_MIN_US {
        return delay_us;
    }
    let shorter = (delay_us as u64 * 8 / 10) as u32;
    if shorter < BUTTON_REPEAT_MIN_US {
        BUTTON_REPEAT_MIN_US
    } else {
        shorter
    }
}
