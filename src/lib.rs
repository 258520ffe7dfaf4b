//! Binary calendar watch face
//!
//! Shows month, day of month, hour, minute and second as five columns of
//! binary lamps, least significant bit on top. The spare sixth row of the
//! month, day and hour columns carries the weekday.
//!
//! Everything here is board-agnostic and `no_std`; the RP2040 firmware in
//! `main.rs` wires it to a timer, a set button and a MAX7219 matrix chain.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod display;
pub mod encoder;
pub mod grid;
pub mod layout;
pub mod time_sample;
pub mod watch_face;

pub use clock::ClockState;
pub use display::MatrixFrame;
pub use encoder::{draw, encode, render};
pub use grid::{Column, Grid};
pub use layout::Layout;
pub use time_sample::{HourFormat, TimeSample};
pub use watch_face::{BatteryState, BinaryWatchFace, TimeSource, WatchFace};
