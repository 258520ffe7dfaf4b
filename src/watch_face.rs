//! Host-facing watch face interface
//!
//! The host event loop owns a [`WatchFace`] and forwards its events to it:
//! a periodic tick, battery changes and phone connection changes. The
//! binary face only reacts to ticks; the other two are accepted and ignored.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::DrawTarget;

use crate::encoder;
use crate::layout::Layout;
use crate::time_sample::TimeSample;

/// Produces the current wall-clock reading.
pub trait TimeSource {
    fn sample(&self) -> TimeSample;
}

impl<F> TimeSource for F
where
    F: Fn() -> TimeSample,
{
    fn sample(&self) -> TimeSample {
        self()
    }
}

/// Battery reading delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryState {
    /// 0-100
    pub charge_percent: u8,
    pub is_charging: bool,
}

/// Event capabilities a watch face offers its host.
pub trait WatchFace {
    type Error;

    /// Called once per second and once at start-up.
    fn on_tick(&mut self) -> Result<(), Self::Error>;

    fn on_battery_changed(&mut self, _state: BatteryState) {}

    fn on_connection_changed(&mut self, _connected: bool) {}
}

/// Render context for the binary clock: where the time comes from, where
/// lamps are drawn and how they are laid out.
pub struct BinaryWatchFace<T, D> {
    time_source: T,
    target: D,
    layout: Layout,
}

impl<T, D> BinaryWatchFace<T, D>
where
    T: TimeSource,
    D: DrawTarget<Color = BinaryColor>,
{
    pub const fn new(time_source: T, target: D, layout: Layout) -> Self {
        Self {
            time_source,
            target,
            layout,
        }
    }

    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    pub const fn time_source(&self) -> &T {
        &self.time_source
    }

    pub fn time_source_mut(&mut self) -> &mut T {
        &mut self.time_source
    }

    pub const fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_parts(self) -> (T, D) {
        (self.time_source, self.target)
    }
}

impl<T, D> WatchFace for BinaryWatchFace<T, D>
where
    T: TimeSource,
    D: DrawTarget<Color = BinaryColor>,
{
    type Error = D::Error;

    /// Samples the clock and repaints all 30 lamps.
    fn on_tick(&mut self) -> Result<(), Self::Error> {
        let sample = self.time_source.sample();
        #[cfg(feature = "defmt")]
        defmt::trace!("render {}", sample);

        let grid = encoder::encode(&sample);
        encoder::draw(&grid, &self.layout, &mut self.target)
    }
}
