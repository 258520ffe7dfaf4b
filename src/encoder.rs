//! Binary clock encoding and lamp rendering

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Circle, PrimitiveStyle},
};

use crate::grid::{Column, Grid, WEEK_DAY_ROW};
use crate::layout::Layout;
use crate::time_sample::TimeSample;

/// Maps a time sample to lamp states.
///
/// Seconds and minutes take six rows each. The hour takes four rows plus a
/// fifth that is hour bit 4 in 24h mode and the PM flag in 12h mode. The
/// day of month takes five rows and the month four; month row 4 stays dark.
/// Row 5 of Hour, MonthDay and Month holds weekday bits 0, 1 and 2.
pub fn encode(sample: &TimeSample) -> Grid {
    let mut grid = Grid::new();

    grid.set_bits(Column::Second, 0..6, sample.second);
    grid.set_bits(Column::Minute, 0..6, sample.minute);

    grid.set_bits(Column::Hour, 0..4, sample.display_hour());
    let hour_row_4 = if sample.hour_format.is_24h() {
        sample.hour & 0b1_0000 != 0
    } else {
        sample.is_pm()
    };
    grid.set(Column::Hour, 4, hour_row_4);
    grid.set(Column::Hour, WEEK_DAY_ROW, sample.week_day & 0b001 != 0);

    grid.set_bits(Column::MonthDay, 0..5, sample.month_day);
    grid.set(Column::MonthDay, WEEK_DAY_ROW, sample.week_day & 0b010 != 0);

    grid.set_bits(Column::Month, 0..4, sample.month);
    grid.set(Column::Month, WEEK_DAY_ROW, sample.week_day & 0b100 != 0);

    grid
}

/// Hands every lamp to `draw_lamp` as (center, radius, lit).
///
/// All 30 lamps are visited on each call, lit or not.
pub fn render<F>(grid: &Grid, layout: &Layout, mut draw_lamp: F)
where
    F: FnMut(Point, u32, bool),
{
    for (column, row, on) in grid.cells() {
        draw_lamp(layout.lamp_center(column, row), layout.radius, on);
    }
}

/// Paints the grid onto a monochrome draw target as filled circles.
pub fn draw<D>(grid: &Grid, layout: &Layout, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let lit = PrimitiveStyle::with_fill(BinaryColor::On);
    let dark = PrimitiveStyle::with_fill(BinaryColor::Off);
    let diameter = layout.diameter();

    for (column, row, on) in grid.cells() {
        Circle::with_center(layout.lamp_center(column, row), diameter)
            .into_styled(if on { lit } else { dark })
            .draw(target)?;
    }

    Ok(())
}
