//! Lamp placement on screen

use embedded_graphics::prelude::{Point, Size};

use crate::grid::Column;

/// Spacing and size constants for the lamp grid.
///
/// Lamps are tiled left to right, top to bottom, `spacing` pixels apart,
/// with a full gap on the left and half a gap on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub radius: u32,
    pub spacing: u32,
    pub size: Size,
}

impl Layout {
    /// 144x168 watch screen, 25 px lamps.
    pub const PEBBLE: Self = Self {
        radius: 12,
        spacing: 4,
        size: Size::new(144, 168),
    };

    /// Four chained 8x8 matrices, one pixel per lamp.
    pub const MATRIX_32X8: Self = Self {
        radius: 0,
        spacing: 1,
        size: Size::new(32, 8),
    };

    /// Center of the lamp at `column` (0-4), `row` (0-5).
    pub const fn center_of(&self, column: usize, row: usize) -> Point {
        let radius = self.radius as i32;
        let spacing = self.spacing as i32;
        let column = column as i32;
        let row = row as i32;

        Point::new(
            radius * (1 + 2 * column) + spacing * column + spacing,
            radius * (1 + 2 * row) + spacing * row + spacing / 2,
        )
    }

    pub const fn lamp_center(&self, column: Column, row: usize) -> Point {
        self.center_of(column.index(), row)
    }

    /// Pixel diameter of a filled lamp: the center pixel plus `radius` on each side.
    pub const fn diameter(&self) -> u32 {
        2 * self.radius + 1
    }
}
