//! Frame buffer for four chained MAX7219 8x8 matrices (FC16 modules)

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

pub const DEVICES: usize = 4;
pub const WIDTH: u32 = 32;
pub const HEIGHT: u32 = 8;

/// 32x8 monochrome frame, one `u32` per row with bit 31 as the leftmost pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatrixFrame {
    rows: [u32; HEIGHT as usize],
}

impl MatrixFrame {
    pub const fn new() -> Self {
        Self {
            rows: [0; HEIGHT as usize],
        }
    }

    pub fn is_lit(&self, point: Point) -> bool {
        match Self::bit(point) {
            Some((row, mask)) => self.rows[row] & mask != 0,
            None => false,
        }
    }

    /// Splits the frame into per-device row buffers, device 0 showing
    /// columns 0-7 with the MSB on the left.
    pub fn device_buffers(&self) -> [[u8; 8]; DEVICES] {
        let mut device_buffers = [[0u8; 8]; DEVICES];
        for (dev_idx, buffer) in device_buffers.iter_mut().enumerate() {
            let shift = 24 - dev_idx * 8;
            for (r, byte) in buffer.iter_mut().enumerate() {
                *byte = ((self.rows[r] >> shift) & 0xFF) as u8;
            }
        }

        device_buffers
    }

    fn bit(point: Point) -> Option<(usize, u32)> {
        let x = u32::try_from(point.x).ok().filter(|&x| x < WIDTH)?;
        let y = u32::try_from(point.y).ok().filter(|&y| y < HEIGHT)?;
        Some((y as usize, 1 << (31 - x)))
    }
}

impl OriginDimensions for MatrixFrame {
    fn size(&self) -> Size {
        Size::new(WIDTH, HEIGHT)
    }
}

impl DrawTarget for MatrixFrame {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        // Off-screen pixels are dropped
        for Pixel(point, color) in pixels {
            if let Some((row, mask)) = Self::bit(point) {
                match color {
                    BinaryColor::On => self.rows[row] |= mask,
                    BinaryColor::Off => self.rows[row] &= !mask,
                }
            }
        }
        Ok(())
    }
}
