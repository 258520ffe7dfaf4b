//! Lamp state matrix

use core::ops::Range;

pub const COLUMNS: usize = 5;
pub const ROWS: usize = 6;

/// Row carrying one bit of the weekday in the Month, MonthDay and Hour columns
pub const WEEK_DAY_ROW: usize = 5;

/// Time field shown by a column, in left-to-right screen order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Column {
    Month = 0,
    MonthDay = 1,
    Hour = 2,
    Minute = 3,
    Second = 4,
}

impl Column {
    pub const ALL: [Self; COLUMNS] = [
        Self::Month,
        Self::MonthDay,
        Self::Hour,
        Self::Minute,
        Self::Second,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// 5x6 on/off lamp states, row 0 being the least significant bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Grid {
    cells: [[bool; ROWS]; COLUMNS],
}

impl Grid {
    /// All lamps off.
    pub const fn new() -> Self {
        Self {
            cells: [[false; ROWS]; COLUMNS],
        }
    }

    pub const fn get(&self, column: Column, row: usize) -> bool {
        self.cells[column.index()][row]
    }

    pub fn set(&mut self, column: Column, row: usize, on: bool) {
        self.cells[column.index()][row] = on;
    }

    /// Lights rows `rows` of `column` from the matching bits of `value`.
    pub fn set_bits(&mut self, column: Column, rows: Range<usize>, value: u8) {
        for row in rows {
            self.set(column, row, value & (1 << row) != 0);
        }
    }

    /// Reads rows `rows` of `column` back as a number, row `n` being bit `n`.
    pub fn column_value(&self, column: Column, rows: Range<usize>) -> u8 {
        rows.filter(|&row| self.get(column, row))
            .fold(0, |value, row| value | (1 << row))
    }

    /// Weekday (1-7) spread over the week-day row: Hour is bit 0,
    /// MonthDay bit 1, Month bit 2.
    pub fn week_day(&self) -> u8 {
        u8::from(self.get(Column::Hour, WEEK_DAY_ROW))
            | u8::from(self.get(Column::MonthDay, WEEK_DAY_ROW)) << 1
            | u8::from(self.get(Column::Month, WEEK_DAY_ROW)) << 2
    }

    /// Every cell, column by column.
    pub fn cells(&self) -> impl Iterator<Item = (Column, usize, bool)> + '_ {
        Column::ALL.into_iter().flat_map(move |column| {
            (0..ROWS).map(move |row| (column, row, self.get(column, row)))
        })
    }

    pub fn lit_count(&self) -> usize {
        self.cells().filter(|&(_, _, on)| on).count()
    }
}
