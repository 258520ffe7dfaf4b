//! Lamp placement and drawing on the two supported screens

use binary_calendar::grid::{COLUMNS, ROWS};
use binary_calendar::{
    draw, encode, render, BinaryWatchFace, ClockState, HourFormat, Layout, MatrixFrame,
    TimeSource, WatchFace,
};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use proptest::prelude::*;
use time::{Date, Month};

fn distance_squared(a: Point, b: Point) -> i64 {
    let d = a - b;
    i64::from(d.x) * i64::from(d.x) + i64::from(d.y) * i64::from(d.y)
}

proptest! {
    #[test]
    fn lamps_never_overlap(
        c1 in 0..COLUMNS, r1 in 0..ROWS,
        c2 in 0..COLUMNS, r2 in 0..ROWS,
        pebble in any::<bool>(),
    ) {
        prop_assume!((c1, r1) != (c2, r2));
        let layout = if pebble { Layout::PEBBLE } else { Layout::MATRIX_32X8 };

        let min = i64::from(2 * layout.radius + layout.spacing);
        prop_assert!(
            distance_squared(layout.center_of(c1, r1), layout.center_of(c2, r2)) >= min * min
        );
    }
}

#[test]
fn adjacent_lamps_are_one_gap_apart() {
    let layout = Layout::PEBBLE;
    let step = (2 * layout.radius + layout.spacing) as i32;

    for column in 0..COLUMNS - 1 {
        for row in 0..ROWS - 1 {
            let here = layout.center_of(column, row);
            assert_eq!(layout.center_of(column + 1, row) - here, Point::new(step, 0));
            assert_eq!(layout.center_of(column, row + 1) - here, Point::new(0, step));
        }
    }
}

#[test]
fn render_matches_draw_on_matrix() {
    let date = Date::from_calendar_date(2025, Month::October, 15).unwrap();
    let clock = ClockState::new(date, 14, 5, 9, HourFormat::TwentyFourHour).unwrap();
    let grid = encode(&clock.sample());
    let layout = Layout::MATRIX_32X8;

    let mut drawn = MatrixFrame::new();
    draw(&grid, &layout, &mut drawn).unwrap();

    let mut rendered = MatrixFrame::new();
    render(&grid, &layout, |center, _, on| {
        Pixel(center, if on { BinaryColor::On } else { BinaryColor::Off })
            .draw(&mut rendered)
            .unwrap();
    });

    assert_eq!(drawn, rendered);
}

#[test]
fn face_follows_the_clock() {
    let date = Date::from_calendar_date(2025, Month::October, 15).unwrap();
    let clock = ClockState::new(date, 14, 5, 9, HourFormat::TwentyFourHour).unwrap();
    let mut face = BinaryWatchFace::new(clock, MatrixFrame::new(), Layout::MATRIX_32X8);
    let second_lamp = |row| Layout::MATRIX_32X8.center_of(4, row);

    face.on_tick().unwrap();
    // 9 = 0b1001
    assert!(face.target().is_lit(second_lamp(0)));
    assert!(face.target().is_lit(second_lamp(3)));

    face.time_source_mut().tick();
    face.on_tick().unwrap();
    // 10 = 0b1010
    assert!(!face.target().is_lit(second_lamp(0)));
    assert!(face.target().is_lit(second_lamp(1)));
    assert!(face.target().is_lit(second_lamp(3)));
}
