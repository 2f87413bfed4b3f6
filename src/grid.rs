//! Month grid generation.

use chrono::{Datelike, Duration, Local, NaiveDate};

/// Rows in the month grid.
pub const GRID_ROWS: usize = 5;
/// Columns in the month grid (days of the week, Sunday first).
pub const GRID_COLS: usize = 7;

/// The fixed 5x7 matrix of dates a month view renders.
pub type MonthGrid = [[NaiveDate; GRID_COLS]; GRID_ROWS];

/// Build the date grid for a month.
///
/// `month0` is zero-based (0 = January). Cell `[0][0]` is the Sunday on or
/// before the 1st of the month, and every following cell is one day later
/// in row-major order, so the grid usually includes leading days of the
/// previous month and trailing days of the next.
///
/// Known limitation: the grid is always 5 rows. A 31-day month that starts
/// on Friday or Saturday would need a 6th row, and its last day or two are
/// simply not present in the grid.
///
/// Out-of-range month indices are not accepted here; navigation code
/// normalizes them first (see [`MonthCursor::set_month`]).
///
/// [`MonthCursor::set_month`]: crate::cursor::MonthCursor::set_month
pub fn month_grid(year: i32, month0: u32) -> MonthGrid {
    assert!(month0 < 12, "month index must be in 0..=11");
    let first_of_month =
        NaiveDate::from_ymd_opt(year, month0 + 1, 1).expect("month index checked above");

    // 0 = Sunday, matching the grid's first column.
    let weekday_offset = first_of_month.weekday().num_days_from_sunday() as i64;

    let mut grid = [[first_of_month; GRID_COLS]; GRID_ROWS];
    for (week, row) in grid.iter_mut().enumerate() {
        for (day, cell) in row.iter_mut().enumerate() {
            let day_offset = (week * GRID_COLS + day) as i64 - weekday_offset;
            *cell = first_of_month + Duration::days(day_offset);
        }
    }
    grid
}

/// The grid for today's month, per the local clock.
pub fn current_month_grid() -> MonthGrid {
    let today = Local::now().date_naive();
    month_grid(today.year(), today.month0())
}
