//! Selected date and month navigation.

use chrono::{Datelike, Local, NaiveDate};

use crate::grid::{MonthGrid, month_grid};

/// Tracks which date and month the calendar is focused on, keeping the
/// month grid in sync with every change.
///
/// This is also where out-of-range month indices get normalized; the grid
/// generator itself only accepts 0..=11.
#[derive(Debug, Clone)]
pub struct MonthCursor {
    selected_date: NaiveDate,
    year: i32,
    month0: u32,
    grid: MonthGrid,
}

impl Default for MonthCursor {
    fn default() -> Self {
        MonthCursor::at(Local::now().date_naive())
    }
}

impl MonthCursor {
    /// Cursor focused on `date` and its month.
    pub fn at(date: NaiveDate) -> Self {
        MonthCursor {
            selected_date: date,
            year: date.year(),
            month0: date.month0(),
            grid: month_grid(date.year(), date.month0()),
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month index (0 = January).
    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// The grid for the focused month.
    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    /// Select a date, following it to its month.
    pub fn set_date(&mut self, date: NaiveDate) {
        *self = MonthCursor::at(date);
    }

    /// Jump to a month index within the current year. Out-of-range
    /// indices roll into neighboring years: -1 is December of the
    /// previous year, 12 is January of the next.
    ///
    /// The selected day-of-month is kept, clamped to the target month's
    /// length (Jan 31 -> Feb 29 in a leap year).
    pub fn set_month(&mut self, index: i32) {
        let year = self.year + index.div_euclid(12);
        let month0 = index.rem_euclid(12) as u32;
        self.jump(year, month0);
    }

    /// Jump to an absolute year and zero-based month.
    pub fn navigate_to(&mut self, year: i32, month0: u32) {
        self.jump(year + (month0 / 12) as i32, month0 % 12);
    }

    pub fn next_month(&mut self) {
        self.set_month(self.month0 as i32 + 1);
    }

    pub fn prev_month(&mut self) {
        self.set_month(self.month0 as i32 - 1);
    }

    /// Snap back to today's date and month.
    pub fn today(&mut self) {
        self.set_date(Local::now().date_naive());
    }

    fn jump(&mut self, year: i32, month0: u32) {
        let day = self.selected_date.day().min(days_in_month(year, month0));
        self.selected_date = NaiveDate::from_ymd_opt(year, month0 + 1, day)
            .expect("day clamped to month length");
        self.year = year;
        self.month0 = month0;
        self.grid = month_grid(year, month0);
    }
}

/// Number of days in a month (zero-based index).
fn days_in_month(year: i32, month0: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).expect("month index in 0..=11");
    let next_first = if month0 == 11 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).expect("January is always valid")
    } else {
        NaiveDate::from_ymd_opt(year, month0 + 2, 1).expect("month index in 0..=11")
    };
    (next_first - first).num_days() as u32
}
