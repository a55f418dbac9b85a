/*
 * Month grid for the date picker overlay. A grid is always six weeks of seven
 * days so the overlay keeps a stable height while the user steps through
 * months. Days outside the displayed month are present but flagged, and days
 * outside the optional min/max bounds are not selectable.
 */
use serde::{Deserialize, Serialize};
use time::{Date, Month};

pub const GRID_WEEKS: usize = 6;
pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateBounds {
    pub min: Option<Date>,
    pub max: Option<Date>,
}

impl DateBounds {
    pub fn contains(&self, date: Date) -> bool {
        self.min.is_none_or(|min| date >= min) && self.max.is_none_or(|max| date <= max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: Date,
    pub in_month: bool,
    pub selectable: bool,
    pub selected: bool,
    pub today: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: Month,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    pub month: CalendarMonth,
    pub cells: Vec<DayCell>,
}

impl CalendarGrid {
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }
}

impl CalendarMonth {
    pub fn containing(date: Date) -> Self {
        CalendarMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> Option<Date> {
        Date::from_calendar_date(self.year, self.month, 1).ok()
    }

    /*
     * Moves by whole months; negative steps go back in time. Returns `None`
     * when the target month lies outside the range `time::Date` can represent.
     */
    pub fn step(&self, months: i32) -> Option<CalendarMonth> {
        let index = i64::from(self.year) * 12 + i64::from(u8::from(self.month)) - 1
            + i64::from(months);
        let year = i32::try_from(index.div_euclid(12)).ok()?;
        let month_number = u8::try_from(index.rem_euclid(12) + 1).ok()?;
        let target = CalendarMonth {
            year,
            month: Month::try_from(month_number).ok()?,
        };
        target.first_day().map(|_| target)
    }

    /*
     * Builds the 6x7 grid. Returns `None` only when the month lies outside the
     * range `time::Date` can represent.
     */
    pub fn grid(
        &self,
        week_start: WeekStart,
        bounds: &DateBounds,
        selected: Option<Date>,
        today: Date,
    ) -> Option<CalendarGrid> {
        let first = self.first_day()?;
        let leading = match week_start {
            WeekStart::Monday => first.weekday().number_days_from_monday(),
            WeekStart::Sunday => first.weekday().number_days_from_sunday(),
        };

        let mut day = first;
        for _ in 0..leading {
            day = day.previous_day()?;
        }

        let mut cells = Vec::with_capacity(GRID_WEEKS * DAYS_PER_WEEK);
        for index in 0..GRID_WEEKS * DAYS_PER_WEEK {
            if index > 0 {
                day = day.next_day()?;
            }
            let in_month = day.month() == self.month && day.year() == self.year;
            cells.push(DayCell {
                date: day,
                in_month,
                selectable: bounds.contains(day),
                selected: selected == Some(day),
                today: day == today,
            });
        }

        Some(CalendarGrid {
            month: *self,
            cells,
        })
    }
}
