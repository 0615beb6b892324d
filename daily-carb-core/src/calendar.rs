//! Month grid for the calendar view.

use chrono::{Datelike, Months, NaiveDate};

use crate::date::format_date;
use crate::models::TargetStatus;
use crate::storage::DayCollection;

/// One cell in a month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarCell {
    /// Padding before the 1st of the month.
    Blank,
    Day { day: u32, date: String },
}

/// A month laid out in Sunday-first weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCalendar {
    first: NaiveDate,
}

impl MonthCalendar {
    /// Returns `None` for an out-of-range year or month.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Month name and year, e.g. "June 2024".
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    pub fn previous(&self) -> Option<Self> {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
    }

    pub fn next(&self) -> Option<Self> {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
    }

    pub fn days_in_month(&self) -> u32 {
        match self.next() {
            Some(next) => next.first.signed_duration_since(self.first).num_days() as u32,
            // December of the last representable year
            None => 31,
        }
    }

    /// Blank cells for the weekdays before the 1st, then one cell per day.
    pub fn cells(&self) -> Vec<CalendarCell> {
        let leading = self.first.weekday().num_days_from_sunday();
        let mut cells: Vec<CalendarCell> = (0..leading).map(|_| CalendarCell::Blank).collect();

        for day in 1..=self.days_in_month() {
            if let Some(date) = self.first.with_day(day) {
                cells.push(CalendarCell::Day {
                    day,
                    date: format_date(date),
                });
            }
        }

        cells
    }

    /// Each day of the month with its calendar colour. Dates with no stored
    /// record are [`TargetStatus::NoData`].
    pub fn statuses(&self, data: &DayCollection) -> Vec<(String, TargetStatus)> {
        self.cells()
            .into_iter()
            .filter_map(|cell| match cell {
                CalendarCell::Blank => None,
                CalendarCell::Day { date, .. } => {
                    let status = data
                        .get(&date)
                        .map(|day| day.calendar_status())
                        .unwrap_or(TargetStatus::NoData);
                    Some((date, status))
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayData, MealField, MealType};

    #[test]
    fn test_invalid_month() {
        assert!(MonthCalendar::new(2024, 13).is_none());
        assert!(MonthCalendar::new(2024, 0).is_none());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(MonthCalendar::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(MonthCalendar::new(2023, 2).unwrap().days_in_month(), 28);
        assert_eq!(MonthCalendar::new(2024, 12).unwrap().days_in_month(), 31);
        assert_eq!(MonthCalendar::new(2024, 4).unwrap().days_in_month(), 30);
    }

    #[test]
    fn test_cells_start_on_weekday_of_first() {
        // 2024-06-01 is a Saturday
        let cells = MonthCalendar::new(2024, 6).unwrap().cells();
        assert_eq!(cells.len(), 6 + 30);
        assert!(cells[..6].iter().all(|c| *c == CalendarCell::Blank));
        assert_eq!(
            cells[6],
            CalendarCell::Day {
                day: 1,
                date: "2024-06-01".to_string()
            }
        );
        assert_eq!(
            cells.last(),
            Some(&CalendarCell::Day {
                day: 30,
                date: "2024-06-30".to_string()
            })
        );
    }

    #[test]
    fn test_month_starting_on_sunday_has_no_padding() {
        // 2024-09-01 is a Sunday
        let cells = MonthCalendar::new(2024, 9).unwrap().cells();
        assert!(matches!(cells[0], CalendarCell::Day { day: 1, .. }));
    }

    #[test]
    fn test_navigation() {
        let june = MonthCalendar::new(2024, 6).unwrap();
        assert_eq!(june.title(), "June 2024");

        let jan = MonthCalendar::new(2024, 1).unwrap();
        let dec = jan.previous().unwrap();
        assert_eq!((dec.year(), dec.month()), (2023, 12));
        assert_eq!(dec.next().unwrap(), jan);
    }

    #[test]
    fn test_containing() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 17).unwrap();
        assert_eq!(
            MonthCalendar::containing(date),
            MonthCalendar::new(2024, 6).unwrap()
        );
    }

    #[test]
    fn test_statuses_use_calendar_rule() {
        let mut data = DayCollection::new();
        let mut over = DayData::empty("2024-06-03");
        over.set_meal_field(MealType::Lunch, MealField::PlannedMax, 40);
        over.set_meal_field(MealType::Lunch, MealField::Actual, 60);
        data.insert(over.date.clone(), over);

        let mut within = DayData::empty("2024-06-04");
        within.set_meal_field(MealType::Lunch, MealField::Actual, 120);
        within.set_daily_target(100, 150);
        data.insert(within.date.clone(), within);

        let statuses = MonthCalendar::new(2024, 6).unwrap().statuses(&data);
        assert_eq!(statuses.len(), 30);
        assert_eq!(statuses[0], ("2024-06-01".to_string(), TargetStatus::NoData));
        assert_eq!(statuses[2].1, TargetStatus::Over);
        assert_eq!(statuses[3].1, TargetStatus::Within);
    }
}
