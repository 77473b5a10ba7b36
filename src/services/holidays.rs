//! Holiday-calendar collaborators
//!
//! The engine only requires [`HolidayCalendar`]; these are the
//! implementations shipped with the crate. Hosts with a real calendar
//! service implement the trait themselves and should batch lookups per
//! date rather than per request.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::core::quote::surcharge::HolidayCalendar;

/// Null calendar: no date is ever a holiday.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn is_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}

/// Calendar backed by a fixed set of declared holiday dates.
#[derive(Debug, Clone, Default)]
pub struct FixedHolidayCalendar {
    dates: HashSet<NaiveDate>,
}

impl FixedHolidayCalendar {
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    pub fn declare(&mut self, date: NaiveDate) {
        self.dates.insert(date);
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl HolidayCalendar for FixedHolidayCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}
