//! Temporal surcharge evaluation
//!
//! Determines which time-based surcharges apply to a job given its pickup
//! and delivery timestamps: peak-hour window, weekend, declared holiday and
//! multi-day overtime. The holiday calendar is an injected collaborator; the
//! peak window and weekend definition are fixed policy here.
//!
//! Peak windows (07:00-09:00 and 17:00-19:00 local wall-clock, half-open)
//! are placeholder business policy inferred from the surcharge names; an
//! authoritative rule document should confirm them before they are treated
//! as load-bearing.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

/// Injected holiday-calendar collaborator.
///
/// Implementations may be backed by I/O; the engine treats the predicate as
/// a synchronous function and performs no retries or caching of its own.
pub trait HolidayCalendar: Send + Sync {
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

/// Which temporal surcharges apply to a single job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemporalFactors {
    pub peak_hour: bool,
    pub weekend: bool,
    pub holiday: bool,
    pub overtime: bool,
    /// Billable duration in days, never zero
    pub duration_days: i64,
}

/// Evaluate all temporal factors for a job.
pub fn evaluate(
    pickup_at: Option<NaiveDateTime>,
    delivery_at: Option<NaiveDateTime>,
    calendar: &dyn HolidayCalendar,
) -> TemporalFactors {
    let duration = duration_days(pickup_at, delivery_at);

    TemporalFactors {
        peak_hour: pickup_at.map(in_peak_window).unwrap_or(false),
        weekend: is_weekend(pickup_at) || is_weekend(delivery_at),
        holiday: is_declared_holiday(pickup_at, calendar)
            || is_declared_holiday(delivery_at, calendar),
        // Any multi-day job incurs the overtime surcharge once, not per
        // extra day.
        overtime: duration > 1,
        duration_days: duration,
    }
}

/// Billable duration: `max(1, ceil((delivery - pickup) / 24h))` when both
/// timestamps are present, else 1. Even a same-day job consumes one
/// billable day.
pub fn duration_days(
    pickup_at: Option<NaiveDateTime>,
    delivery_at: Option<NaiveDateTime>,
) -> i64 {
    const DAY_SECONDS: i64 = 86_400;

    match (pickup_at, delivery_at) {
        (Some(pickup), Some(delivery)) => {
            let elapsed = (delivery - pickup).num_seconds().max(0);
            ((elapsed + DAY_SECONDS - 1) / DAY_SECONDS).max(1)
        }
        _ => 1,
    }
}

/// Peak windows: [07:00, 09:00) and [17:00, 19:00) local wall-clock.
fn in_peak_window(at: NaiveDateTime) -> bool {
    let hour = at.hour();
    (7..9).contains(&hour) || (17..19).contains(&hour)
}

fn is_weekend(at: Option<NaiveDateTime>) -> bool {
    at.map(|ts| matches!(ts.weekday(), Weekday::Sat | Weekday::Sun))
        .unwrap_or(false)
}

fn is_declared_holiday(at: Option<NaiveDateTime>, calendar: &dyn HolidayCalendar) -> bool {
    at.map(|ts| calendar.is_holiday(ts.date())).unwrap_or(false)
}
