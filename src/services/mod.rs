//! Stateful collaborator layer around the pure calculator

pub mod holidays;
pub mod pricing;

pub use holidays::{FixedHolidayCalendar, NoHolidays};
pub use pricing::{ConfigStore, InMemoryConfigStore, QuoteService};
