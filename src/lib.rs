//! Cron expression parser and schedule set expander.
#![deny(unsafe_code, warnings, missing_docs)]

//! This is a tiny crate, intended to:
//! - parse the classic five-field cron schedule format;
//! - expand a parsed expression into the complete, finite list of field
//!   combinations it matches.
//!
//! It is a pure text-to-data transformer: no clocks, no timezones and no job
//! scheduling are involved. _If you need the next event's timestamp or a
//! scheduler/runner, look for
//! [other similar crates](https://crates.io/search?q=cron%20scheduler)._
//!
//! ## Cron schedule format
//!
//! An expression has exactly five whitespace-separated fields: minutes,
//! hours, days of month, months and days of week.
//!
//! The table below describes valid values and patterns of each field:
//!
//! | Field        | Allowed values | Allowed patterns |
//! |--------------|----------------|------------------|
//! | Minutes      | 0-59           | * , - /          |
//! | Hours        | 0-23           | * , - /          |
//! | Day of Month | 1-31           | * , - /          |
//! | Month        | 1-12           | * , - /          |
//! | Day of Week  | 0-6 (0 is Sun) | * , - /          |
//!
//! Patterns meanings:
//! - `*` - any value of the field's domain, i.e. `0,1,2,...,59` for minutes;
//! - `a` - single value, i.e. `7`;
//! - `a,b,c` - list of two or more single values, kept in written order;
//! - `a-b` - inclusive range, i.e. `0-15`; a reversed range matches nothing;
//! - `a-b/s` - range with step, i.e. `0-30/5`;
//! - `*/s` - whole domain with step; the series counts from `0` for every
//!   field, day and month included.
//!
//! Values are plain decimals without leading zeros; named months and
//! weekdays, `@` aliases and the `? L W #` extensions are not supported.
//!
//! When both day of month and day of week are restricted, an instant
//! matching _either_ of them matches the expression (the classic cron
//! union rule), and the result list carries the entries of both branches.
//!
//! ## How to use
//!
//! The main entry point is [`get_schedules`], which parses an expression
//! and returns the ordered list of [`ScheduleEntry`] values. Each entry
//! binds only the fields the expression actually constrains: minute and
//! hour are always bound, day and month come as a pair, and weekday stands
//! alone.
//!
//! ### Example with `get_schedules`
//! ```rust
//! use cron_expand::{get_schedules, Result};
//!
//! fn schedules() -> Result<()> {
//!     let entries = get_schedules("30 12 1 1 *")?;
//!
//!     assert_eq!(entries.len(), 1);
//!     assert_eq!(entries[0].minute, Some(30));
//!     assert_eq!(entries[0].hour, Some(12));
//!     assert_eq!(entries[0].day, Some(1));
//!     assert_eq!(entries[0].month, Some(1));
//!     assert_eq!(entries[0].weekday, None);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Example with `CronExpression`
//! ```rust
//! use cron_expand::{CronExpression, Result};
//!
//! fn union_rule() -> Result<()> {
//!     // Both day-of-month and day-of-week are restricted, so the
//!     // expansion is the union of both constraints.
//!     let expression: CronExpression = "0 0 1 1 0".parse()?;
//!     let entries = expression.schedules();
//!
//!     assert_eq!(entries.len(), 2);
//!     assert_eq!(entries[0].weekday, Some(0));
//!     assert_eq!(entries[1].day, Some(1));
//!     assert_eq!(entries[1].month, Some(1));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html)
//!   and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html)
//!   trait implementations for [`CronExpression`] (as its string form) and
//!   [`ScheduleEntry`] (as a partial record of the bound fields).

/// Crate specific Error implementation.
pub mod error;
mod pattern;
/// Cron expression parser and schedule entries generator.
pub mod schedule;
mod series;
mod utils;

// Re-export of public entities.
pub use error::CronError;
pub use pattern::FieldValueType;
pub use schedule::{get_schedules, CronExpression, ScheduleEntry};

/// Convenient alias for `Result`.
pub type Result<T, E = CronError> = std::result::Result<T, E>;
