//! Validation and expansion of five-field cron time specifications.
//!
//! Each field (`*`, `*/N`, `A-B`, `A,B,C` or a single integer) is checked
//! against the cron grammar and its numeric bound, then expanded into the
//! space-separated list of values it denotes.
//!
//! ```
//! use cronfmt::CronRecord;
//!
//! let record = CronRecord::from_args(&["*/15", "0", "1,15", "*", "1-5", "/usr/bin/true"])?;
//! assert_eq!(record.minute(), "0 15 30 45");
//! assert_eq!(record.day_of_week(), "1 2 3 4 5");
//! # Ok::<(), cronfmt::CronError>(())
//! ```

mod error;
mod expand;
mod field;
mod range;
mod record;
mod validate;

pub use error::{CronError, Operator, Result};
pub use expand::{expand, FieldExpr};
pub use field::Field;
pub use range::{join_values, step_range};
pub use record::{CronRecord, ARG_COUNT};
pub use validate::validate;
