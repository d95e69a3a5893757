use serde::Serialize;
use tracing::debug;

use crate::error::{CronError, Result};
use crate::field::Field;

/// Number of positional arguments: five time fields and a command.
pub const ARG_COUNT: usize = 6;

/// Fully expanded cron line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CronRecord {
    minute: String,
    hour: String,
    day_of_month: String,
    month: String,
    day_of_week: String,
    command: String,
}

impl CronRecord {
    /// Validates and expands `minute hour day-of-month month day-of-week
    /// command`. Arguments are checked left to right and the first failure
    /// aborts the whole run.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        if args.len() != ARG_COUNT {
            return Err(CronError::WrongArgumentCount { got: args.len() });
        }

        let mut expanded = Vec::with_capacity(Field::ALL.len());
        for (field, arg) in Field::ALL.iter().zip(args) {
            let arg = arg.as_ref();
            if arg.is_empty() {
                return Err(CronError::EmptyInput);
            }
            let values = field.expand(arg)?;
            debug!(field = field.name(), expression = arg, expanded = %values, "expanded field");
            expanded.push(values);
        }

        let command = args[ARG_COUNT - 1].as_ref();
        if command.is_empty() {
            return Err(CronError::EmptyInput);
        }

        let [minute, hour, day_of_month, month, day_of_week]: [String; 5] = expanded
            .try_into()
            .map_err(|_| CronError::WrongArgumentCount { got: args.len() })?;

        Ok(Self {
            minute,
            hour,
            day_of_month,
            month,
            day_of_week,
            command: command.to_string(),
        })
    }

    pub fn minute(&self) -> &str {
        &self.minute
    }

    pub fn hour(&self) -> &str {
        &self.hour
    }

    pub fn day_of_month(&self) -> &str {
        &self.day_of_month
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn day_of_week(&self) -> &str {
        &self.day_of_week
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Expanded value for one of the five time fields.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Minute => &self.minute,
            Field::Hour => &self.hour,
            Field::DayOfMonth => &self.day_of_month,
            Field::Month => &self.month,
            Field::DayOfWeek => &self.day_of_week,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_count_must_be_six() {
        let none: [&str; 0] = [];
        assert_eq!(
            CronRecord::from_args(&none).unwrap_err(),
            CronError::WrongArgumentCount { got: 0 }
        );
        assert!(matches!(
            CronRecord::from_args(&["1", "2", "3", "4", "5"]),
            Err(CronError::WrongArgumentCount { got: 5 })
        ));
        assert!(matches!(
            CronRecord::from_args(&["*", "10", "20", "*", "12", "echo", "extra"]),
            Err(CronError::WrongArgumentCount { got: 7 })
        ));
    }

    #[test]
    fn empty_argument() {
        let err = CronRecord::from_args(&["", "10", "20", "12", "6", "echo"]).unwrap_err();
        assert_eq!(err.to_string(), "Empty argument identified");
    }

    #[test]
    fn earlier_field_error_wins_over_later_empty() {
        let err = CronRecord::from_args(&["61", "", "20", "12", "6", "echo"]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid minute value: 61");
    }

    #[test]
    fn empty_command_is_checked_after_fields() {
        let err = CronRecord::from_args(&["*", "10", "32", "12", "6", ""]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid day of month value: 32");
        let err = CronRecord::from_args(&["*", "10", "20", "12", "6", ""]).unwrap_err();
        assert_eq!(err, CronError::EmptyInput);
    }

    #[test]
    fn command_is_verbatim() {
        let record =
            CronRecord::from_args(&["*", "10", "20", "12", "6", "echo \"hello\" | tee -a /tmp/x"])
                .unwrap();
        assert_eq!(record.command(), "echo \"hello\" | tee -a /tmp/x");
        assert_eq!(record.get(Field::Hour), "10");
        assert_eq!(record.day_of_month(), "20");
    }
}
