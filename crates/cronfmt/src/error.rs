/// Which family of special operators a rule was checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `*` and `/`.
    Step,
    /// `-`.
    Range,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CronError {
    #[error("Empty argument identified")]
    EmptyInput,

    #[error("Invalid number of arguments")]
    WrongArgumentCount { got: usize },

    #[error(
        "Invalid cron expression value: {expression} (each argument should fall within '^[\\*\\/\\d,-]+$' regex)"
    )]
    Syntax { expression: String },

    #[error("Invalid cron expression value: {} {}", .expression, conflict_message(.operator))]
    ConflictingOperators {
        expression: String,
        operator: Operator,
    },

    #[error("Invalid cron expression value: {} {}", .expression, repeated_message(.operator))]
    OperatorRepeated {
        expression: String,
        operator: Operator,
    },

    #[error("Invalid {field} value: {value}")]
    OutOfRange { field: String, value: String },

    #[error("Invalid range in {field}: {expression}")]
    InvertedRange { field: String, expression: String },

    #[error("Unable to parse {token} in {field} as an integer")]
    RangeParse { field: String, token: String },

    #[error("Invalid step in {field}: {expression}")]
    InvalidStep { field: String, expression: String },

    #[error("Invalid {field} expression or not yet recognisable")]
    Unrecognized { field: String, expression: String },
}

fn conflict_message(operator: &Operator) -> &'static str {
    match operator {
        Operator::Step => "Special operator `*` cannot be used in conjunction `-` or `,`",
        Operator::Range => "Special operator `-` cannot be used in conjunction `/` `*` or `,`",
    }
}

fn repeated_message(operator: &Operator) -> &'static str {
    match operator {
        Operator::Step => "Special operator `*` or `/` can only be used once",
        Operator::Range => "Special operator `-` can only be used once",
    }
}

pub type Result<T, E = CronError> = std::result::Result<T, E>;
