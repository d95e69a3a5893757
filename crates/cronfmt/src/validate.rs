use tracing::debug;

use crate::error::{CronError, Operator, Result};

fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '*' | '/' | ',' | '-')
}

fn count(expression: &str, needle: char) -> usize {
    expression.chars().filter(|&c| c == needle).count()
}

/// Checks a single field against the cron grammar and the inclusive
/// `[min, max]` bound. The first failing rule is reported.
pub fn validate(expression: &str, min: u32, max: u32, field: &str) -> Result<()> {
    if expression.is_empty() || !expression.chars().all(is_allowed) {
        return Err(CronError::Syntax {
            expression: expression.to_string(),
        });
    }

    let has = |c: char| expression.contains(c);

    // `*` and `/` never mix with `-` or `,`, and appear once at most.
    if has('*') || has('/') {
        if has('-') || has(',') {
            return Err(CronError::ConflictingOperators {
                expression: expression.to_string(),
                operator: Operator::Step,
            });
        }
        if count(expression, '*') > 1 || count(expression, '/') > 1 {
            return Err(CronError::OperatorRepeated {
                expression: expression.to_string(),
                operator: Operator::Step,
            });
        }
    }

    if has('-') {
        if has('/') || has(',') || has('*') {
            return Err(CronError::ConflictingOperators {
                expression: expression.to_string(),
                operator: Operator::Range,
            });
        }
        if count(expression, '-') > 1 {
            return Err(CronError::OperatorRepeated {
                expression: expression.to_string(),
                operator: Operator::Range,
            });
        }
    }

    for run in digit_runs(expression) {
        let in_range = run
            .parse::<u32>()
            .is_ok_and(|n| (min..=max).contains(&n));
        if !in_range {
            let value = run
                .parse::<u32>()
                .map(|n| n.to_string())
                .unwrap_or_else(|_| run.to_string());
            return Err(CronError::OutOfRange {
                field: field.to_string(),
                value,
            });
        }
    }

    debug!(field, expression, "field validated");
    Ok(())
}

/// Maximal runs of ASCII digits, in order of appearance.
fn digit_runs(expression: &str) -> impl Iterator<Item = &str> {
    expression
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
}
