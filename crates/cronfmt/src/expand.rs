use tracing::debug;

use crate::error::{CronError, Result};
use crate::range::{join_values, step_range};

/// The five shapes a field expression can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldExpr<'a> {
    /// `*`
    Wildcard,
    /// `A-B`
    Range(&'a str, &'a str),
    /// `*/N`
    SteppedWildcard(&'a str),
    /// `A,B[,C...]`
    List(Vec<&'a str>),
    /// `N`
    Single(&'a str),
}

fn is_number(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

impl<'a> FieldExpr<'a> {
    /// Classifies by scanning characters; `None` when no shape matches.
    pub fn classify(expression: &'a str) -> Option<Self> {
        if expression == "*" {
            return Some(FieldExpr::Wildcard);
        }
        if let Some(step) = expression.strip_prefix("*/") {
            return is_number(step).then_some(FieldExpr::SteppedWildcard(step));
        }
        if let Some((start, end)) = expression.split_once('-') {
            return (is_number(start) && is_number(end)).then_some(FieldExpr::Range(start, end));
        }
        if expression.contains(',') {
            let tokens: Vec<&str> = expression.split(',').collect();
            return tokens
                .iter()
                .all(|t| is_number(t))
                .then_some(FieldExpr::List(tokens));
        }
        is_number(expression).then_some(FieldExpr::Single(expression))
    }
}

fn parse_number(token: &str, field: &str) -> Result<u32> {
    token.parse().map_err(|_| CronError::RangeParse {
        field: field.to_string(),
        token: token.to_string(),
    })
}

/// Expands a field expression into its space-separated values.
///
/// Expects `expression` to have passed [`crate::validate`]; lists and single
/// values are not re-checked against the bound and keep their original text.
pub fn expand(expression: &str, min: u32, max: u32, field: &str) -> Result<String> {
    let expression = expression.trim();
    let Some(parsed) = FieldExpr::classify(expression) else {
        return Err(CronError::Unrecognized {
            field: field.to_string(),
            expression: expression.to_string(),
        });
    };
    debug!(field, expression, shape = ?parsed, "classified field");

    let expanded = match parsed {
        FieldExpr::Wildcard => join_values(&step_range(min, max, 1)),
        FieldExpr::Range(start, end) => {
            let start = parse_number(start, field)?;
            let end = parse_number(end, field)?;
            if start > end {
                return Err(CronError::InvertedRange {
                    field: field.to_string(),
                    expression: expression.to_string(),
                });
            }
            join_values(&step_range(start, end, 1))
        }
        FieldExpr::SteppedWildcard(step) => {
            let step = parse_number(step, field)?;
            if step == 0 {
                return Err(CronError::InvalidStep {
                    field: field.to_string(),
                    expression: expression.to_string(),
                });
            }
            join_values(&step_range(min, max, step))
        }
        FieldExpr::List(tokens) => tokens.join(" "),
        FieldExpr::Single(value) => value.to_string(),
    };
    Ok(expanded)
}
