//! Stateless per-type answer validation.
//!
//! `validate` is a pure function from a criterion definition and a raw
//! value to an ordered list of violations. An absent value on a required
//! criterion short-circuits with the single required violation; otherwise
//! every applicable rule for the declared type is checked and all failures
//! are collected.

use super::catalog::{CriterionDefinition, CriterionKind};
use super::domain::{AnswerValue, RawValue};

/// Maximum free-text length when a criterion declares none.
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 1000;
/// Maximum length of the optional comment attached to any answer.
pub const MAX_COMMENT_LENGTH: usize = 1000;

/// A single reason a raw value was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Violation {
    #[error("an answer is required")]
    Required,
    #[error("value must be a number")]
    NotANumber,
    #[error("value must be a whole number")]
    NotAWholeNumber,
    #[error("must be greater than or equal to {min}")]
    BelowMinimum { min: f64 },
    #[error("must be less than or equal to {max}")]
    AboveMaximum { max: f64 },
    #[error("must be between {min} and {max}")]
    OutsideRange { min: f64, max: f64 },
    #[error("must be between {min} and {max}")]
    OutsideScale { min: i64, max: i64 },
    #[error("must be one of: {}", .options.join(", "))]
    UnknownOption {
        options: &'static [&'static str],
    },
    #[error("value must be a yes/no answer")]
    NotABoolean,
    #[error("value must be text")]
    NotText,
    #[error("text may not exceed {max} characters")]
    TextTooLong { max: usize },
    #[error("text must contain at least {min} characters")]
    TextTooShort { min: usize },
    #[error("confidence level must be between 1 and 5")]
    ConfidenceOutOfRange,
    #[error("comments may not exceed {MAX_COMMENT_LENGTH} characters")]
    CommentsTooLong,
}

/// Validate a raw value against a criterion definition. Empty result means
/// the value is acceptable.
pub fn validate(definition: &CriterionDefinition, raw: Option<&RawValue>) -> Vec<Violation> {
    let raw = match raw {
        Some(raw) => raw,
        None => {
            if definition.required {
                return vec![Violation::Required];
            }
            return Vec::new();
        }
    };

    match &definition.kind {
        CriterionKind::Numeric { min, max } => validate_numeric(*min, *max, raw),
        CriterionKind::Percentage => validate_percentage(raw),
        CriterionKind::Scale { min, max, .. } => validate_scale(*min, *max, raw),
        CriterionKind::SingleChoice { options } => validate_choice(options, raw),
        CriterionKind::Boolean => validate_boolean(raw),
        CriterionKind::FreeText {
            max_length,
            min_length,
        } => validate_text(*max_length, *min_length, raw),
    }
}

/// Validate and convert in one step: the typed value is only produced when
/// no violation applies.
pub fn accept(
    definition: &CriterionDefinition,
    raw: &RawValue,
) -> Result<AnswerValue, Vec<Violation>> {
    let violations = validate(definition, Some(raw));
    if !violations.is_empty() {
        return Err(violations);
    }

    let value = match &definition.kind {
        CriterionKind::Numeric { .. } | CriterionKind::Percentage => {
            // validate() guaranteed the parse succeeds
            AnswerValue::Number(numeric_value(raw).unwrap_or_default())
        }
        CriterionKind::Scale { .. } => AnswerValue::Integer(integer_value(raw).unwrap_or_default()),
        CriterionKind::Boolean => AnswerValue::Boolean(boolean_value(raw).unwrap_or_default()),
        CriterionKind::SingleChoice { .. } | CriterionKind::FreeText { .. } => {
            AnswerValue::Text(string_form(raw))
        }
    };

    Ok(value)
}

/// Checks on the answer envelope shared by every criterion type.
pub(crate) fn validate_envelope(confidence: Option<u8>, comments: Option<&str>) -> Vec<Violation> {
    let mut violations = Vec::new();
    if let Some(level) = confidence {
        if !(1..=5).contains(&level) {
            violations.push(Violation::ConfidenceOutOfRange);
        }
    }
    if let Some(text) = comments {
        if text.chars().count() > MAX_COMMENT_LENGTH {
            violations.push(Violation::CommentsTooLong);
        }
    }
    violations
}

fn validate_numeric(min: Option<f64>, max: Option<f64>, raw: &RawValue) -> Vec<Violation> {
    let value = match numeric_value(raw) {
        Some(value) => value,
        None => return vec![Violation::NotANumber],
    };

    let mut violations = Vec::new();
    if let Some(min) = min {
        if value < min {
            violations.push(Violation::BelowMinimum { min });
        }
    }
    if let Some(max) = max {
        if value > max {
            violations.push(Violation::AboveMaximum { max });
        }
    }
    violations
}

fn validate_percentage(raw: &RawValue) -> Vec<Violation> {
    match numeric_value(raw) {
        Some(value) if (0.0..=100.0).contains(&value) => Vec::new(),
        Some(_) => vec![Violation::OutsideRange {
            min: 0.0,
            max: 100.0,
        }],
        None => vec![Violation::NotANumber],
    }
}

fn validate_scale(min: i64, max: i64, raw: &RawValue) -> Vec<Violation> {
    match integer_value(raw) {
        Some(value) if (min..=max).contains(&value) => Vec::new(),
        Some(_) => vec![Violation::OutsideScale { min, max }],
        None => vec![Violation::NotAWholeNumber],
    }
}

fn validate_choice(options: &'static [&'static str], raw: &RawValue) -> Vec<Violation> {
    let form = string_form(raw);
    if options.iter().any(|option| *option == form) {
        Vec::new()
    } else {
        vec![Violation::UnknownOption { options }]
    }
}

fn validate_boolean(raw: &RawValue) -> Vec<Violation> {
    match boolean_value(raw) {
        Some(_) => Vec::new(),
        None => vec![Violation::NotABoolean],
    }
}

fn validate_text(max_length: usize, min_length: Option<usize>, raw: &RawValue) -> Vec<Violation> {
    let text = match raw {
        RawValue::Text(text) => text,
        _ => return vec![Violation::NotText],
    };

    let mut violations = Vec::new();
    if text.chars().count() > max_length {
        violations.push(Violation::TextTooLong { max: max_length });
    }
    if let Some(min) = min_length {
        if text.trim().chars().count() < min {
            violations.push(Violation::TextTooShort { min });
        }
    }
    violations
}

fn numeric_value(raw: &RawValue) -> Option<f64> {
    match raw {
        RawValue::Number(value) => Some(*value),
        RawValue::Text(text) => text.trim().parse::<f64>().ok(),
        RawValue::Boolean(_) | RawValue::List(_) => None,
    }
}

fn integer_value(raw: &RawValue) -> Option<i64> {
    match raw {
        RawValue::Number(value) if value.fract() == 0.0 => Some(*value as i64),
        RawValue::Number(_) => None,
        RawValue::Text(text) => text.trim().parse::<i64>().ok(),
        RawValue::Boolean(_) | RawValue::List(_) => None,
    }
}

fn boolean_value(raw: &RawValue) -> Option<bool> {
    match raw {
        RawValue::Boolean(value) => Some(*value),
        RawValue::Text(text) => match text.trim().to_lowercase().as_str() {
            "oui" | "yes" | "true" | "1" => Some(true),
            "non" | "no" | "false" | "0" => Some(false),
            _ => None,
        },
        RawValue::Number(_) | RawValue::List(_) => None,
    }
}

fn string_form(raw: &RawValue) -> String {
    match raw {
        RawValue::Text(text) => text.clone(),
        RawValue::Number(value) => value.to_string(),
        RawValue::Boolean(value) => value.to_string(),
        RawValue::List(values) => values.join(", "),
    }
}
