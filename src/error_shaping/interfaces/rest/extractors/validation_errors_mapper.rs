use serde_json::Value;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::error_shaping::domain::model::{
    enums::{error_shaping_domain_error::ErrorShapingDomainError, validation_rule::ValidationRule},
    value_objects::{field_violation::FieldViolation, validation_failure::ValidationFailure},
};

impl TryFrom<&ValidationErrors> for ValidationFailure {
    type Error = ErrorShapingDomainError;

    fn try_from(errors: &ValidationErrors) -> Result<Self, Self::Error> {
        let mut violations = Vec::new();
        collect_violations(errors, "", &mut violations)?;

        ValidationFailure::new(violations)
    }
}

// `ValidationErrors` keeps fields in a hash map, so violations are ordered by
// field name to keep responses stable. Nested structs are flattened as
// `address.street`, list entries as `items[1].quantity`.
fn collect_violations(
    errors: &ValidationErrors,
    prefix: &str,
    violations: &mut Vec<FieldViolation>,
) -> Result<(), ErrorShapingDomainError> {
    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by(|(left, _), (right, _)| left.cmp(right));

    for (field, kind) in entries {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let (rule, rule_param) = map_rule(error);
                    violations.push(FieldViolation::new(path.clone(), rule, rule_param)?);
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_violations(nested, &path, violations)?;
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_violations(nested, &format!("{path}[{index}]"), violations)?;
                }
            }
        }
    }

    Ok(())
}

fn map_rule(error: &ValidationError) -> (ValidationRule, String) {
    match error.code.as_ref() {
        "length" | "range" => map_bound_rule(error),
        code => (ValidationRule::from_tag(code), String::new()),
    }
}

// `length` and `range` carry both bounds; the violated one decides the tag.
fn map_bound_rule(error: &ValidationError) -> (ValidationRule, String) {
    let min = error.params.get("min");
    let max = error.params.get("max");

    match (min, max) {
        (Some(min), Some(max)) => {
            let actual = error.params.get("value").and_then(measure);
            let below_min = match (actual, measure(min)) {
                (Some(actual), Some(min)) => actual < min,
                _ => true,
            };

            if below_min {
                (ValidationRule::Min, param_text(min))
            } else {
                (ValidationRule::Max, param_text(max))
            }
        }
        (Some(min), None) => (ValidationRule::Min, param_text(min)),
        (None, Some(max)) => (ValidationRule::Max, param_text(max)),
        (None, None) => (ValidationRule::Other(error.code.to_string()), String::new()),
    }
}

fn measure(value: &Value) -> Option<f64> {
    match value {
        Value::String(text) => Some(text.chars().count() as f64),
        Value::Array(items) => Some(items.len() as f64),
        Value::Number(number) => number.as_f64(),
        _ => None,
    }
}

fn param_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
