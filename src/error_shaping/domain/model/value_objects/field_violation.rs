use crate::error_shaping::domain::model::enums::{
    error_shaping_domain_error::ErrorShapingDomainError, validation_rule::ValidationRule,
};

/// One broken rule on one request field, as reported by the decoder.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldViolation {
    field: String,
    rule: ValidationRule,
    rule_param: String,
}

impl FieldViolation {
    pub fn new(
        field: impl Into<String>,
        rule: ValidationRule,
        rule_param: impl Into<String>,
    ) -> Result<Self, ErrorShapingDomainError> {
        let field = field.into();
        if field.trim().is_empty() {
            return Err(ErrorShapingDomainError::EmptyFieldName);
        }

        Ok(Self {
            field,
            rule,
            rule_param: rule_param.into(),
        })
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn rule(&self) -> &ValidationRule {
        &self.rule
    }

    pub fn rule_param(&self) -> &str {
        &self.rule_param
    }
}
