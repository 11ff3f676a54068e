use crate::error_shaping::domain::model::{
    enums::error_shaping_domain_error::ErrorShapingDomainError,
    value_objects::field_violation::FieldViolation,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidationFailure(Vec<FieldViolation>);

impl ValidationFailure {
    pub fn new(violations: Vec<FieldViolation>) -> Result<Self, ErrorShapingDomainError> {
        if violations.is_empty() {
            return Err(ErrorShapingDomainError::EmptyValidationFailure);
        }

        Ok(Self(violations))
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }
}
