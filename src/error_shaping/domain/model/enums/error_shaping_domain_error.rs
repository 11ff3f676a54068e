use thiserror::Error;

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ErrorShapingDomainError {
    #[error("validation failure must name at least one violated field")]
    EmptyValidationFailure,

    #[error("validation field name is empty")]
    EmptyFieldName,
}
