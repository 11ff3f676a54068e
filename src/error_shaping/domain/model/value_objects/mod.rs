pub mod error_cause;
pub mod error_envelope;
pub mod error_item;
pub mod field_violation;
pub mod snake_case_field_name;
pub mod validation_failure;
