pub mod error_shaping_domain_error;
pub mod service_error;
pub mod status_code;
pub mod validation_rule;
