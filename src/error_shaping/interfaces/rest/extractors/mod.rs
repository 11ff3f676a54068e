pub mod validated_json;
pub mod validation_errors_mapper;
