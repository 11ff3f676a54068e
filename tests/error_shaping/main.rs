mod support;

mod reconstruct_error_description_tests;
mod snake_case_field_name_tests;
mod validation_errors_mapper_tests;
