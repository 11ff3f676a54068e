pub mod service_error_response;
