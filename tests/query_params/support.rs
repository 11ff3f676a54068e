use microservice_toolkit::{
    error_shaping::domain::model::enums::service_error::ServiceError,
    query_params::interfaces::rest::extractors::query_parameters::QueryParameters,
};

pub fn query(pairs: &[(&str, &str)]) -> QueryParameters {
    QueryParameters::from_pairs(pairs.iter().copied())
}

pub fn malformed_detail(error: ServiceError) -> String {
    match error {
        ServiceError::MalformedRequest(detail) => detail,
        other => panic!("expected malformed request, got {other:?}"),
    }
}
