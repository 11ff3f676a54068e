pub mod query_parameters;
