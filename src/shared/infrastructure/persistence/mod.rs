pub mod filter_clause;
pub mod persistence_error;
pub mod postgres_connector;
