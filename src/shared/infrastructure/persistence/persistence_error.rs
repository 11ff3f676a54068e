use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("unable to connect to database {database}: {message}")]
    ConnectionFailed { database: String, message: String },

    #[error("invalid filter column {0}; use [a-z_][a-z0-9_]*")]
    InvalidFilterColumn(String),
}
