use thiserror::Error;

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVariable(&'static str),

    #[error("unknown value {0} for ENVIRONMENT variable")]
    UnknownEnvironment(String),
}
