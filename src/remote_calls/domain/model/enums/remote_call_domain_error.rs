use thiserror::Error;

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum RemoteCallDomainError {
    #[error("invalid remote url {0}")]
    InvalidUrl(String),

    #[error("invalid http method {0}")]
    InvalidMethod(String),

    #[error("unable to build http client: {0}")]
    ClientBuild(String),
}
