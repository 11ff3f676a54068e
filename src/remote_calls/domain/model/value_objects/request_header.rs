use axum::http::Method;
use reqwest::Url;

use crate::remote_calls::domain::model::enums::remote_call_domain_error::RemoteCallDomainError;

const DEFAULT_CONTENT_TYPE: &str = "application/json";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestHeader {
    url: Url,
    method: Method,
    content_type: String,
    authorization: Option<String>,
}

impl RequestHeader {
    pub fn new(method: &str, url: &str) -> Result<Self, RemoteCallDomainError> {
        let method = Method::from_bytes(method.trim().to_uppercase().as_bytes())
            .map_err(|_| RemoteCallDomainError::InvalidMethod(method.to_string()))?;
        let url = Url::parse(url).map_err(|_| RemoteCallDomainError::InvalidUrl(url.to_string()))?;

        Ok(Self {
            url,
            method,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            authorization: None,
        })
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn with_authorization(mut self, authorization: impl Into<String>) -> Self {
        let authorization = authorization.into();
        self.authorization = if authorization.is_empty() {
            None
        } else {
            Some(authorization)
        };
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }
}
