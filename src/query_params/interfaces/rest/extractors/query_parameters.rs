use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use chrono::NaiveDate;

use crate::error_shaping::domain::model::enums::service_error::ServiceError;

/// Raw query string of a request with typed, defaulted accessors.
///
/// A key present with an empty value is treated as absent. Every parsing
/// failure is a `ServiceError::MalformedRequest` naming the parameter.
#[derive(Clone, Debug, Default)]
pub struct QueryParameters(HashMap<String, String>);

impl QueryParameters {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn bool_or(&self, name: &str, default: bool) -> Result<bool, ServiceError> {
        let Some(raw) = self.get(name) else {
            return Ok(default);
        };

        parse_bool(raw).ok_or_else(|| {
            ServiceError::malformed(format!(
                "query parameter '{}' value should be true or false (omit the key and default value '{}' will be applied)",
                name, default
            ))
        })
    }

    pub fn one_of_or(
        &self,
        name: &str,
        accepted: &[&str],
        default: &str,
    ) -> Result<String, ServiceError> {
        let Some(raw) = self.get(name) else {
            return Ok(default.to_string());
        };

        if accepted.contains(&raw) {
            return Ok(raw.to_string());
        }

        let mut listed = accepted.to_vec();
        listed.sort_unstable();
        Err(ServiceError::malformed(format!(
            "query parameter '{}' value should be one of {} (omit the key and default value '{}' will be applied)",
            name,
            listed.join(", "),
            default
        )))
    }

    pub fn mandatory_i64(&self, name: &str) -> Result<i64, ServiceError> {
        let raw = self.mandatory(name)?;
        raw.parse().map_err(|_| {
            ServiceError::malformed(format!(
                "query parameter '{}' value should be an integer (this value is mandatory)",
                name
            ))
        })
    }

    pub fn mandatory_u64(&self, name: &str) -> Result<u64, ServiceError> {
        let raw = self.mandatory(name)?;
        raw.parse().map_err(|_| {
            ServiceError::malformed(format!(
                "query parameter '{}' value should be a positive integer (this value is mandatory)",
                name
            ))
        })
    }

    /// `format` uses chrono's strftime syntax, e.g. `%Y-%m-%d`.
    pub fn date_or(
        &self,
        name: &str,
        format: &str,
        default: NaiveDate,
    ) -> Result<NaiveDate, ServiceError> {
        let Some(raw) = self.get(name) else {
            return Ok(default);
        };

        NaiveDate::parse_from_str(raw, format).map_err(|_| {
            ServiceError::malformed(format!(
                "query parameter '{}' value should be a date with the format {} (omit the key and default value '{}' will be applied)",
                name,
                format,
                default.format(format)
            ))
        })
    }

    fn mandatory(&self, name: &str) -> Result<&str, ServiceError> {
        self.get(name).ok_or_else(|| {
            ServiceError::malformed(format!("query parameter '{}' is mandatory", name))
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for QueryParameters
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(values) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ServiceError::malformed(rejection.body_text()))?;

        Ok(Self(values))
    }
}
