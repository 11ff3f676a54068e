use std::{fmt, str::FromStr};

use crate::config::config_error::ConfigError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Environment {
    Dev,
    Test,
    Prod,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "DEV",
            Environment::Test => "TEST",
            Environment::Prod => "PROD",
        }
    }

    pub fn protocol(&self) -> &'static str {
        match self {
            Environment::Dev | Environment::Test => "http",
            Environment::Prod => "https",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "DEV" => Ok(Environment::Dev),
            "TEST" => Ok(Environment::Test),
            "PROD" => Ok(Environment::Prod),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

/// Where a service runs and how other services reach it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServiceContext {
    pub app_environment: Environment,
    pub app_name: String,
    pub app_domain: String,
    pub service_protocol: String,
    pub service_name: String,
    pub service_port: String,
    pub service_sub_domain: String,
    pub service_url: String,
}

impl ServiceContext {
    /// Context for a service exposed under the application domain:
    /// `<protocol>://<sub_domain>.<app_domain>:<port>`.
    pub fn set_up_as_external() -> Result<Self, ConfigError> {
        let app_name = required_var("APP_NAME")?;
        let app_domain = required_var("APP_DOMAIN")?;
        let service_port = required_var("SERVICE_PORT")?;
        let service_sub_domain = required_var("SERVICE_SUB_DOMAIN")?;
        let service_name = required_var("SERVICE_NAME")?;
        let app_environment = read_environment()?;

        let service_protocol = app_environment.protocol().to_string();
        let service_url = format!(
            "{}://{}.{}:{}",
            service_protocol, service_sub_domain, app_domain, service_port
        );

        Ok(Self {
            app_environment,
            app_name,
            app_domain,
            service_protocol,
            service_name,
            service_port,
            service_sub_domain,
            service_url,
        })
    }

    /// Context for a service only reachable inside the cluster:
    /// `<protocol>://<service_name>:<port>`.
    pub fn set_up_as_internal() -> Result<Self, ConfigError> {
        let service_name = required_var("SERVICE_NAME")?;
        let service_port = required_var("SERVICE_PORT")?;
        let app_environment = read_environment()?;

        let service_protocol = app_environment.protocol().to_string();
        let service_url = format!("{}://{}:{}", service_protocol, service_name, service_port);

        Ok(Self {
            app_environment,
            app_name: optional_var("APP_NAME"),
            app_domain: optional_var("APP_DOMAIN"),
            service_protocol,
            service_name,
            service_port,
            service_sub_domain: optional_var("SERVICE_SUB_DOMAIN"),
            service_url,
        })
    }

    pub fn is_production(&self) -> bool {
        self.app_environment == Environment::Prod
    }
}

fn read_environment() -> Result<Environment, ConfigError> {
    let environment: Environment = required_var("ENVIRONMENT")?.parse()?;
    tracing::info!(environment = %environment, "environment detected");
    Ok(environment)
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingVariable(name))
}

fn optional_var(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}
