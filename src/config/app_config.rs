use crate::shared::infrastructure::persistence::postgres_connector::DatabaseSettings;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub whitelisted_domain: String,
    pub log_filter: String,
    pub log_body_limit: usize,
    pub redis_url: Option<String>,
    pub slack_webhook_url: Option<String>,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_database: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            whitelisted_domain: std::env::var("WHITELISTED_DOMAIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            log_filter: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_body_limit: std::env::var("LOG_BODY_LIMIT")
                .unwrap_or_else(|_| "2097152".to_string())
                .parse()
                .unwrap_or(2 * 1024 * 1024),
            redis_url: non_empty_var("REDIS_URL"),
            slack_webhook_url: non_empty_var("SLACK_WEBHOOK_URL"),
            postgres_host: std::env::var("POSTGRES_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            postgres_port: std::env::var("POSTGRES_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .unwrap_or(5432),
            postgres_user: std::env::var("POSTGRES_USER")
                .unwrap_or_else(|_| "postgres".to_string()),
            postgres_password: std::env::var("POSTGRES_PASSWORD")
                .unwrap_or_else(|_| "admin".to_string()),
            postgres_database: std::env::var("POSTGRES_DATABASE")
                .unwrap_or_else(|_| "postgres".to_string()),
        }
    }

    pub fn database_settings(&self) -> DatabaseSettings {
        DatabaseSettings {
            host: self.postgres_host.clone(),
            port: self.postgres_port,
            username: self.postgres_user.clone(),
            password: self.postgres_password.clone(),
            database_name: self.postgres_database.clone(),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
