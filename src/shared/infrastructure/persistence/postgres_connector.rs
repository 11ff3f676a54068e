use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::shared::{
    domain::model::retry_policy::RetryPolicy,
    infrastructure::persistence::persistence_error::PersistenceError,
};

#[derive(Clone, Debug)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database_name: String,
}

impl DatabaseSettings {
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode=disable",
            self.username, self.password, self.host, self.port, self.database_name
        )
    }
}

pub async fn connect_with_retry(
    settings: &DatabaseSettings,
    policy: &RetryPolicy,
) -> Result<PgPool, PersistenceError> {
    tracing::info!(database = %settings.database_name, "connecting to database");

    let database_url = settings.database_url();
    let database_url = database_url.as_str();

    let pool = policy
        .run("postgres_connect", move |_| {
            PgPoolOptions::new().max_connections(5).connect(database_url)
        })
        .await
        .map_err(|e| PersistenceError::ConnectionFailed {
            database: settings.database_name.clone(),
            message: e.to_string(),
        })?;

    tracing::info!(database = %settings.database_name, "database connected");
    Ok(pool)
}
