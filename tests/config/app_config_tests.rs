use microservice_toolkit::config::app_config::AppConfig;

#[test]
fn from_env_applies_defaults() {
    temp_env::with_vars(
        [
            ("PORT", None::<&str>),
            ("RUST_LOG", None),
            ("REDIS_URL", Some("  ")),
            ("SLACK_WEBHOOK_URL", None),
            ("POSTGRES_PORT", Some("not-a-port")),
            ("LOG_BODY_LIMIT", None),
        ],
        || {
            let config = AppConfig::from_env();

            assert_eq!(config.port, 8080);
            assert_eq!(config.log_filter, "info");
            assert_eq!(config.redis_url, None);
            assert_eq!(config.slack_webhook_url, None);
            assert_eq!(config.postgres_port, 5432);
            assert_eq!(config.log_body_limit, 2 * 1024 * 1024);
        },
    );
}

#[test]
fn database_settings_build_postgres_url() {
    temp_env::with_vars(
        [
            ("POSTGRES_HOST", Some("db")),
            ("POSTGRES_PORT", Some("6543")),
            ("POSTGRES_USER", Some("billing")),
            ("POSTGRES_PASSWORD", Some("s3cret")),
            ("POSTGRES_DATABASE", Some("invoices")),
        ],
        || {
            let settings = AppConfig::from_env().database_settings();

            assert_eq!(
                settings.database_url(),
                "postgres://billing:s3cret@db:6543/invoices?sslmode=disable"
            );
        },
    );
}
