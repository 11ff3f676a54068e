use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    routing::{get, post},
};
use chrono::NaiveDate;
use dotenvy::dotenv;
use microservice_toolkit::{
    config::{app_config::AppConfig, service_context::ServiceContext},
    error_shaping::{
        domain::model::enums::service_error::ServiceError,
        interfaces::rest::{
            extractors::validated_json::ValidatedJson,
            resources::{
                error_envelope_resource::ErrorEnvelopeResource,
                error_item_resource::ErrorItemResource,
            },
        },
    },
    notifications::{
        domain::{
            model::value_objects::notification_field::NotificationField,
            services::chat_notifier::ChatNotifier,
        },
        infrastructure::slack::slack_webhook_notifier::SlackWebhookNotifier,
    },
    query_params::interfaces::rest::extractors::query_parameters::QueryParameters,
    shared::{
        domain::services::text_normalization::clean_string,
        infrastructure::logging::{
            log_sink_layer::spawn_log_forwarder, redis_log_sink::RedisLogSink,
            tracing_setup::init_tracing,
        },
        interfaces::rest::{
            cors::default_cors_layer,
            middleware::request_logging_middleware::{BodyLogLimit, request_logging_middleware},
        },
    },
};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
struct SubscriptionRequestResource {
    #[validate(required, email)]
    email: Option<String>,

    #[validate(url)]
    website: Option<String>,

    #[validate(length(min = 3, max = 40))]
    display_name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
struct SubscriptionResource {
    email: String,
    display_name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
struct SubscriptionSearchResource {
    include_inactive: bool,
    order: String,
    since: NaiveDate,
}

#[derive(Clone)]
struct AppState {
    notifier: Option<Arc<dyn ChatNotifier>>,
}

#[derive(OpenApi)]
#[openapi(
    paths(create_subscription, search_subscriptions),
    components(
        schemas(
            SubscriptionRequestResource,
            SubscriptionResource,
            SubscriptionSearchResource,
            ErrorEnvelopeResource,
            ErrorItemResource
        )
    ),
    tags((name = "subscriptions", description = "Showcase of the toolkit helpers"))
)]
struct ApiDoc;

#[utoipa::path(
    post,
    path = "/subscriptions",
    tag = "subscriptions",
    request_body = SubscriptionRequestResource,
    responses(
        (status = 201, description = "Subscription accepted", body = SubscriptionResource),
        (status = 400, description = "Invalid payload", body = ErrorEnvelopeResource)
    )
)]
async fn create_subscription(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SubscriptionRequestResource>,
) -> Result<(StatusCode, Json<SubscriptionResource>), ServiceError> {
    let subscription = SubscriptionResource {
        email: request.email.unwrap_or_default(),
        display_name: clean_string(&request.display_name),
    };

    if let Some(notifier) = &state.notifier {
        let fields = [NotificationField::new("Email", subscription.email.clone())];
        if let Err(error) = notifier.notify("New subscription", &fields).await {
            tracing::warn!(error = %error, "subscription notification not delivered");
        }
    }

    Ok((StatusCode::CREATED, Json(subscription)))
}

#[utoipa::path(
    get,
    path = "/subscriptions",
    tag = "subscriptions",
    params(
        ("include_inactive" = Option<bool>, Query, description = "Include inactive subscriptions"),
        ("order" = Option<String>, Query, description = "asc or desc"),
        ("since" = Option<String>, Query, description = "Date formatted as YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Search criteria understood", body = SubscriptionSearchResource),
        (status = 400, description = "Invalid query parameter", body = ErrorEnvelopeResource)
    )
)]
async fn search_subscriptions(
    query: QueryParameters,
) -> Result<Json<SubscriptionSearchResource>, ServiceError> {
    Ok(Json(SubscriptionSearchResource {
        include_inactive: query.bool_or("include_inactive", false)?,
        order: query.one_of_or("order", &["asc", "desc"], "asc")?,
        since: query.date_or("since", "%Y-%m-%d", NaiveDate::default())?,
    }))
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = AppConfig::from_env();

    let mut log_sink_failure = None;
    let log_sink_layer = match &config.redis_url {
        Some(redis_url) => match RedisLogSink::connect(redis_url).await {
            Ok(sink) => Some(spawn_log_forwarder(Arc::new(sink)).0),
            Err(error) => {
                log_sink_failure = Some(error);
                None
            }
        },
        None => None,
    };

    init_tracing(&config.log_filter, log_sink_layer).expect("failed to initialize tracing");

    if let Some(error) = log_sink_failure {
        tracing::warn!(error = %error, "logs will not be forwarded to redis");
    }

    let notifier: Option<Arc<dyn ChatNotifier>> = match (
        config.slack_webhook_url.clone(),
        ServiceContext::set_up_as_internal(),
    ) {
        (Some(webhook_url), Ok(context)) => Some(Arc::new(SlackWebhookNotifier::new(
            reqwest::Client::new(),
            webhook_url,
            context,
        ))),
        (Some(_), Err(error)) => {
            tracing::warn!(error = %error, "slack notifications disabled");
            None
        }
        (None, _) => None,
    };

    let app = Router::new()
        .route("/subscriptions", post(create_subscription))
        .route("/subscriptions", get(search_subscriptions))
        .with_state(AppState { notifier })
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn_with_state(
            BodyLogLimit(config.log_body_limit),
            request_logging_middleware,
        ))
        .layer(default_cors_layer(&config.whitelisted_domain));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(address = %addr, "server listening");
    tracing::info!(url = %format!("http://localhost:{}/swagger-ui", config.port), "swagger ui available");

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
