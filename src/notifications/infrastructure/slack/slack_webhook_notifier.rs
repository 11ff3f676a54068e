use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Serialize;

use crate::{
    config::service_context::ServiceContext,
    notifications::domain::{
        model::{
            enums::{
                notification_error::NotificationError, notification_outcome::NotificationOutcome,
            },
            value_objects::notification_field::NotificationField,
        },
        services::chat_notifier::ChatNotifier,
    },
};

const RFC1123_FORMAT: &str = "%a, %d %b %Y %H:%M:%S UTC";

#[derive(Debug, Serialize)]
struct SlackPayload<'a> {
    text: &'a str,
    attachments: Vec<SlackAttachment<'a>>,
}

#[derive(Debug, Serialize)]
struct SlackAttachment<'a> {
    fields: Vec<SlackField<'a>>,
}

#[derive(Debug, Serialize)]
struct SlackField<'a> {
    title: &'a str,
    value: String,
}

/// Posts messages to a Slack incoming webhook, stamped with the time and
/// the name of the sending service.
#[derive(Clone)]
pub struct SlackWebhookNotifier {
    client: Client,
    webhook_url: String,
    context: ServiceContext,
}

impl SlackWebhookNotifier {
    pub fn new(client: Client, webhook_url: impl Into<String>, context: ServiceContext) -> Self {
        Self {
            client,
            webhook_url: webhook_url.into(),
            context,
        }
    }

    async fn post(&self, payload: &SlackPayload<'_>) -> Result<(), NotificationError> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(payload)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(NotificationError::Rejected { status, body })
    }
}

#[async_trait]
impl ChatNotifier for SlackWebhookNotifier {
    async fn notify(
        &self,
        message: &str,
        fields: &[NotificationField],
    ) -> Result<NotificationOutcome, NotificationError> {
        if !self.context.is_production() {
            tracing::debug!(
                environment = %self.context.app_environment,
                "notification skipped outside production"
            );
            return Ok(NotificationOutcome::SkippedOutsideProduction);
        }

        let mut slack_fields = vec![
            SlackField {
                title: "Time",
                value: Utc::now().format(RFC1123_FORMAT).to_string(),
            },
            SlackField {
                title: "Micro Service Name",
                value: self.context.service_name.clone(),
            },
        ];
        slack_fields.extend(fields.iter().map(|field| SlackField {
            title: field.name(),
            value: field.value().to_string(),
        }));

        let payload = SlackPayload {
            text: message,
            attachments: vec![SlackAttachment {
                fields: slack_fields,
            }],
        };

        if let Err(error) = self.post(&payload).await {
            tracing::error!(error = %error, "could not send notification to slack");
            return Err(error);
        }

        Ok(NotificationOutcome::Sent)
    }
}
