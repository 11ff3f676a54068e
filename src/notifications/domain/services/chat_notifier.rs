use async_trait::async_trait;

use crate::notifications::domain::model::{
    enums::{notification_error::NotificationError, notification_outcome::NotificationOutcome},
    value_objects::notification_field::NotificationField,
};

#[async_trait]
pub trait ChatNotifier: Send + Sync {
    async fn notify(
        &self,
        message: &str,
        fields: &[NotificationField],
    ) -> Result<NotificationOutcome, NotificationError>;
}
