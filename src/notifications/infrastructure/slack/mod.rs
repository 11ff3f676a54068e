pub mod slack_webhook_notifier;
