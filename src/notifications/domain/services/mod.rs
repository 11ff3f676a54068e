pub mod chat_notifier;
