pub mod notification_error;
pub mod notification_outcome;
