pub mod notification_field;
