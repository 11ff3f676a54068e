pub mod error_description;
