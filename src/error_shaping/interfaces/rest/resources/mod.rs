pub mod error_envelope_resource;
pub mod error_item_resource;
