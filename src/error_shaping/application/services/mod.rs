pub mod error_shaping_service_impl;
