pub mod error_shaping_service;
