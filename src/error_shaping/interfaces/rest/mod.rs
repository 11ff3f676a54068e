pub mod extractors;
pub mod resources;
pub mod responses;
