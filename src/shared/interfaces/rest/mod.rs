pub mod cors;
pub mod middleware;
