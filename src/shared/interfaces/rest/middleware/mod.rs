pub mod request_logging_middleware;
