pub mod request_header;
