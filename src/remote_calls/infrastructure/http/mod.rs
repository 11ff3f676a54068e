pub mod http_remote_caller;
