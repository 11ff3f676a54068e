pub mod retry_policy;
