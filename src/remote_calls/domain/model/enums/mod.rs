pub mod remote_call_domain_error;
