
pub use fixtures::{
    SignupRequestResource, failure, shaping_service, signup_router, violation,
};
