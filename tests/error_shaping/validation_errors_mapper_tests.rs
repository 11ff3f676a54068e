use microservice_toolkit::error_shaping::{
    application::services::error_shaping_service_impl::ErrorShapingServiceImpl,
    domain::{
        model::{
            enums::validation_rule::ValidationRule,
            value_objects::validation_failure::ValidationFailure,
        },
        services::error_shaping_service::ErrorShapingService,
    },
};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
struct ShippingAddressResource {
    #[validate(length(min = 3))]
    street: String,
}

#[derive(Debug, Deserialize, Validate)]
struct OrderLineResource {
    #[validate(range(min = 1))]
    quantity: i32,
}

#[derive(Debug, Deserialize, Validate)]
struct OrderRequestResource {
    #[validate(email)]
    email: String,

    #[validate(nested)]
    address: ShippingAddressResource,

    #[validate(nested)]
    lines: Vec<OrderLineResource>,
}

fn order(email: &str, street: &str, quantities: &[i32]) -> OrderRequestResource {
    OrderRequestResource {
        email: email.to_string(),
        address: ShippingAddressResource {
            street: street.to_string(),
        },
        lines: quantities
            .iter()
            .map(|quantity| OrderLineResource {
                quantity: *quantity,
            })
            .collect(),
    }
}

fn summary(failure: &ValidationFailure) -> Vec<(String, ValidationRule, String)> {
    failure
        .violations()
        .iter()
        .map(|violation| {
            (
                violation.field().to_string(),
                violation.rule().clone(),
                violation.rule_param().to_string(),
            )
        })
        .collect()
}

#[test]
fn nested_struct_and_list_violations_are_flattened() {
    let errors = order("nope", "x", &[2, 0])
        .validate()
        .expect_err("invalid order");

    let failure = ValidationFailure::try_from(&errors).expect("failure");

    assert_eq!(
        summary(&failure),
        vec![
            ("address.street".to_string(), ValidationRule::Min, "3".to_string()),
            ("email".to_string(), ValidationRule::Email, String::new()),
            ("lines[1].quantity".to_string(), ValidationRule::Min, "1".to_string()),
        ]
    );
}

#[test]
fn only_nested_violations_still_build_a_failure() {
    let errors = order("ana@example.com", "x", &[1])
        .validate()
        .expect_err("invalid order");

    let failure = ValidationFailure::try_from(&errors).expect("failure");
    let (_, envelope) = ErrorShapingServiceImpl::new().render_validation_failure(&failure);

    assert_eq!(envelope.len(), 1);
    assert_eq!(envelope.errors()[0].param(), "address.street");
    assert_eq!(
        envelope.errors()[0].detail(),
        "Field validation for address.street failed on the min tag."
    );
    assert_eq!(
        envelope.errors()[0].message(),
        "address.street need to be at least 3 characters long."
    );
}
