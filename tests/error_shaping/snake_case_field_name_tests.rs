use microservice_toolkit::error_shaping::domain::model::value_objects::snake_case_field_name::SnakeCaseFieldName;

fn snake(raw: &str) -> String {
    SnakeCaseFieldName::from_raw(raw).into_inner()
}

#[test]
fn from_raw_splits_words_and_acronyms() {
    assert_eq!(snake("UserID"), "user_id");
    assert_eq!(snake("URLPath"), "url_path");
    assert_eq!(snake("firstName"), "first_name");
    assert_eq!(snake("HTTPServerError"), "http_server_error");
    assert_eq!(snake("Email"), "email");
    assert_eq!(snake("address2"), "address2");
}

#[test]
fn from_raw_is_idempotent() {
    for raw in ["UserID", "URLPath", "firstName", "already_snake", "HTTPServerError"] {
        let once = snake(raw);
        assert_eq!(snake(&once), once);
    }
}

#[test]
fn display_prints_the_snake_case_value() {
    let name = SnakeCaseFieldName::from_raw("PhoneNumber");

    assert_eq!(name.to_string(), "phone_number");
    assert_eq!(name.value(), "phone_number");
}
