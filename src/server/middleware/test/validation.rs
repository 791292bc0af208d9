use super::*;

/// Tests a complete create-user body passes unchanged.
///
/// Expected: Ok with all three fields
#[test]
fn accepts_valid_create_user_body() {
    let body = json!({
        "email": "guest@example.com",
        "password": "q1w2e3r4t5",
        "role": "USER"
    });

    let cleaned = validate(&CREATE_USER_SCHEMA, body).unwrap();

    assert_eq!(cleaned.len(), 3);
    assert_eq!(cleaned["email"], "guest@example.com");
}

/// Tests a create-user body missing its email.
///
/// Expected: Err(Validation) mentioning email
#[test]
fn rejects_create_user_without_email() {
    let body = json!({ "password": "q1w2e3r4t5", "role": "USER" });

    let message = validation_message(validate(&CREATE_USER_SCHEMA, body));

    assert_eq!(message, "email should not be empty");
}

/// Tests the lower password length bound of 9 characters.
///
/// Expected: Err(Validation) for 8 characters
#[test]
fn rejects_short_password() {
    let body = json!({ "email": "guest@example.com", "password": "12345678", "role": "USER" });

    let message = validation_message(validate(&CREATE_USER_SCHEMA, body));

    assert_eq!(
        message,
        "password must be longer than or equal to 9 characters"
    );
}

/// Tests the upper password length bound of 32 characters.
///
/// Expected: Ok at 32 characters, Err(Validation) at 33
#[test]
fn enforces_password_upper_bound() {
    let at_limit = json!({ "email": "a@b.io", "password": "x".repeat(32), "role": "ADMIN" });
    assert!(validate(&CREATE_USER_SCHEMA, at_limit).is_ok());

    let over = json!({ "email": "a@b.io", "password": "x".repeat(33), "role": "ADMIN" });
    let message = validation_message(validate(&CREATE_USER_SCHEMA, over));
    assert_eq!(
        message,
        "password must be shorter than or equal to 32 characters"
    );
}

/// Tests every violation is reported, joined with ", ".
///
/// Expected: one message per failing field, in schema order
#[test]
fn reports_all_violations() {
    let body = json!({ "email": "not-an-email", "password": 123456789, "role": "OWNER" });

    let message = validation_message(validate(&CREATE_USER_SCHEMA, body));

    assert_eq!(
        message,
        "email must be an email, password must be a string, \
         role must be one of the following values: ADMIN, USER"
    );
}

/// Tests fields the schema does not name are dropped.
///
/// Expected: Ok without the extra fields
#[test]
fn strips_unknown_fields() {
    let body = json!({
        "email": "guest@example.com",
        "password": "q1w2e3r4t5",
        "id": 7,
        "role": "ADMIN",
        "isAdmin": true
    });

    let cleaned = validate(&LOGIN_SCHEMA, body).unwrap();

    let mut keys: Vec<&str> = cleaned.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["email", "password"]);
}

/// Tests a user update carrying fields other than the password.
///
/// Expected: Ok with email and role stripped; an empty body passes
#[test]
fn user_update_keeps_only_password() {
    let body = json!({
        "email": "renamed@example.com",
        "password": "new-secret-1",
        "role": "ADMIN",
    });

    let cleaned = validate(&UPDATE_USER_SCHEMA, body).unwrap();

    assert_eq!(cleaned.len(), 1);
    assert_eq!(cleaned["password"], "new-secret-1");

    let cleaned = validate(&UPDATE_USER_SCHEMA, json!({ "role": "ADMIN" })).unwrap();
    assert!(cleaned.is_empty());
}

/// Tests a partial update still checks the fields it carries.
///
/// Expected: Err(Validation) for a short password
#[test]
fn partial_update_checks_present_fields() {
    let body = json!({ "password": "short" });

    let message = validation_message(validate(&UPDATE_USER_SCHEMA, body));

    assert_eq!(
        message,
        "password must be longer than or equal to 9 characters"
    );
}

/// Tests empty strings count as missing values.
///
/// Expected: Err(Validation) naming the empty field
#[test]
fn rejects_empty_string() {
    let body = json!({
        "name": "",
        "location": "Jeddah",
        "description": "Corniche",
        "picture_list": "a.jpg"
    });

    let message = validation_message(validate(&CREATE_HOTEL_SCHEMA, body));

    assert_eq!(message, "name should not be empty");
}

/// Tests booking dates must be RFC 3339 date-times.
///
/// Expected: Ok for a timestamp with offset, Err(Validation) for a bare word
#[test]
fn validates_booking_date() {
    let valid = json!({ "userId": "1", "hotelId": "2", "date": "2026-06-01T12:00:00Z" });
    assert!(validate(&CREATE_BOOKING_SCHEMA, valid).is_ok());

    let invalid = json!({ "date": "tomorrow" });
    let message = validation_message(validate(&UPDATE_BOOKING_SCHEMA, invalid));
    assert_eq!(message, "date must be a valid ISO 8601 date string");
}

/// Tests non-object bodies.
///
/// Expected: Err(Validation)
#[test]
fn rejects_non_object_body() {
    let result = validate(&LOGIN_SCHEMA, json!(["guest@example.com", "q1w2e3r4t5"]));

    assert!(matches!(result, Err(AppError::Validation(_))));
}
