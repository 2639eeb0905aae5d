use inquiry::api::validation::{MAX_EMAIL, MAX_MESSAGE, MAX_NAME, validate_submission};
use inquiry::errors::ContactError;
use serde_json::json;

fn body(name: &str, email: &str, message: &str) -> String {
    json!({ "name": name, "email": email, "message": message }).to_string()
}

fn error_message(raw: &str) -> String {
    validate_submission(Some(raw)).unwrap_err().to_string()
}

#[test]
fn test_valid_submission_is_trimmed_and_lowercased() {
    let submission = validate_submission(Some(&body(
        "  Ana Souza ",
        "  Ana@Example.COM ",
        "\n I want a sleeve tattoo design \n",
    )))
    .unwrap();

    assert_eq!(submission.name, "Ana Souza");
    assert_eq!(submission.email, "ana@example.com");
    assert_eq!(submission.message, "I want a sleeve tattoo design");
}

#[test]
fn test_message_length_boundaries() {
    let email = "ana@example.com";
    assert!(validate_submission(Some(&body("Ana", email, &"m".repeat(10)))).is_ok());
    assert!(validate_submission(Some(&body("Ana", email, &"m".repeat(MAX_MESSAGE)))).is_ok());

    for len in [9, MAX_MESSAGE + 1] {
        assert_eq!(
            error_message(&body("Ana", email, &"m".repeat(len))),
            "Message must be 10–5000 characters",
            "length {len} should be rejected"
        );
    }
}

#[test]
fn test_name_and_email_upper_bounds() {
    let message = "A small rose on the wrist";
    assert!(validate_submission(Some(&body(&"n".repeat(MAX_NAME), "a@b.co", message))).is_ok());
    assert_eq!(
        error_message(&body(&"n".repeat(MAX_NAME + 1), "a@b.co", message)),
        "Name must be 1–100 characters"
    );

    let long_email = format!("{}@example.com", "a".repeat(MAX_EMAIL));
    assert_eq!(
        error_message(&body("Ana", &long_email, message)),
        "Email must be 1–255 characters"
    );
}

#[test]
fn test_lengths_count_characters() {
    let name = "é".repeat(MAX_NAME);
    assert!(validate_submission(Some(&body(&name, "ana@example.com", "ñandú ñandú"))).is_ok());
}

#[test]
fn test_invalid_email_format() {
    let err = validate_submission(Some(&body("Ana", "not-an-email", "I want a sleeve tattoo")))
        .unwrap_err();
    assert!(matches!(err, ContactError::InvalidEmail));
    assert!(err.to_string().contains("Invalid email format"));
}

#[test]
fn test_missing_and_blank_fields() {
    let missing_email = json!({ "name": "Ana", "message": "I want a sleeve tattoo" }).to_string();
    assert_eq!(error_message(&missing_email), "Missing required fields");

    assert_eq!(
        error_message(&body("   ", "ana@example.com", "I want a sleeve tattoo")),
        "Missing required fields"
    );

    let null_name = json!({ "name": null, "email": "ana@example.com", "message": "x".repeat(20) });
    assert_eq!(error_message(&null_name.to_string()), "Missing required fields");

    for falsy in [json!(false), json!(0), json!(0.0), json!(-0.0)] {
        let raw = json!({ "name": falsy, "email": "ana@example.com", "message": "x".repeat(20) });
        assert_eq!(
            error_message(&raw.to_string()),
            "Missing required fields",
            "name {falsy} should count as missing"
        );
    }
}

#[test]
fn test_invalid_bodies() {
    assert!(matches!(
        validate_submission(None),
        Err(ContactError::InvalidBody)
    ));
    assert_eq!(error_message("not json"), "Invalid request body");
    assert_eq!(error_message("[1, 2, 3]"), "Invalid request body");
    assert_eq!(error_message("\"just a string\""), "Invalid request body");
}

#[test]
fn test_scalar_fields_are_stringified() {
    let raw = json!({ "name": 42, "email": "ana@example.com", "message": "I want a sleeve tattoo" });
    let submission = validate_submission(Some(&raw.to_string())).unwrap();
    assert_eq!(submission.name, "42");

    let raw = json!({ "name": true, "email": "ana@example.com", "message": "I want a sleeve tattoo" });
    let submission = validate_submission(Some(&raw.to_string())).unwrap();
    assert_eq!(submission.name, "true");
}

#[test]
fn test_free_text_is_sanitized() {
    let submission = validate_submission(Some(&body(
        "Ana<script>alert(1)</script>",
        "ana@example.com",
        "Look at <a href=\"javascript:void(0)\" onclick=\"x()\">this</a> design please",
    )))
    .unwrap();

    assert_eq!(submission.name, "Ana");
    assert_eq!(
        submission.message,
        "Look at <a href=\"void(0)\" \"x()\">this</a> design please"
    );
}

#[test]
fn test_other_markup_is_preserved() {
    let message = "Colors: <b>black</b> & grey, 10cm x 5cm";
    let submission = validate_submission(Some(&body("Ana", "ana@example.com", message))).unwrap();
    assert_eq!(submission.message, message);
}
