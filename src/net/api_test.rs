use super::*;

#[test]
fn endpoint_url_joins_base_and_path() {
    assert_eq!(endpoint_url("", VERIFY_PATH), "/api/verify");
    assert_eq!(endpoint_url("https://api.example.com/", LOGIN_PATH), "https://api.example.com/api/login");
}

#[test]
fn endpoint_paths_match_the_backend_contract() {
    assert_eq!(RESEND_OTP_PATH, "/api/resendOTP");
    assert_eq!(FORGOT_PASSWORD_PATH, "/api/forgotpassword");
    assert_eq!(GOOGLE_PATH, "/api/google");
    assert_eq!(SIGNUP_PATH, "/api/signup");
}

#[test]
fn parse_body_treats_empty_as_null() {
    assert_eq!(parse_body(""), Ok(Value::Null));
    assert_eq!(parse_body("  \n"), Ok(Value::Null));
}

#[test]
fn parse_body_rejects_non_json() {
    assert!(matches!(parse_body("<html>"), Err(ApiError::Decode(_))));
    assert_eq!(parse_body("{\"ok\":true}"), Ok(serde_json::json!({ "ok": true })));
}

#[test]
fn verify_body_serializes_email_and_otp() {
    let body = VerifyOtpRequest { email: "a@b.com".to_owned(), otp: "ABC123".to_owned() };
    assert_eq!(
        serde_json::to_value(&body).expect("body should serialize"),
        serde_json::json!({ "email": "a@b.com", "otp": "ABC123" })
    );
}
