use super::*;

#[test]
fn status_error_names_endpoint_and_code() {
    let err = ApiError::Status { endpoint: "/api/verify", status: 401 };
    assert_eq!(err.to_string(), "/api/verify failed: 401");
}

#[test]
fn network_error_keeps_cause() {
    assert_eq!(
        ApiError::Network("connection refused".to_owned()).to_string(),
        "network error: connection refused"
    );
}

#[test]
fn password_mismatch_reads_as_a_warning() {
    assert_eq!(AuthFormError::PasswordMismatch.to_string(), "Passwords do not match!");
}
