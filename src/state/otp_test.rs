use super::*;

#[test]
fn sanitize_strips_symbols_uppercases_and_truncates() {
    assert_eq!(sanitize_code("ab-12 c3"), "AB12C3");
    assert_eq!(sanitize_code("abcdefgh"), "ABCDEF");
    assert_eq!(sanitize_code("é!?"), "");
}

#[test]
fn sixth_character_triggers_verification_once() {
    let mut otp = OtpState::default();
    assert_eq!(otp.input("abc12"), None);
    assert_eq!(otp.input("abc123"), Some("ABC123".to_owned()));
    assert!(otp.verifying);
    assert_eq!(otp.input("abc1234"), None);
    assert_eq!(otp.begin_verify(), None);
}

#[test]
fn pasting_a_full_code_triggers_once() {
    let mut otp = OtpState::default();
    assert_eq!(otp.input("  x9y8z7w6 "), Some("X9Y8Z7".to_owned()));
    assert_eq!(otp.input("x9y8z7"), None);
}

#[test]
fn failed_verification_clears_and_allows_a_new_attempt() {
    let mut otp = OtpState::default();
    assert!(otp.input("123456").is_some());
    otp.verify_failed();
    assert_eq!(otp.code, "");
    assert!(!otp.verifying);
    assert_eq!(otp.input("654321"), Some("654321".to_owned()));
}

#[test]
fn explicit_submit_requires_a_complete_code() {
    let mut otp = OtpState { code: "123".to_owned(), ..OtpState::default() };
    assert_eq!(otp.begin_verify(), None);
    otp.code = "123456".to_owned();
    assert_eq!(otp.begin_verify(), Some("123456".to_owned()));
}

#[test]
fn resend_is_disabled_until_countdown_reaches_zero() {
    let mut otp = OtpState::default();
    assert_eq!(otp.seconds_left, 60);
    for _ in 0..59 {
        otp.tick();
        assert!(!otp.can_resend());
    }
    assert_eq!(otp.seconds_left, 1);
    otp.tick();
    assert!(otp.can_resend());
    otp.tick();
    assert_eq!(otp.seconds_left, 0);
}

#[test]
fn successful_resend_restarts_countdown_and_clears_code() {
    let mut otp = OtpState { code: "12".to_owned(), seconds_left: 0, ..OtpState::default() };
    assert!(otp.begin_resend());
    assert!(!otp.can_resend());
    assert!(!otp.begin_resend());
    otp.resend_succeeded();
    assert_eq!(otp.seconds_left, 60);
    assert_eq!(otp.code, "");
    assert!(!otp.resending);
}

#[test]
fn failed_resend_keeps_resend_available() {
    let mut otp = OtpState { seconds_left: 0, ..OtpState::default() };
    assert!(otp.begin_resend());
    otp.resend_failed();
    assert!(otp.can_resend());
}

#[test]
fn countdown_label_is_minutes_and_padded_seconds() {
    let mut otp = OtpState::default();
    assert_eq!(otp.countdown_label(), "1:00");
    otp.tick();
    assert_eq!(otp.countdown_label(), "0:59");
    otp.seconds_left = 5;
    assert_eq!(otp.countdown_label(), "0:05");
}
