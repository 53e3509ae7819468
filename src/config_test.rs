use super::*;

#[test]
fn parse_log_level_accepts_known_names() {
    assert_eq!(parse_log_level(Some("warn")), log::Level::Warn);
    assert_eq!(parse_log_level(Some(" TRACE ")), log::Level::Trace);
}

#[test]
fn parse_log_level_falls_back_to_debug() {
    assert_eq!(parse_log_level(None), log::Level::Debug);
    assert_eq!(parse_log_level(Some("loud")), log::Level::Debug);
}

#[test]
fn otp_constants_match_the_verification_screen() {
    assert_eq!(OTP_LENGTH, 6);
    assert_eq!(OTP_RESEND_SECS, 60);
}
