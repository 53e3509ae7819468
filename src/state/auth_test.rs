use super::*;
use crate::util::storage::MemoryStorage;

fn filled_signup(password: &str, confirm: &str) -> AuthSession {
    let mut auth = AuthSession::opened_at(AuthView::Signup);
    auth.form = AuthForm {
        name: "Jane".to_owned(),
        email: " jane@x.io ".to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
    };
    auth
}

#[test]
fn default_session_starts_on_login() {
    let auth = AuthSession::default();
    assert_eq!(auth.view, AuthView::Login);
    assert_eq!(auth.otp.seconds_left, 60);
}

#[test]
fn toggle_switches_between_login_and_signup() {
    let mut auth = AuthSession::default();
    auth.toggle_mode();
    assert_eq!(auth.view, AuthView::Signup);
    auth.toggle_mode();
    assert_eq!(auth.view, AuthView::Login);
}

#[test]
fn demo_login_signs_in_and_persists_both_keys() {
    let store = MemoryStorage::default();
    let mut auth = AuthSession::default();
    auth.form.email = "test@example.com".to_owned();
    auth.form.password = "password".to_owned();

    let email = match auth.submit_login().expect("demo credentials should validate") {
        LoginAttempt::Demo { email } => email,
        other => panic!("expected the local demo path, got {other:?}"),
    };
    let session = auth.complete_sign_in(&store, &email);

    assert!(session.logged_in);
    assert_eq!(store.get("isLoggedIn").as_deref(), Some("true"));
    assert_eq!(store.get("userEmail").as_deref(), Some("test@example.com"));
    assert_eq!(auth.form, AuthForm::default());
    assert!(!auth.busy);
}

#[test]
fn other_credentials_go_remote_and_mark_busy() {
    let mut auth = AuthSession::default();
    auth.form.email = "a@b.com".to_owned();
    auth.form.password = "hunter2".to_owned();
    let attempt = auth.submit_login();
    assert_eq!(
        attempt,
        Ok(LoginAttempt::Remote(LoginRequest { email: "a@b.com".to_owned(), password: "hunter2".to_owned() }))
    );
    assert!(auth.busy);
    assert_eq!(auth.submit_login(), Err(AuthFormError::Busy));
    auth.login_failed();
    assert!(!auth.busy);
    assert_eq!(auth.form.email, "a@b.com");
}

#[test]
fn empty_login_fields_are_rejected_before_any_call() {
    let mut auth = AuthSession::default();
    auth.form.email = "   ".to_owned();
    auth.form.password = "x".to_owned();
    assert_eq!(auth.submit_login(), Err(AuthFormError::MissingFields));
    assert!(!auth.busy);
}

#[test]
fn signup_mismatch_never_reaches_otp() {
    let mut auth = filled_signup("secret1", "secret2");
    assert_eq!(auth.submit_signup(), Err(AuthFormError::PasswordMismatch));
    assert_eq!(auth.view, AuthView::Signup);
    assert_eq!(auth.pending_email, "");
    assert_eq!(AuthFormError::PasswordMismatch.to_string(), "Passwords do not match!");
}

#[test]
fn signup_moves_to_otp_carrying_the_email() {
    let mut auth = filled_signup("secret", "secret");
    let request = auth.submit_signup().expect("matching passwords should validate");
    assert_eq!(request.email, "jane@x.io");
    assert_eq!(request.name, "Jane");
    assert_eq!(auth.view, AuthView::Otp);
    assert_eq!(auth.pending_email, "jane@x.io");
}

#[test]
fn otp_completion_builds_one_verify_request() {
    let mut auth = filled_signup("pw", "pw");
    auth.submit_signup().expect("valid signup");
    assert_eq!(auth.otp_input("12345"), None);
    let request = auth.otp_input("123456").expect("sixth character should trigger");
    assert_eq!(request, VerifyOtpRequest { email: "jane@x.io".to_owned(), otp: "123456".to_owned() });
    assert_eq!(auth.otp_input("123456"), None);
    assert_eq!(auth.submit_otp(), Err(AuthFormError::Busy));
}

#[test]
fn explicit_otp_submit_rejects_short_codes() {
    let mut auth = filled_signup("pw", "pw");
    auth.submit_signup().expect("valid signup");
    auth.otp.code = "12".to_owned();
    assert_eq!(auth.submit_otp(), Err(AuthFormError::IncompleteCode));
}

#[test]
fn verified_otp_returns_email_and_resets() {
    let mut auth = filled_signup("pw", "pw");
    auth.submit_signup().expect("valid signup");
    auth.otp_input("ABCDEF");
    assert_eq!(auth.otp_verified(), Some("jane@x.io".to_owned()));
    assert_eq!(auth.view, AuthView::Login);
    assert_eq!(auth.form, AuthForm::default());
    assert_eq!(auth.otp, OtpState::default());
    assert_eq!(auth.otp_verified(), None);
}

#[test]
fn rejected_otp_clears_the_input() {
    let mut auth = filled_signup("pw", "pw");
    auth.submit_signup().expect("valid signup");
    auth.otp_input("ABCDEF");
    auth.otp_rejected();
    assert_eq!(auth.otp.code, "");
    assert!(!auth.otp.verifying);
    assert_eq!(auth.view, AuthView::Otp);
}

#[test]
fn resend_waits_for_countdown() {
    let mut auth = filled_signup("pw", "pw");
    auth.submit_signup().expect("valid signup");
    assert_eq!(auth.begin_resend(), None);
    auth.otp.seconds_left = 0;
    assert_eq!(auth.begin_resend(), Some(EmailRequest { email: "jane@x.io".to_owned() }));
}

#[test]
fn back_from_otp_returns_to_signup() {
    let mut auth = filled_signup("pw", "pw");
    auth.submit_signup().expect("valid signup");
    auth.back_from_otp();
    assert_eq!(auth.view, AuthView::Signup);
}

#[test]
fn forgot_flow_redirects_to_login_after_sent() {
    let mut auth = AuthSession::default();
    auth.form.email = "me@x.io".to_owned();
    auth.show_forgot();
    assert_eq!(auth.forgot.email, "me@x.io");

    let request = auth.submit_forgot().expect("email present");
    let round = auth.forgot_round();
    assert_eq!(request.email, "me@x.io");
    assert_eq!(auth.submit_forgot(), Err(AuthFormError::Busy));
    auth.forgot_sent(round);
    assert!(auth.forgot.sent);

    auth.forgot_redirect_elapsed(round);
    assert_eq!(auth.view, AuthView::Login);
    assert_eq!(auth.forgot, ForgotState::default());
}

#[test]
fn forgot_requires_an_email() {
    let mut auth = AuthSession::default();
    auth.show_forgot();
    assert_eq!(auth.submit_forgot(), Err(AuthFormError::MissingEmail));
}

#[test]
fn stale_forgot_redirect_is_ignored() {
    let mut auth = AuthSession::default();
    auth.show_forgot();
    auth.forgot.email = "me@x.io".to_owned();
    auth.submit_forgot().expect("email present");
    let round = auth.forgot_round();
    auth.forgot_sent(round);
    auth.reset();
    auth.show_signup();
    auth.forgot_redirect_elapsed(round);
    assert_eq!(auth.view, AuthView::Signup);
}

fn submit_forgot_for(auth: &mut AuthSession, email: &str) -> u32 {
    auth.show_forgot();
    auth.forgot.email = email.to_owned();
    auth.submit_forgot().expect("email present");
    auth.forgot_round()
}

#[test]
fn earlier_redirect_timer_does_not_cut_a_resubmission_short() {
    let mut auth = AuthSession::default();
    let first = submit_forgot_for(&mut auth, "me@x.io");
    auth.forgot_sent(first);
    auth.show_login();

    let second = submit_forgot_for(&mut auth, "me@x.io");
    assert_ne!(first, second);
    auth.forgot_sent(second);

    auth.forgot_redirect_elapsed(first);
    assert_eq!(auth.view, AuthView::Forgot);
    assert!(auth.forgot.sent);

    auth.forgot_redirect_elapsed(second);
    assert_eq!(auth.view, AuthView::Login);
}

#[test]
fn forgot_round_survives_closing_the_modal() {
    let mut auth = AuthSession::default();
    let first = submit_forgot_for(&mut auth, "me@x.io");
    auth.reset();
    auth.reopen(AuthView::Login);

    let second = submit_forgot_for(&mut auth, "me@x.io");
    assert_ne!(first, second);
    auth.forgot_sent(first);
    assert!(!auth.forgot.sent);
    assert!(auth.forgot.loading);

    auth.forgot_failed(first);
    assert!(auth.forgot.loading);
    auth.forgot_failed(second);
    assert!(!auth.forgot.loading);
}

#[test]
fn reset_clears_fields_and_restores_initial_view() {
    for initial in [AuthView::Login, AuthView::Signup] {
        let mut auth = AuthSession::opened_at(initial);
        auth.form.email = "x@y.z".to_owned();
        auth.form.password = "p".to_owned();
        auth.form.confirm_password = "p".to_owned();
        auth.form.name = "X".to_owned();
        auth.submit_signup().expect("valid signup");
        auth.otp_input("12");
        auth.reset();
        assert_eq!(auth.view, initial);
        assert_eq!(auth.form, AuthForm::default());
        assert_eq!(auth.pending_email, "");
        assert_eq!(auth.otp, OtpState::default());
    }
}

#[test]
fn form_fields_are_addressable_by_name() {
    let mut form = AuthForm::default();
    form.set(FormField::ConfirmPassword, "pw".to_owned());
    form.set(FormField::Name, "Ann".to_owned());
    assert_eq!(form.get(FormField::ConfirmPassword), "pw");
    assert_eq!(form.get(FormField::Name), "Ann");
    assert_eq!(form.get(FormField::Email), "");
}
