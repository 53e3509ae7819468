//! Auth modal view-state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header owns one [`AuthSession`] in an `RwSignal`. The modal's forms
//! call the transition methods below and perform whatever request a method
//! hands back; the response is then fed into the matching `*_succeeded` /
//! `*_failed` method.
//!
//! DESIGN
//! ======
//! ```text
//! Login <-> Signup -> Otp -> (verified: session set, modal closed)
//!   ^                  |
//!   |        Back -----+--> Signup
//!   +--> Forgot -> sent -> (3 s) -> Login
//! ```
//! Closing the modal calls [`AuthSession::reset`], which drops every field
//! and restores the view the modal was opened with.
//!
//! Each forgot-password submission gets a round number that survives resets.
//! The response and the redirect timer carry it, so a late result from an
//! earlier submission never acts on a newer one.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::otp::OtpState;
use super::session::SessionState;
use crate::config::{DEMO_EMAIL, DEMO_PASSWORD};
use crate::error::AuthFormError;
use crate::net::types::{EmailRequest, LoginRequest, SignupRequest, VerifyOtpRequest};
use crate::util::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthView {
    #[default]
    Login,
    Signup,
    Otp,
    Forgot,
}

/// Fields shared by the login and signup forms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// One text input of [`AuthForm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl AuthForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
            FormField::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value;
    }
}

/// Forgot-password sub-state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForgotState {
    pub email: String,
    pub loading: bool,
    /// Terminal "check your email" screen.
    pub sent: bool,
}

/// What a login submission should do next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginAttempt {
    /// Demo credentials: sign in immediately.
    Demo { email: String },
    /// Anything else goes to `POST /api/login`.
    Remote(LoginRequest),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthSession {
    pub view: AuthView,
    initial_view: AuthView,
    /// Email carried from signup into OTP verification.
    pub pending_email: String,
    pub form: AuthForm,
    pub forgot: ForgotState,
    pub otp: OtpState,
    /// A login or signup request is in flight.
    pub busy: bool,
    forgot_round: u32,
}

impl AuthSession {
    /// Fresh session that starts on (and resets to) `view`.
    pub fn opened_at(view: AuthView) -> Self {
        Self { view, initial_view: view, ..Self::default() }
    }

    /// Drop all entered data and return to the initial view.
    pub fn reset(&mut self) {
        self.reopen(self.initial_view);
    }

    /// Drop all entered data and start over on `view`.
    pub fn reopen(&mut self, view: AuthView) {
        *self = Self { forgot_round: self.forgot_round, ..Self::opened_at(view) };
    }

    pub fn show_login(&mut self) {
        self.view = AuthView::Login;
        self.forgot = ForgotState::default();
    }

    pub fn show_signup(&mut self) {
        self.view = AuthView::Signup;
    }

    /// The "Sign up" / "Sign in" link under the form.
    pub fn toggle_mode(&mut self) {
        match self.view {
            AuthView::Login => self.show_signup(),
            _ => self.show_login(),
        }
    }

    pub fn show_forgot(&mut self) {
        self.forgot = ForgotState { email: self.form.email.trim().to_owned(), ..ForgotState::default() };
        self.view = AuthView::Forgot;
    }

    /// "Back" on the OTP screen.
    pub fn back_from_otp(&mut self) {
        self.otp = OtpState::default();
        self.view = AuthView::Signup;
    }

    // --- login ---

    /// Validate the login form and decide how to authenticate.
    ///
    /// # Errors
    ///
    /// [`AuthFormError::MissingFields`] for a blank email or password, and
    /// [`AuthFormError::Busy`] while a previous request is pending.
    pub fn submit_login(&mut self) -> Result<LoginAttempt, AuthFormError> {
        if self.busy {
            return Err(AuthFormError::Busy);
        }
        let email = self.form.email.trim();
        if email.is_empty() || self.form.password.is_empty() {
            return Err(AuthFormError::MissingFields);
        }
        if email == DEMO_EMAIL && self.form.password == DEMO_PASSWORD {
            return Ok(LoginAttempt::Demo { email: email.to_owned() });
        }
        let request = LoginRequest { email: email.to_owned(), password: self.form.password.clone() };
        self.busy = true;
        Ok(LoginAttempt::Remote(request))
    }

    /// A remote login was rejected; the form stays filled in.
    pub fn login_failed(&mut self) {
        self.busy = false;
    }

    /// Persist the session for `email` and clear the modal.
    pub fn complete_sign_in(&mut self, store: &impl KeyValueStore, email: &str) -> SessionState {
        self.reset();
        SessionState::sign_in(store, email)
    }

    // --- signup ---

    /// Validate the signup form and move to OTP entry.
    ///
    /// # Errors
    ///
    /// [`AuthFormError::MissingFields`] for a blank field and
    /// [`AuthFormError::PasswordMismatch`] when the confirmation differs; the
    /// view stays on signup in both cases.
    pub fn submit_signup(&mut self) -> Result<SignupRequest, AuthFormError> {
        if self.busy {
            return Err(AuthFormError::Busy);
        }
        let form = &self.form;
        let email = form.email.trim();
        if form.name.trim().is_empty() || email.is_empty() || form.password.is_empty() {
            return Err(AuthFormError::MissingFields);
        }
        if form.password != form.confirm_password {
            return Err(AuthFormError::PasswordMismatch);
        }
        let request =
            SignupRequest { name: form.name.trim().to_owned(), email: email.to_owned(), password: form.password.clone() };
        self.pending_email = request.email.clone();
        self.otp = OtpState::default();
        self.view = AuthView::Otp;
        Ok(request)
    }

    // --- otp ---

    /// Feed the OTP input; returns a request when the code just completed.
    pub fn otp_input(&mut self, raw: &str) -> Option<VerifyOtpRequest> {
        let code = self.otp.input(raw)?;
        Some(self.verify_request(code))
    }

    /// Explicit "Verify" button.
    ///
    /// # Errors
    ///
    /// [`AuthFormError::IncompleteCode`] for a short code and
    /// [`AuthFormError::Busy`] while a verification is pending.
    pub fn submit_otp(&mut self) -> Result<VerifyOtpRequest, AuthFormError> {
        if self.otp.verifying {
            return Err(AuthFormError::Busy);
        }
        let code = self.otp.begin_verify().ok_or(AuthFormError::IncompleteCode)?;
        Ok(self.verify_request(code))
    }

    fn verify_request(&self, otp: String) -> VerifyOtpRequest {
        VerifyOtpRequest { email: self.pending_email.clone(), otp }
    }

    /// Verification passed: clear everything and land on login. Returns the
    /// email to sign in, or `None` when the modal already left the OTP view.
    pub fn otp_verified(&mut self) -> Option<String> {
        if self.view != AuthView::Otp {
            return None;
        }
        let email = std::mem::take(&mut self.pending_email);
        self.reset();
        self.view = AuthView::Login;
        Some(email)
    }

    pub fn otp_rejected(&mut self) {
        self.otp.verify_failed();
    }

    /// Start a resend if the countdown allows it.
    pub fn begin_resend(&mut self) -> Option<EmailRequest> {
        self.otp.begin_resend().then(|| EmailRequest { email: self.pending_email.clone() })
    }

    // --- forgot password ---

    /// Round of the latest forgot-password submission.
    pub fn forgot_round(&self) -> u32 {
        self.forgot_round
    }

    /// Starts a new round; see [`Self::forgot_round`].
    ///
    /// # Errors
    ///
    /// [`AuthFormError::MissingEmail`] for a blank email and
    /// [`AuthFormError::Busy`] while a request is pending.
    pub fn submit_forgot(&mut self) -> Result<EmailRequest, AuthFormError> {
        if self.forgot.loading {
            return Err(AuthFormError::Busy);
        }
        let email = self.forgot.email.trim();
        if email.is_empty() {
            return Err(AuthFormError::MissingEmail);
        }
        let request = EmailRequest { email: email.to_owned() };
        self.forgot.loading = true;
        self.forgot_round = self.forgot_round.wrapping_add(1);
        Ok(request)
    }

    fn is_current_forgot(&self, round: u32) -> bool {
        self.view == AuthView::Forgot && round == self.forgot_round
    }

    pub fn forgot_sent(&mut self, round: u32) {
        if self.is_current_forgot(round) {
            self.forgot.loading = false;
            self.forgot.sent = true;
        }
    }

    pub fn forgot_failed(&mut self, round: u32) {
        if self.is_current_forgot(round) {
            self.forgot.loading = false;
        }
    }

    /// The redirect delay after a successful reset request elapsed.
    /// Ignored if the user already left that screen, closed the modal, or
    /// submitted again since.
    pub fn forgot_redirect_elapsed(&mut self, round: u32) {
        if self.is_current_forgot(round) && self.forgot.sent {
            self.show_login();
        }
    }
}
