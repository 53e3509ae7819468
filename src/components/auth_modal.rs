//! Sign-in / sign-up modal hosting the OTP and forgot-password steps.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one [`AuthModalHandle`]; the header and landing-page calls
//! to action open it. The modal renders whichever step the shared
//! [`AuthSession`] is on and performs the requests its transitions return.
//!
//! ERROR HANDLING
//! ==============
//! Form validation errors render inline. Failed remote calls alert; the
//! best-effort signup request only logs.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::forgot_password::ForgotPassword;
use super::otp_verification::OtpVerification;
use crate::error::AuthFormError;
use crate::state::auth::{AuthSession, AuthView, FormField, LoginAttempt};
use crate::state::session::SessionState;
use crate::util::storage::BrowserStorage;

/// Open flag plus the modal's state machine, shared through context.
#[derive(Clone, Copy)]
pub struct AuthModalHandle {
    pub open: RwSignal<bool>,
    pub session: RwSignal<AuthSession>,
}

impl AuthModalHandle {
    pub fn new() -> Self {
        Self { open: RwSignal::new(false), session: RwSignal::new(AuthSession::default()) }
    }

    /// Show the modal on `view` with every field empty.
    pub fn open_at(self, view: AuthView) {
        self.session.update(|a| a.reopen(view));
        self.open.set(true);
    }

    pub fn close(self) {
        self.session.update(AuthSession::reset);
        self.open.set(false);
    }

    /// Persist a signed-in session for `email` and close the modal.
    pub fn finish_sign_in(self, session: RwSignal<SessionState>, email: &str) {
        let mut next = SessionState::default();
        self.session.update(|a| next = a.complete_sign_in(&BrowserStorage, email));
        session.set(next);
        self.open.set(false);
    }
}

impl Default for AuthModalHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn AuthModal() -> impl IntoView {
    let handle = expect_context::<AuthModalHandle>();
    let step = Memo::new(move |_| match handle.session.with(|a| a.view) {
        AuthView::Login | AuthView::Signup => AuthView::Login,
        other => other,
    });

    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            handle.close();
        }
    });

    view! {
        <Show when=move || handle.open.get()>
            <div class="dialog-backdrop" on:click=move |_| handle.close()>
                <div
                    class="dialog dialog--auth"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                    tabindex="0"
                >
                    <button class="dialog__close" title="Close" on:click=move |_| handle.close()>
                        "✕"
                    </button>
                    {move || match step.get() {
                        AuthView::Otp => view! { <OtpVerification/> }.into_any(),
                        AuthView::Forgot => view! { <ForgotPassword/> }.into_any(),
                        AuthView::Login | AuthView::Signup => view! { <CredentialsForm/> }.into_any(),
                    }}
                </div>
            </div>
        </Show>
    }
}

/// Login and signup share one form; signup adds name and confirmation.
#[component]
fn CredentialsForm() -> impl IntoView {
    let handle = expect_context::<AuthModalHandle>();
    let session = expect_context::<RwSignal<SessionState>>();
    let auth = handle.session;
    let warning = RwSignal::new(None::<String>);

    let is_signup = move || auth.with(|a| a.view == AuthView::Signup);
    let busy = move || auth.with(|a| a.busy);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        warning.set(None);
        let result = if auth.with_untracked(|a| a.view == AuthView::Signup) {
            submit_signup(auth)
        } else {
            submit_login(handle, session)
        };
        if let Err(e) = result {
            warning.set(Some(e.to_string()));
        }
    };

    let on_google = move |_| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::google_login().await {
                Ok(body) => log::info!("google sign-in started: {body}"),
                Err(e) => {
                    log::warn!("google sign-in failed: {e}");
                    crate::util::browser::alert("Google sign-in is not available right now.");
                }
            }
        });
    };

    let on_toggle = move |_| {
        warning.set(None);
        auth.update(AuthSession::toggle_mode);
    };

    view! {
        <h2 class="dialog__title">{move || if is_signup() { "Create an account" } else { "Welcome back" }}</h2>
        <p class="dialog__subtitle">
            {move || if is_signup() { "Join TechBlog to start writing." } else { "Sign in to continue to TechBlog." }}
        </p>
        <button class="btn btn--google" type="button" on:click=on_google>
            "Continue with Google"
        </button>
        <div class="dialog__divider">"or"</div>
        <form class="auth-form" on:submit=on_submit>
            <Show when=is_signup>
                <AuthInput field=FormField::Name label="Full name" kind="text" placeholder="Jane Doe"/>
            </Show>
            <AuthInput field=FormField::Email label="Email" kind="email" placeholder="you@example.com"/>
            <AuthInput field=FormField::Password label="Password" kind="password" placeholder="••••••••"/>
            <Show when=is_signup>
                <AuthInput
                    field=FormField::ConfirmPassword
                    label="Confirm password"
                    kind="password"
                    placeholder="••••••••"
                />
            </Show>
            <Show when=move || !is_signup()>
                <button
                    class="auth-form__link"
                    type="button"
                    on:click=move |_| auth.update(AuthSession::show_forgot)
                >
                    "Forgot password?"
                </button>
            </Show>
            {move || warning.get().map(|w| view! { <p class="auth-form__warning">{w}</p> })}
            <button class="btn btn--primary auth-form__submit" type="submit" disabled=busy>
                {move || match (is_signup(), busy()) {
                    (_, true) => "Please wait…",
                    (true, false) => "Sign Up",
                    (false, false) => "Sign In",
                }}
            </button>
        </form>
        <p class="dialog__footer">
            {move || if is_signup() { "Already have an account? " } else { "Don't have an account? " }}
            <button class="auth-form__link" type="button" on:click=on_toggle>
                {move || if is_signup() { "Sign in" } else { "Sign up" }}
            </button>
        </p>
    }
}

#[component]
fn AuthInput(field: FormField, label: &'static str, kind: &'static str, placeholder: &'static str) -> impl IntoView {
    let auth = expect_context::<AuthModalHandle>().session;
    view! {
        <label class="auth-form__field">
            <span class="auth-form__label">{label}</span>
            <input
                class="auth-form__input"
                type=kind
                placeholder=placeholder
                prop:value=move || auth.with(|a| a.form.get(field).to_owned())
                on:input=move |ev| auth.update(|a| a.form.set(field, event_target_value(&ev)))
            />
        </label>
    }
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn submit_login(handle: AuthModalHandle, session: RwSignal<SessionState>) -> Result<(), AuthFormError> {
    let mut outcome = Err(AuthFormError::Busy);
    handle.session.update(|a| outcome = a.submit_login());
    match outcome? {
        LoginAttempt::Demo { email } => handle.finish_sign_in(session, &email),
        LoginAttempt::Remote(request) => {
            #[cfg(feature = "csr")]
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&request).await {
                    Ok(_) => handle.finish_sign_in(session, &request.email),
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        handle.session.update(AuthSession::login_failed);
                        crate::util::browser::alert("Login failed. Please check your credentials and try again.");
                    }
                }
            });
        }
    }
    Ok(())
}

/// Moves to OTP entry as soon as the form validates; the signup request
/// itself is fire-and-forget.
fn submit_signup(auth: RwSignal<AuthSession>) -> Result<(), AuthFormError> {
    let mut outcome = Err(AuthFormError::Busy);
    auth.update(|a| outcome = a.submit_signup());
    let request = outcome?;
    log::info!("signup submitted for {}", request.email);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::signup(&request).await {
            Ok(_) => log::info!("signup request accepted for {}", request.email),
            Err(e) => log::warn!("signup request failed: {e}"),
        }
    });
    Ok(())
}
