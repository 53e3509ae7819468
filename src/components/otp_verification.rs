//! OTP entry step of the auth modal with the resend countdown.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::auth_modal::AuthModalHandle;
use crate::config::OTP_LENGTH;
use crate::net::types::VerifyOtpRequest;
use crate::state::auth::AuthSession;
use crate::state::session::SessionState;
use crate::util::clock::spawn_ticker;

#[component]
pub fn OtpVerification() -> impl IntoView {
    let handle = expect_context::<AuthModalHandle>();
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<crate::state::toast::ToastState>>();
    let auth = handle.session;
    let warning = RwSignal::new(None::<String>);

    // Countdown runs while this step is mounted.
    spawn_ticker(1_000, move || {
        if auth.with_untracked(|a| a.otp.seconds_left > 0) {
            auth.update(|a| a.otp.tick());
        }
        true
    });

    let on_input = move |ev: leptos::ev::Event| {
        warning.set(None);
        let raw = event_target_value(&ev);
        let mut request = None;
        auth.update(|a| request = a.otp_input(&raw));
        if let Some(request) = request {
            verify(handle, session, toasts, request);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut outcome = None;
        auth.update(|a| outcome = Some(a.submit_otp()));
        match outcome {
            Some(Ok(request)) => verify(handle, session, toasts, request),
            Some(Err(e)) => warning.set(Some(e.to_string())),
            None => {}
        }
    };

    let on_resend = move |_| {
        let mut request = None;
        auth.update(|a| request = a.begin_resend());
        let Some(request) = request else {
            return;
        };
        log::info!("resending code to {}", request.email);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::resend_otp(&request).await {
                Ok(_) => {
                    auth.update(|a| a.otp.resend_succeeded());
                    super::toaster::push_toast(toasts, "Code sent", "A new code is on its way.");
                }
                Err(e) => {
                    log::warn!("resend failed: {e}");
                    auth.update(|a| a.otp.resend_failed());
                    crate::util::browser::alert("Failed to resend code. Please try again.");
                }
            }
        });
    };

    let verifying = move || auth.with(|a| a.otp.verifying);
    let can_resend = move || auth.with(|a| a.otp.can_resend());

    view! {
        <h2 class="dialog__title">"Verify your email"</h2>
        <p class="dialog__subtitle">
            "We sent a " {OTP_LENGTH} "-character code to "
            <strong>{move || auth.with(|a| a.pending_email.clone())}</strong>
        </p>
        <form class="auth-form" on:submit=on_submit>
            <input
                class="auth-form__input auth-form__input--otp"
                type="text"
                inputmode="text"
                autocomplete="one-time-code"
                maxlength=OTP_LENGTH.to_string()
                placeholder="ABC123"
                disabled=verifying
                prop:value=move || auth.with(|a| a.otp.code.clone())
                on:input=on_input
            />
            {move || warning.get().map(|w| view! { <p class="auth-form__warning">{w}</p> })}
            <button class="btn btn--primary auth-form__submit" type="submit" disabled=verifying>
                {move || if verifying() { "Verifying…" } else { "Verify" }}
            </button>
        </form>
        <div class="otp__resend">
            <button class="auth-form__link" type="button" disabled=move || !can_resend() on:click=on_resend>
                {move || {
                    if can_resend() {
                        "Resend code".to_owned()
                    } else {
                        format!("Resend code in {}", auth.with(|a| a.otp.countdown_label()))
                    }
                }}
            </button>
        </div>
        <button class="auth-form__link" type="button" on:click=move |_| auth.update(AuthSession::back_from_otp)>
            "← Back"
        </button>
    }
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn verify(
    handle: AuthModalHandle,
    session: RwSignal<SessionState>,
    toasts: RwSignal<crate::state::toast::ToastState>,
    request: VerifyOtpRequest,
) {
    log::info!("verifying code for {}", request.email);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::verify_otp(&request).await {
            Ok(_) => {
                let mut email = None;
                handle.session.update(|a| email = a.otp_verified());
                if let Some(email) = email {
                    session.set(SessionState::sign_in(&crate::util::storage::BrowserStorage, &email));
                    handle.open.set(false);
                    super::toaster::push_toast(toasts, "Email verified", "Welcome to TechBlog!");
                }
            }
            Err(e) => {
                log::warn!("verification failed: {e}");
                handle.session.update(AuthSession::otp_rejected);
                crate::util::browser::alert("Verification failed. Please check the code and try again.");
            }
        }
    });
}
