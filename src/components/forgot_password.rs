//! Forgot-password step of the auth modal.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::auth_modal::AuthModalHandle;
use crate::state::auth::AuthSession;

#[component]
pub fn ForgotPassword() -> impl IntoView {
    let auth = expect_context::<AuthModalHandle>().session;
    let warning = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        warning.set(None);
        let mut outcome = None;
        auth.update(|a| outcome = Some(a.submit_forgot().map(|request| (request, a.forgot_round()))));
        #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
        let (request, round) = match outcome {
            Some(Ok(sent)) => sent,
            Some(Err(e)) => {
                warning.set(Some(e.to_string()));
                return;
            }
            None => return,
        };
        log::info!("requesting password reset for {}", request.email);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::forgot_password(&request).await {
                Ok(_) => {
                    auth.update(|a| a.forgot_sent(round));
                    crate::util::clock::sleep_ms(crate::config::RESET_REDIRECT_MS).await;
                    auth.update(|a| a.forgot_redirect_elapsed(round));
                }
                Err(e) => {
                    log::warn!("password reset request failed: {e}");
                    auth.update(|a| a.forgot_failed(round));
                    crate::util::browser::alert("Failed to send reset email. Please try again.");
                }
            }
        });
    };

    let sent = move || auth.with(|a| a.forgot.sent);
    let loading = move || auth.with(|a| a.forgot.loading);

    view! {
        <Show
            when=sent
            fallback=move || {
                view! {
                    <h2 class="dialog__title">"Reset your password"</h2>
                    <p class="dialog__subtitle">"Enter your email and we'll send you a reset link."</p>
                    <form class="auth-form" on:submit=on_submit>
                        <label class="auth-form__field">
                            <span class="auth-form__label">"Email"</span>
                            <input
                                class="auth-form__input"
                                type="email"
                                placeholder="you@example.com"
                                prop:value=move || auth.with(|a| a.forgot.email.clone())
                                on:input=move |ev| auth.update(|a| a.forgot.email = event_target_value(&ev))
                            />
                        </label>
                        {move || warning.get().map(|w| view! { <p class="auth-form__warning">{w}</p> })}
                        <button class="btn btn--primary auth-form__submit" type="submit" disabled=loading>
                            {move || if loading() { "Sending…" } else { "Send reset link" }}
                        </button>
                    </form>
                }
            }
        >
            <div class="forgot__sent">
                <h2 class="dialog__title">"Check your email"</h2>
                <p class="dialog__subtitle">
                    "We sent a password reset link to "
                    <strong>{move || auth.with(|a| a.forgot.email.clone())}</strong>
                    ". Returning to sign in…"
                </p>
            </div>
        </Show>
        <button class="auth-form__link" type="button" on:click=move |_| auth.update(AuthSession::show_login)>
            "← Back to sign in"
        </button>
    }
}
