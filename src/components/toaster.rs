//! Toast stack and the helper that queues a self-dismissing toast.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Queue a toast that dismisses itself after
/// [`TOAST_TTL_MS`](crate::config::TOAST_TTL_MS).
pub fn push_toast(toasts: RwSignal<ToastState>, title: &str, description: &str) {
    let mut id = String::new();
    toasts.update(|t| id = t.push(title, description));
    log::debug!("toast {id}: {title}");

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        crate::util::clock::sleep_ms(crate::config::TOAST_TTL_MS).await;
        toasts.update(|t| t.dismiss(&id));
    });
}

/// Renders the toasts from the `RwSignal<ToastState>` context.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster">
            <For each=move || toasts.get().items key=|t| t.id.clone() let:toast>
                {
                    let id = toast.id.clone();
                    let description = (!toast.description.is_empty())
                        .then(|| view! { <div class="toast__description">{toast.description}</div> });
                    view! {
                        <div class="toast" role="status">
                            <div class="toast__body">
                                <div class="toast__title">{toast.title}</div>
                                {description}
                            </div>
                            <button class="toast__close" title="Dismiss" on:click=move |_| toasts.update(|t| t.dismiss(&id))>
                                "✕"
                            </button>
                        </div>
                    }
                }
            </For>
        </div>
    }
}
