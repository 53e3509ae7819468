//! Bell icon with the notification list.

use leptos::prelude::*;

use super::toaster::push_toast;
use crate::data::records::NotificationKind;
use crate::data::seed;
use crate::state::notifications::NotificationsState;
use crate::state::toast::ToastState;

fn kind_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Info => "notification__dot notification__dot--info",
        NotificationKind::Success => "notification__dot notification__dot--success",
        NotificationKind::Warning => "notification__dot notification__dot--warning",
    }
}

#[component]
pub fn NotificationDropdown() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(NotificationsState::new(seed::notifications()));
    let open = RwSignal::new(false);

    let on_mark_all = move |_| {
        state.update(NotificationsState::mark_all_read);
        push_toast(toasts, "All notifications marked as read", "");
    };
    let on_clear = move |_| {
        state.update(NotificationsState::clear);
        push_toast(toasts, "Notifications cleared", "");
    };

    view! {
        <div class="notification-dropdown">
            <button class="header__icon-btn" title="Notifications" on:click=move |_| open.update(|o| *o = !*o)>
                "🔔"
                {move || state.with(NotificationsState::badge_label).map(|b| view! { <span class="badge">{b}</span> })}
            </button>
            <Show when=move || open.get()>
                <div class="dropdown dropdown--notifications">
                    <div class="dropdown__header">
                        <span>"Notifications"</span>
                        <div class="dropdown__actions">
                            <button class="dropdown__link" on:click=on_mark_all>"Mark all read"</button>
                            <button class="dropdown__link" on:click=on_clear>"Clear all"</button>
                        </div>
                    </div>
                    <Show
                        when=move || state.with(|s| !s.items.is_empty())
                        fallback=|| view! { <p class="dropdown__empty">"No notifications"</p> }
                    >
                        <For each=move || state.get().items key=|n| (n.id.clone(), n.is_read) let:note>
                            {
                                let id = note.id.clone();
                                let row_class = if note.is_read { "notification" } else { "notification notification--unread" };
                                view! {
                                    <div class=row_class on:click=move |_| state.update(|s| s.mark_read(&id))>
                                        <span class=kind_class(note.kind)></span>
                                        <div class="notification__body">
                                            <div class="notification__title">{note.title}</div>
                                            <div class="notification__message">{note.message}</div>
                                            <div class="notification__time">{note.timestamp}</div>
                                        </div>
                                    </div>
                                }
                            }
                        </For>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
