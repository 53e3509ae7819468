//! Avatar menu for the signed-in user.

use leptos::prelude::*;
use leptos_router::components::A;

use super::user_avatar::UserAvatar;
use crate::state::session::SessionState;
use crate::util::avatar::AvatarSize;
use crate::util::storage::BrowserStorage;

const MENU: &[(&str, &str)] = &[
    ("/profile", "Profile"),
    ("/new-blog", "Write a blog"),
    ("/followings", "Followings"),
    ("/saved-blogs", "Saved blogs"),
    ("/bookmarks", "Bookmarks"),
    ("/history", "Reading history"),
];

#[component]
pub fn UserProfileDropdown() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let open = RwSignal::new(false);

    let name = move || session.with(SessionState::display_name);
    let email = move || session.with(|s| s.email_or_empty().to_owned());

    let on_logout = move |_| {
        session.set(SessionState::sign_out(&BrowserStorage));
    };

    view! {
        <div class="profile-dropdown">
            <button class="profile-dropdown__trigger" on:click=move |_| open.update(|o| *o = !*o)>
                {move || view! { <UserAvatar name=name() email=email() size=AvatarSize::Small/> }}
            </button>
            <Show when=move || open.get()>
                <div class="dropdown dropdown--profile" on:click=move |_| open.set(false)>
                    <div class="dropdown__header dropdown__header--profile">
                        <div class="dropdown__name">{name}</div>
                        <div class="dropdown__email">{email}</div>
                    </div>
                    {MENU
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <A href=*href attr:class="dropdown__item">
                                    {*label}
                                </A>
                            }
                        })
                        .collect_view()}
                    <button class="dropdown__item dropdown__item--danger" on:click=on_logout>
                        "Log out"
                    </button>
                </div>
            </Show>
        </div>
    }
}
