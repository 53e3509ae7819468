//! Letter avatar with a per-email background color.

use leptos::prelude::*;

use crate::util::avatar::{AvatarSize, color_for, initial};

/// Circle showing `image` when present, otherwise the name's initial on a
/// color derived from `email`.
#[component]
pub fn UserAvatar(
    #[prop(into)] name: String,
    #[prop(into)] email: String,
    #[prop(optional)] size: AvatarSize,
    #[prop(default = None)] image: Option<String>,
) -> impl IntoView {
    let class = size.class();
    match image {
        Some(src) => view! { <img class=class src=src alt=name/> }.into_any(),
        None => {
            let style = format!("background-color: {}", color_for(&email));
            view! { <span class=class style=style title=name.clone()>{initial(&name)}</span> }.into_any()
        }
    }
}
