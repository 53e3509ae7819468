//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_modal::AuthModalHandle;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::toaster::Toaster;
use crate::pages::{
    all_blogs::AllBlogsPage, blog_detail::BlogDetailPage, bookmarks::BookmarksPage, edit_blog::EditBlogPage,
    followings::FollowingsPage, history::HistoryPage, index::IndexPage, new_blog::NewBlogPage,
    not_found::NotFoundPage, profile::ProfilePage, saved_blogs::SavedBlogsPage,
};
use crate::state::{session::SessionState, toast::ToastState};

/// Root application component.
///
/// Provides the session, toast, and auth-modal contexts and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(SessionState::default()));
    provide_context(RwSignal::new(ToastState::default()));
    provide_context(AuthModalHandle::new());

    view! {
        <Title text="TechBlog"/>

        <Router>
            <Header/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=IndexPage/>
                <Route path=StaticSegment("blogs") view=AllBlogsPage/>
                <Route path=(StaticSegment("blog"), ParamSegment("id")) view=BlogDetailPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("new-blog") view=NewBlogPage/>
                <Route path=(StaticSegment("edit-blog"), ParamSegment("id")) view=EditBlogPage/>
                <Route path=StaticSegment("followings") view=FollowingsPage/>
                <Route path=StaticSegment("history") view=HistoryPage/>
                <Route path=StaticSegment("saved-blogs") view=SavedBlogsPage/>
                <Route path=StaticSegment("bookmarks") view=BookmarksPage/>
            </Routes>
            <Footer/>
            <Toaster/>
        </Router>
    }
}
