//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its seeded collection and route-scoped state and delegates
//! rendering details to `components`.

pub mod all_blogs;
pub mod blog_detail;
pub mod bookmarks;
pub mod edit_blog;
pub mod followings;
pub mod history;
pub mod index;
pub mod new_blog;
pub mod not_found;
pub mod profile;
pub mod saved_blogs;
