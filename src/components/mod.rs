//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the header, auth modal, landing sections and list
//! chrome while reading/writing shared state from Leptos context providers.

pub mod auth_modal;
pub mod blog_card;
pub mod blog_editor;
pub mod empty_state;
pub mod footer;
pub mod forgot_password;
pub mod header;
pub mod hero;
pub mod knowledge_share;
pub mod markdown_preview;
pub mod most_liked_blogs;
pub mod notification_dropdown;
pub mod otp_verification;
pub mod recent_videos;
pub mod search_bar;
pub mod toaster;
pub mod trending_tags;
pub mod user_avatar;
pub mod user_profile_dropdown;
