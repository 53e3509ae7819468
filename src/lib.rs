//! # techblog
//!
//! Leptos + WASM frontend for the TechBlog community site: landing page, blog
//! feed, post editor, profile dashboard, reading lists, and the multi-step
//! authentication modal.
//!
//! Browser-only glue (storage, timers, HTTP, dialogs) is gated behind the
//! `csr` feature. Everything else, including the auth view-state machine and
//! the list filters, compiles natively so it can be unit tested.

pub mod app;
pub mod components;
pub mod config;
pub mod data;
pub mod error;
pub mod listing;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

pub use app::App;
