//! Application configuration: fixed product constants plus build-time
//! overrides.
//!
//! DESIGN
//! ======
//! A WASM bundle has no process environment at runtime, so overrides are read
//! with `option_env!` when the crate is compiled:
//!
//! - `TECHBLOG_API_BASE`: prefix for the nominal REST endpoints (default: same origin).
//! - `TECHBLOG_LOG`: log level name (`error`..`trace`, default `debug`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

/// Demo account accepted without any network round trip.
pub const DEMO_EMAIL: &str = "test@example.com";
/// Password paired with [`DEMO_EMAIL`].
pub const DEMO_PASSWORD: &str = "password";

/// localStorage key holding `"true"` while a user is signed in.
pub const STORAGE_KEY_LOGGED_IN: &str = "isLoggedIn";
/// localStorage key holding the signed-in user's email.
pub const STORAGE_KEY_USER_EMAIL: &str = "userEmail";

/// Number of characters in an OTP code.
pub const OTP_LENGTH: usize = 6;
/// Seconds before the OTP resend action becomes available.
pub const OTP_RESEND_SECS: u32 = 60;

/// Delay before the "check your email" screen returns to login.
pub const RESET_REDIRECT_MS: u32 = 3_000;
/// Simulated latency for profile and editor saves.
pub const SIMULATED_SAVE_MS: u32 = 1_000;
/// Simulated latency for the all-blogs "load more" append.
pub const LOAD_MORE_MS: u32 = 1_000;
/// Records appended per all-blogs page.
pub const BLOG_PAGE_SIZE: usize = 12;
/// All-blogs stops offering more records past this many.
pub const BLOG_FEED_CAP: usize = 60;
/// Scrolling within this many pixels of the feed's end loads the next page.
pub const SCROLL_LOAD_MARGIN_PX: i32 = 200;
/// Hero carousel slide interval.
pub const CAROUSEL_INTERVAL_MS: u32 = 5_000;
/// Toasts dismiss themselves after this long.
pub const TOAST_TTL_MS: u32 = 4_000;

/// Markdown reference opened from the editor.
pub const MARKDOWN_GUIDE_URL: &str = "https://www.markdownguide.org/cheat-sheet/";

const DEFAULT_LOG_LEVEL: log::Level = log::Level::Debug;

/// Prefix prepended to every `/api/...` path.
pub fn api_base() -> &'static str {
    option_env!("TECHBLOG_API_BASE").unwrap_or("")
}

/// Log level for the console logger.
pub fn log_level() -> log::Level {
    parse_log_level(option_env!("TECHBLOG_LOG"))
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|value| log::Level::from_str(value.trim()).ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
