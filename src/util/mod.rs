//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod avatar;
pub mod browser;
pub mod clock;
pub mod markdown;
pub mod storage;
