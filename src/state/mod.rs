//! Browser-independent UI state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components hold these structs in `RwSignal`s and call their transition
//! methods; nothing here touches the DOM, so every module is unit-tested
//! natively.

pub mod article;
pub mod auth;
pub mod carousel;
pub mod editor;
pub mod notifications;
pub mod otp;
pub mod session;
pub mod toast;
