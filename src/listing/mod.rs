//! Pure search, filter, and sort functions behind the list pages.
//!
//! DESIGN
//! ======
//! Pages keep the full collection in a signal and derive the visible rows
//! through these functions, so the filtering rules are testable without a DOM.

pub mod blogs;
pub mod relative_time;
pub mod search;
pub mod stats;
