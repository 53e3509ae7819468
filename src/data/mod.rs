//! Record types and the seeded mock collections every page starts from.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend. Pages clone a seed into a signal on mount and mutate
//! that copy; nothing survives a reload.

pub mod records;
pub mod seed;
