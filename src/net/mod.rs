//! Networking for the nominal REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the JSON POSTs and `types` defines their request bodies.
//! No server implements these endpoints; callers treat every failure as a
//! user-visible alert or a log line.

pub mod api;
pub mod types;
