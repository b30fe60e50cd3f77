//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `interests` - Survey interest extraction, category matching, edit window
//! - `channel` - Topical discussion channels
//! - `audit` - Append-only audit entries
//! - `user` - View onto the external user record

pub mod audit;
pub mod channel;
pub mod foundation;
pub mod interests;
pub mod user;
