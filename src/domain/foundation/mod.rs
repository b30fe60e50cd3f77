//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, error types and the state machine
//! trait that form the vocabulary of the interest-channels domain.

mod command;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AnalysisId, AuditEntryId, ChannelId, UserId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
