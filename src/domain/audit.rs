//! Append-only audit log entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{AuditEntryId, Timestamp, UserId, ValidationError};

/// Severity of an audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditLevel {
    Info,
    Warn,
    Error,
    Debug,
}

impl AuditLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditLevel::Info => "info",
            AuditLevel::Warn => "warn",
            AuditLevel::Error => "error",
            AuditLevel::Debug => "debug",
        }
    }
}

impl fmt::Display for AuditLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuditLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(AuditLevel::Info),
            "warn" => Ok(AuditLevel::Warn),
            "error" => Ok(AuditLevel::Error),
            "debug" => Ok(AuditLevel::Debug),
            other => Err(ValidationError::invalid_format(
                "level",
                format!("unknown audit level '{}'", other),
            )),
        }
    }
}

/// One audit log record about a user-facing action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: AuditEntryId,
    pub level: AuditLevel,
    pub message: String,
    pub subject_user_id: UserId,
    pub subject_label: String,
    pub timestamp: Timestamp,
}

impl AuditEntry {
    /// Message recorded after every successful analysis.
    pub const INTERESTS_UPDATED: &'static str = "User updated interests based on survey";

    /// Creates an info-level entry stamped now.
    pub fn info(
        message: impl Into<String>,
        subject_user_id: UserId,
        subject_label: impl Into<String>,
    ) -> Self {
        Self {
            id: AuditEntryId::new(),
            level: AuditLevel::Info,
            message: message.into(),
            subject_user_id,
            subject_label: subject_label.into(),
            timestamp: Timestamp::now(),
        }
    }

    /// The entry written when a user's interests were updated from a survey.
    pub fn interests_updated(subject_user_id: UserId, subject_label: impl Into<String>) -> Self {
        Self::info(Self::INTERESTS_UPDATED, subject_user_id, subject_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interests_updated_is_info_level() {
        let entry = AuditEntry::interests_updated(UserId::new("u-1").unwrap(), "a@b.c");
        assert_eq!(entry.level, AuditLevel::Info);
        assert_eq!(entry.message, "User updated interests based on survey");
        assert_eq!(entry.subject_label, "a@b.c");
    }

    #[test]
    fn level_round_trips_through_str() {
        for level in [AuditLevel::Info, AuditLevel::Warn, AuditLevel::Error, AuditLevel::Debug] {
            assert_eq!(level.as_str().parse::<AuditLevel>().unwrap(), level);
        }
        assert!("fatal".parse::<AuditLevel>().is_err());
    }
}
