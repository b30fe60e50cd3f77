//! Interest extraction tunables

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::interests::{DEFAULT_EDIT_WINDOW_DAYS, DEFAULT_MATCH_THRESHOLD};

/// Interest pipeline configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InterestsConfig {
    /// Minimum similarity for a fuzzy category match
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,

    /// Minimum number of days between two survey analyses of one user
    #[serde(default = "default_edit_window_days")]
    pub edit_window_days: i64,
}

impl InterestsConfig {
    /// Validate interest configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.match_threshold) {
            return Err(ValidationError::InvalidMatchThreshold);
        }
        if !(1..=365).contains(&self.edit_window_days) {
            return Err(ValidationError::InvalidEditWindow);
        }
        Ok(())
    }
}

impl Default for InterestsConfig {
    fn default() -> Self {
        Self {
            match_threshold: default_match_threshold(),
            edit_window_days: default_edit_window_days(),
        }
    }
}

fn default_match_threshold() -> f64 {
    DEFAULT_MATCH_THRESHOLD
}

fn default_edit_window_days() -> i64 {
    DEFAULT_EDIT_WINDOW_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interests_defaults() {
        let config = InterestsConfig::default();
        assert_eq!(config.match_threshold, 0.6);
        assert_eq!(config.edit_window_days, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_threshold_out_of_range() {
        let config = InterestsConfig {
            match_threshold: 1.5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMatchThreshold));

        let config = InterestsConfig {
            match_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_edit_window() {
        let config = InterestsConfig {
            edit_window_days: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidEditWindow));
    }
}
