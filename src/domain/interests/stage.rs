//! AnalysisStage - lifecycle of a single analyze request.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Pipeline stage of one analysis run.
///
/// ```text
/// Received → WindowChecked → Extracted → Categorized → Persisted
///          → UserUpdated → ChannelsEnsured → Logged → Done
/// ```
///
/// Any non-terminal stage may move to `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStage {
    Received,
    WindowChecked,
    Extracted,
    Categorized,
    Persisted,
    UserUpdated,
    ChannelsEnsured,
    Logged,
    Done,
    Error,
}

impl AnalysisStage {
    /// The next stage on the success path, if any.
    pub fn next(&self) -> Option<AnalysisStage> {
        use AnalysisStage::*;
        match self {
            Received => Some(WindowChecked),
            WindowChecked => Some(Extracted),
            Extracted => Some(Categorized),
            Categorized => Some(Persisted),
            Persisted => Some(UserUpdated),
            UserUpdated => Some(ChannelsEnsured),
            ChannelsEnsured => Some(Logged),
            Logged => Some(Done),
            Done | Error => None,
        }
    }

    /// True once a failure here leaves earlier writes in place.
    pub fn has_side_effects(&self) -> bool {
        use AnalysisStage::*;
        matches!(self, Persisted | UserUpdated | ChannelsEnsured | Logged | Done)
    }
}

impl StateMachine for AnalysisStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        if *target == AnalysisStage::Error {
            return !self.is_terminal();
        }
        self.next() == Some(*target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self.next() {
            Some(next) => vec![next, AnalysisStage::Error],
            None => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AnalysisStage::*;

    const ALL: [AnalysisStage; 10] = [
        Received,
        WindowChecked,
        Extracted,
        Categorized,
        Persisted,
        UserUpdated,
        ChannelsEnsured,
        Logged,
        Done,
        Error,
    ];

    #[test]
    fn success_path_walks_every_stage() {
        let mut stage = Received;
        let mut visited = vec![stage];
        while let Some(next) = stage.next() {
            stage = stage.transition_to(next).unwrap();
            visited.push(stage);
        }
        assert_eq!(stage, Done);
        assert_eq!(visited.len(), 9);
    }

    #[test]
    fn skipping_a_stage_is_rejected() {
        assert!(Received.transition_to(Extracted).is_err());
        assert!(Categorized.transition_to(UserUpdated).is_err());
    }

    #[test]
    fn any_running_stage_can_fail() {
        for stage in ALL.iter().filter(|s| !s.is_terminal()) {
            assert_eq!(stage.transition_to(Error), Ok(Error));
        }
    }

    #[test]
    fn done_and_error_are_terminal() {
        assert!(Done.is_terminal());
        assert!(Error.is_terminal());
        assert!(Done.transition_to(Error).is_err());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for stage in ALL {
            for target in ALL {
                assert_eq!(
                    stage.can_transition_to(&target),
                    stage.valid_transitions().contains(&target),
                    "{:?} -> {:?}",
                    stage,
                    target
                );
            }
        }
    }

    #[test]
    fn side_effects_start_at_persisted() {
        assert!(!Categorized.has_side_effects());
        assert!(Persisted.has_side_effects());
    }
}
