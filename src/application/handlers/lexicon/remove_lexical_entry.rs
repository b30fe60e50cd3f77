//! RemoveLexicalEntryHandler - deletes a stopword or multi-word keyword.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, DomainError, ErrorCode};
use crate::domain::interests::{LexicalEntry, LexicalKind};
use crate::ports::LexiconRepository;

/// Command to remove a lexicon entry.
#[derive(Debug, Clone)]
pub struct RemoveLexicalEntryCommand {
    pub kind: LexicalKind,
    pub text: String,
}

/// Handler for removing lexicon entries.
pub struct RemoveLexicalEntryHandler {
    repository: Arc<dyn LexiconRepository>,
}

impl RemoveLexicalEntryHandler {
    pub fn new(repository: Arc<dyn LexiconRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `ValidationFailed` for blank text
    /// - `NotFound` if no such entry exists
    pub async fn handle(
        &self,
        cmd: RemoveLexicalEntryCommand,
        metadata: CommandMetadata,
    ) -> Result<(), DomainError> {
        // Same normalization as on insert, so "The" removes "the".
        let entry = LexicalEntry::new(cmd.kind, &cmd.text)?;

        if !self.repository.remove(entry.kind(), entry.text()).await? {
            return Err(DomainError::new(
                ErrorCode::NotFound,
                format!("{} '{}' not found", entry.kind(), entry.text()),
            ));
        }

        tracing::info!(
            kind = %entry.kind(),
            text = %entry.text(),
            correlation_id = %metadata.correlation_id(),
            "Lexicon entry removed"
        );
        Ok(())
    }
}
