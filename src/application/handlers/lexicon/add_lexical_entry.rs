//! AddLexicalEntryHandler - adds a stopword or multi-word keyword.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, DomainError, ErrorCode};
use crate::domain::interests::{LexicalEntry, LexicalKind};
use crate::ports::{AddResult, LexiconRepository};

/// Command to add a lexicon entry.
#[derive(Debug, Clone)]
pub struct AddLexicalEntryCommand {
    pub kind: LexicalKind,
    pub text: String,
}

/// Handler for adding lexicon entries.
pub struct AddLexicalEntryHandler {
    repository: Arc<dyn LexiconRepository>,
}

impl AddLexicalEntryHandler {
    pub fn new(repository: Arc<dyn LexiconRepository>) -> Self {
        Self { repository }
    }

    /// Returns the stored (normalized) entry.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` for blank text or a single-word keyword
    /// - `Conflict` if the entry already exists
    pub async fn handle(
        &self,
        cmd: AddLexicalEntryCommand,
        metadata: CommandMetadata,
    ) -> Result<LexicalEntry, DomainError> {
        // 1. Normalize and validate
        let entry = LexicalEntry::new(cmd.kind, &cmd.text)?;

        // 2. Store unless present
        match self.repository.add(&entry).await? {
            AddResult::Added => {
                tracing::info!(
                    kind = %entry.kind(),
                    text = %entry.text(),
                    correlation_id = %metadata.correlation_id(),
                    "Lexicon entry added"
                );
                Ok(entry)
            }
            AddResult::Duplicate => Err(DomainError::new(
                ErrorCode::Conflict,
                format!("{} '{}' already exists", entry.kind(), entry.text()),
            )),
        }
    }
}
