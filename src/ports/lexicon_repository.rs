//! LexiconRepository port - stopwords and multi-word keywords.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::interests::{LexicalEntry, LexicalKind, LexiconSnapshot};

/// Result of attempting to add an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddResult {
    /// Entry was stored.
    Added,
    /// An identical entry of the same kind already exists.
    Duplicate,
}

/// Port for the two externally maintained lexical sets.
///
/// Entries are unique per kind. Keywords are returned in insertion order.
#[async_trait]
pub trait LexiconRepository: Send + Sync {
    /// All stopwords.
    async fn list_stopwords(&self) -> Result<Vec<String>, DomainError>;

    /// All multi-word keywords in insertion order.
    async fn list_keywords(&self) -> Result<Vec<String>, DomainError>;

    /// Store a new entry; duplicates are reported, not failed.
    async fn add(&self, entry: &LexicalEntry) -> Result<AddResult, DomainError>;

    /// Remove an entry. Returns `false` if it did not exist.
    async fn remove(&self, kind: LexicalKind, text: &str) -> Result<bool, DomainError>;

    /// Load both sets into one immutable snapshot.
    async fn snapshot(&self) -> Result<LexiconSnapshot, DomainError> {
        let stopwords = self.list_stopwords().await?;
        let keywords = self.list_keywords().await?;
        Ok(LexiconSnapshot::new(stopwords, keywords))
    }
}
