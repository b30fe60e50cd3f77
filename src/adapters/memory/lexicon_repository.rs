//! In-memory lexicon store.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::interests::{LexicalEntry, LexicalKind};
use crate::ports::{AddResult, LexiconRepository};

/// Lexicon held in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLexiconRepository {
    entries: Arc<RwLock<Vec<LexicalEntry>>>,
}

impl InMemoryLexiconRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-filled with the given words and phrases.
    ///
    /// Entries that fail validation are skipped.
    pub fn seeded<S, K>(stopwords: S, keywords: K) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        K: IntoIterator,
        K::Item: AsRef<str>,
    {
        let mut entries: Vec<LexicalEntry> = Vec::new();
        let candidates = stopwords
            .into_iter()
            .filter_map(|s| LexicalEntry::new(LexicalKind::Stopword, s.as_ref()).ok())
            .chain(
                keywords
                    .into_iter()
                    .filter_map(|k| LexicalEntry::new(LexicalKind::MultiWordKeyword, k.as_ref()).ok()),
            );
        for entry in candidates {
            if !entries.contains(&entry) {
                entries.push(entry);
            }
        }

        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    async fn list(&self, kind: LexicalKind) -> Vec<String> {
        self.entries
            .read()
            .await
            .iter()
            .filter(|e| e.kind() == kind)
            .map(|e| e.text().to_string())
            .collect()
    }
}

#[async_trait]
impl LexiconRepository for InMemoryLexiconRepository {
    async fn list_stopwords(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.list(LexicalKind::Stopword).await)
    }

    async fn list_keywords(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.list(LexicalKind::MultiWordKeyword).await)
    }

    async fn add(&self, entry: &LexicalEntry) -> Result<AddResult, DomainError> {
        let mut entries = self.entries.write().await;
        if entries.contains(entry) {
            return Ok(AddResult::Duplicate);
        }
        entries.push(entry.clone());
        Ok(AddResult::Added)
    }

    async fn remove(&self, kind: LexicalKind, text: &str) -> Result<bool, DomainError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| !(e.kind() == kind && e.text() == text));
        Ok(entries.len() != before)
    }
}
