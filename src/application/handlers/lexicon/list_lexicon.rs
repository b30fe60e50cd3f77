//! ListLexiconHandler - query handler for one lexical set.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::interests::LexicalKind;
use crate::ports::LexiconRepository;

/// Query for all entries of one kind.
#[derive(Debug, Clone, Copy)]
pub struct ListLexiconQuery {
    pub kind: LexicalKind,
}

pub struct ListLexiconHandler {
    repository: Arc<dyn LexiconRepository>,
}

impl ListLexiconHandler {
    pub fn new(repository: Arc<dyn LexiconRepository>) -> Self {
        Self { repository }
    }

    /// Entries in stored order.
    pub async fn handle(&self, query: ListLexiconQuery) -> Result<Vec<String>, DomainError> {
        match query.kind {
            LexicalKind::Stopword => self.repository.list_stopwords().await,
            LexicalKind::MultiWordKeyword => self.repository.list_keywords().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryLexiconRepository;

    #[tokio::test]
    async fn lists_requested_kind_only() {
        let repo = Arc::new(InMemoryLexiconRepository::seeded(
            ["a", "the"],
            ["art history"],
        ));
        let handler = ListLexiconHandler::new(repo);

        let stopwords = handler
            .handle(ListLexiconQuery {
                kind: LexicalKind::Stopword,
            })
            .await
            .unwrap();
        let keywords = handler
            .handle(ListLexiconQuery {
                kind: LexicalKind::MultiWordKeyword,
            })
            .await
            .unwrap();

        assert_eq!(stopwords, vec!["a", "the"]);
        assert_eq!(keywords, vec!["art history"]);
    }
}
