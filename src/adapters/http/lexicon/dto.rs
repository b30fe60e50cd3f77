//! HTTP DTOs for lexicon administration.

use serde::{Deserialize, Serialize};

use crate::domain::interests::{LexicalEntry, LexicalKind};

/// Request to add a stopword or keyword.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddLexicalEntryRequest {
    #[serde(default)]
    pub text: String,
}

/// A single stored entry.
#[derive(Debug, Clone, Serialize)]
pub struct LexicalEntryResponse {
    pub kind: LexicalKind,
    pub text: String,
}

impl From<LexicalEntry> for LexicalEntryResponse {
    fn from(entry: LexicalEntry) -> Self {
        Self {
            kind: entry.kind(),
            text: entry.text().to_string(),
        }
    }
}

/// All entries of one kind, in stored order.
#[derive(Debug, Clone, Serialize)]
pub struct LexiconListResponse {
    pub kind: LexicalKind,
    pub entries: Vec<String>,
}
