//! Lexical resources: stopwords and multi-word keyword phrases.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::channel::MAX_TITLE_LENGTH;
use crate::domain::foundation::ValidationError;

/// Which of the two lexical sets an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexicalKind {
    Stopword,
    MultiWordKeyword,
}

impl LexicalKind {
    /// Storage / URL representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            LexicalKind::Stopword => "stopword",
            LexicalKind::MultiWordKeyword => "multi_word_keyword",
        }
    }
}

impl fmt::Display for LexicalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LexicalKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stopword" => Ok(LexicalKind::Stopword),
            "multi_word_keyword" => Ok(LexicalKind::MultiWordKeyword),
            other => Err(ValidationError::invalid_format(
                "kind",
                format!("unknown lexical kind '{}'", other),
            )),
        }
    }
}

/// A single normalized lexicon entry.
///
/// Text is trimmed, lower-cased and has inner whitespace collapsed to
/// single spaces, so lookups against the lower-cased corpus are exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LexicalEntry {
    text: String,
    kind: LexicalKind,
}

impl LexicalEntry {
    /// Normalizes and validates raw text for the given kind.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the text is blank
    /// - `InvalidFormat` if a keyword has fewer than two words, or a
    ///   stopword contains whitespace
    /// - `OutOfRange` if the normalized text is longer than a channel title
    pub fn new(kind: LexicalKind, text: &str) -> Result<Self, ValidationError> {
        let words: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();

        if words.is_empty() {
            return Err(ValidationError::empty_field("text"));
        }

        let text = words.join(" ");
        let len = text.chars().count();
        if len > MAX_TITLE_LENGTH {
            return Err(ValidationError::out_of_range(
                "text",
                1,
                MAX_TITLE_LENGTH as i64,
                len as i64,
            ));
        }

        match kind {
            LexicalKind::Stopword if words.len() > 1 => {
                return Err(ValidationError::invalid_format(
                    "text",
                    "stopword must be a single word",
                ));
            }
            LexicalKind::MultiWordKeyword if words.len() < 2 => {
                return Err(ValidationError::invalid_format(
                    "text",
                    "keyword must contain at least two words",
                ));
            }
            _ => {}
        }

        Ok(Self { text, kind })
    }

    /// Reconstitutes an entry from storage without re-validating.
    pub fn reconstitute(kind: LexicalKind, text: String) -> Self {
        Self { text, kind }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> LexicalKind {
        self.kind
    }
}

/// Immutable per-run view of both lexical sets.
///
/// Loaded once at the start of an analysis so a concurrent admin edit
/// can never be observed half-way through a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexiconSnapshot {
    stopwords: HashSet<String>,
    keywords: Vec<String>,
}

impl LexiconSnapshot {
    /// Builds a snapshot, lower-casing every entry.
    ///
    /// Keyword order is preserved (it decides phrase-match order); repeated
    /// keywords keep their first position.
    pub fn new<S, K>(stopwords: S, keywords: K) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        K: IntoIterator,
        K::Item: AsRef<str>,
    {
        let stopwords = stopwords
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        let mut seen = HashSet::new();
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase())
            .filter(|k| !k.is_empty() && seen.insert(k.clone()))
            .collect();

        Self { stopwords, keywords }
    }

    /// Builds a snapshot from stored entries, routing each by kind.
    pub fn from_entries(entries: &[LexicalEntry]) -> Self {
        let stopwords = entries
            .iter()
            .filter(|e| e.kind() == LexicalKind::Stopword)
            .map(LexicalEntry::text);
        let keywords = entries
            .iter()
            .filter(|e| e.kind() == LexicalKind::MultiWordKeyword)
            .map(LexicalEntry::text);
        Self::new(stopwords, keywords)
    }

    /// Case-insensitive stopword test.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Keyword phrases in stored order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_is_lowercased_and_trimmed() {
        let entry = LexicalEntry::new(LexicalKind::Stopword, "  The ").unwrap();
        assert_eq!(entry.text(), "the");
    }

    #[test]
    fn keyword_inner_whitespace_is_collapsed() {
        let entry = LexicalEntry::new(LexicalKind::MultiWordKeyword, "Machine   Learning").unwrap();
        assert_eq!(entry.text(), "machine learning");
    }

    #[test]
    fn blank_entry_is_rejected() {
        let err = LexicalEntry::new(LexicalKind::Stopword, "   ").unwrap_err();
        assert!(matches!(err, ValidationError::EmptyField { .. }));
    }

    #[test]
    fn keyword_longer_than_channel_title_is_rejected() {
        let text = format!("deep {}", "x".repeat(MAX_TITLE_LENGTH));
        assert!(matches!(
            LexicalEntry::new(LexicalKind::MultiWordKeyword, &text),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn keyword_at_channel_title_length_is_accepted() {
        let text = format!("deep {}", "x".repeat(MAX_TITLE_LENGTH - 5));
        let entry = LexicalEntry::new(LexicalKind::MultiWordKeyword, &text).unwrap();
        assert_eq!(entry.text().chars().count(), MAX_TITLE_LENGTH);
    }

    #[test]
    fn single_word_keyword_is_rejected() {
        let err = LexicalEntry::new(LexicalKind::MultiWordKeyword, "robotics").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn multi_word_stopword_is_rejected() {
        assert!(LexicalEntry::new(LexicalKind::Stopword, "of the").is_err());
    }

    #[test]
    fn kind_parses_from_storage_form() {
        assert_eq!("stopword".parse::<LexicalKind>().unwrap(), LexicalKind::Stopword);
        assert_eq!(
            "multi_word_keyword".parse::<LexicalKind>().unwrap(),
            LexicalKind::MultiWordKeyword
        );
        assert!("other".parse::<LexicalKind>().is_err());
    }

    #[test]
    fn snapshot_stopwords_are_case_insensitive() {
        let snapshot = LexiconSnapshot::new(["The", "and"], Vec::<String>::new());
        assert!(snapshot.is_stopword("the"));
        assert!(snapshot.is_stopword("AND"));
        assert!(!snapshot.is_stopword("hiking"));
    }

    #[test]
    fn snapshot_keeps_keyword_order_and_drops_repeats() {
        let snapshot = LexiconSnapshot::new(
            Vec::<String>::new(),
            ["Web Development", "machine learning", "web development"],
        );
        assert_eq!(snapshot.keywords(), &["web development", "machine learning"]);
    }

    #[test]
    fn snapshot_from_entries_routes_by_kind() {
        let entries = vec![
            LexicalEntry::new(LexicalKind::Stopword, "i").unwrap(),
            LexicalEntry::new(LexicalKind::MultiWordKeyword, "data science").unwrap(),
        ];
        let snapshot = LexiconSnapshot::from_entries(&entries);
        assert!(snapshot.is_stopword("I"));
        assert_eq!(snapshot.keywords(), &["data science"]);
        assert_eq!(snapshot.stopword_count(), 1);
    }
}
